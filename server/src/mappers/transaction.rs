use crate::domain::{Buyer, Ticket, Transaction};
use crate::dtos::{BuyerDto, TicketDto, TransactionDto};
use crate::models::TransactionModel;

impl From<TransactionModel> for Transaction {
    fn from(model: TransactionModel) -> Self {
        Self {
            id: model.id,
            ticket: Ticket {
                event_id: model.ticket_event_id,
                description: model.ticket_description,
                price: model.ticket_price,
            },
            buyer: Buyer {
                name: model.buyer_name,
                email: model.buyer_email,
            },
            created_at: model.created_at,
        }
    }
}

impl From<Transaction> for TransactionModel {
    fn from(entity: Transaction) -> Self {
        Self {
            id: entity.id,
            ticket_event_id: entity.ticket.event_id,
            ticket_description: entity.ticket.description,
            ticket_price: entity.ticket.price,
            buyer_name: entity.buyer.name,
            buyer_email: entity.buyer.email,
            created_at: entity.created_at,
        }
    }
}

impl From<Transaction> for TransactionDto {
    fn from(entity: Transaction) -> Self {
        Self {
            id: entity.id,
            ticket: entity.ticket.into(),
            buyer: entity.buyer.into(),
            created_at: entity.created_at,
        }
    }
}

impl From<TransactionDto> for Transaction {
    fn from(dto: TransactionDto) -> Self {
        Self {
            id: dto.id,
            ticket: dto.ticket.into(),
            buyer: dto.buyer.into(),
            created_at: dto.created_at,
        }
    }
}

impl From<Ticket> for TicketDto {
    fn from(ticket: Ticket) -> Self {
        Self {
            event_id: ticket.event_id,
            description: ticket.description,
            price: ticket.price,
        }
    }
}

impl From<TicketDto> for Ticket {
    fn from(dto: TicketDto) -> Self {
        Self {
            event_id: dto.event_id,
            description: dto.description,
            price: dto.price,
        }
    }
}

impl From<Buyer> for BuyerDto {
    fn from(buyer: Buyer) -> Self {
        Self {
            name: buyer.name,
            email: buyer.email,
        }
    }
}

impl From<BuyerDto> for Buyer {
    fn from(dto: BuyerDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn sale() -> Transaction {
        Transaction {
            id: Some(7),
            ticket: Ticket {
                event_id: Some(2),
                description: "Pista premium".to_string(),
                price: Decimal::new(18050, 2),
            },
            buyer: Buyer {
                name: "Ana Souza".to_string(),
                email: "ana@example.com".to_string(),
            },
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_model_is_flattened_ticket_and_buyer() {
        let model = TransactionModel::from(sale());
        assert_eq!(model.ticket_event_id, Some(2));
        assert_eq!(model.ticket_description, "Pista premium");
        assert_eq!(model.ticket_price, Decimal::new(18050, 2));
        assert_eq!(model.buyer_name, "Ana Souza");
        assert_eq!(model.buyer_email, "ana@example.com");
    }

    #[test]
    fn test_model_entity_round_trip() {
        let entity = sale();
        assert_eq!(Transaction::from(TransactionModel::from(entity.clone())), entity);
    }

    #[test]
    fn test_dto_translation_is_idempotent() {
        let dto = TransactionDto::from(sale());
        assert_eq!(TransactionDto::from(Transaction::from(dto.clone())), dto);
    }

    #[test]
    fn test_dto_serializes_camel_case_with_string_price() {
        let json = serde_json::to_value(TransactionDto::from(sale())).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["ticket"]["eventId"], 2);
        assert_eq!(json["ticket"]["price"], "180.50");
        assert_eq!(json["buyer"]["email"], "ana@example.com");
        assert!(json["createdAt"].is_string());
    }
}
