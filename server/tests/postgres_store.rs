//! Repository tests against a real PostgreSQL database.
//!
//! Run with `DATABASE_URL` pointing at a disposable server and
//! `cargo test -- --ignored`; `sqlx::test` creates a fresh database per test
//! and applies `migrations/`.

use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use ingresso_server::domain::{Buyer, Ticket};
use ingresso_server::models::{SampleModel, TransactionModel};
use ingresso_server::repositories::{MemoryRepository, PgStore, Repository, StoreError};
use ingresso_server::services::TransactionService;
use ingresso_server::utils::error::AppError;

fn transaction() -> TransactionModel {
    TransactionModel {
        id: None,
        ticket_event_id: Some(10),
        ticket_description: "Arquibancada".to_string(),
        ticket_price: Decimal::new(9990, 2),
        buyer_name: "Carla".to_string(),
        buyer_email: "carla@example.com".to_string(),
        created_at: Utc::now().trunc_subsecs(6),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_saved_transaction_reads_back_equal(pool: PgPool) {
    let store = PgStore::new(pool);
    let input = transaction();

    let saved = Repository::<TransactionModel>::save(&store, input.clone())
        .await
        .unwrap();
    let id = saved.id.unwrap();

    let found = Repository::<TransactionModel>::find_by_id(&store, id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, TransactionModel { id: Some(id), ..input });
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_sample_update_and_delete(pool: PgPool) {
    let store = PgStore::new(pool);
    let saved = Repository::<SampleModel>::save(
        &store,
        SampleModel {
            id: None,
            name: "draft".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let renamed = SampleModel {
        name: "final".to_string(),
        ..saved.clone()
    };
    let updated = Repository::<SampleModel>::save(&store, renamed.clone())
        .await
        .unwrap();
    assert_eq!(updated, renamed);

    let id = saved.id.unwrap();
    assert!(Repository::<SampleModel>::delete(&store, id).await.unwrap());
    assert!(Repository::<SampleModel>::find_all(&store).await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_of_missing_row_is_reported(pool: PgPool) {
    let store = PgStore::new(pool);
    let ghost = SampleModel {
        id: Some(404),
        name: "ghost".to_string(),
        description: None,
    };

    let err = Repository::<SampleModel>::save(&store, ghost).await.unwrap_err();
    assert!(matches!(err, StoreError::MissingRow { id: 404, .. }));
}

fn ticket(price: Decimal) -> Ticket {
    Ticket {
        event_id: Some(3),
        description: "Cadeira numerada".to_string(),
        price,
    }
}

fn buyer() -> Buyer {
    Buyer {
        name: "Davi".to_string(),
        email: "davi@example.com".to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_fractional_cent_price_never_reaches_the_table(pool: PgPool) {
    let store = Arc::new(PgStore::new(pool));
    let service = TransactionService::new(store.clone());

    let err = service
        .create_transaction(Some(ticket(Decimal::new(25555, 3))), Some(buyer()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    let err = service
        .create_transaction(Some(ticket(Decimal::from(10_000_000_000i64))), Some(buyer()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    let rows = Repository::<TransactionModel>::find_all(store.as_ref())
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_postgres_and_memory_backends_agree(pool: PgPool) {
    let postgres = TransactionService::new(Arc::new(PgStore::new(pool)));
    let memory = TransactionService::new(Arc::new(MemoryRepository::<TransactionModel>::new()));

    for price in [Decimal::new(255, 1), Decimal::from(120), Decimal::new(999_999_999_999, 2)] {
        let from_pg = postgres
            .create_transaction(Some(ticket(price)), Some(buyer()))
            .await
            .unwrap();
        let from_mem = memory
            .create_transaction(Some(ticket(price)), Some(buyer()))
            .await
            .unwrap();

        assert_eq!(from_pg.ticket, from_mem.ticket);
        assert_eq!(
            from_pg.ticket.price.to_string(),
            from_mem.ticket.price.to_string()
        );
        assert_eq!(from_pg.buyer, from_mem.buyer);

        let reread = postgres
            .get_transaction(from_pg.id.unwrap())
            .await
            .unwrap();
        assert_eq!(reread, from_pg);
        assert_eq!(reread.ticket.price.to_string(), from_pg.ticket.price.to_string());
    }

    assert_eq!(
        postgres.get_all_transactions().await.unwrap().len(),
        memory.get_all_transactions().await.unwrap().len()
    );
}
