//! Wire shapes exchanged with HTTP clients. Keys are camelCase.

pub mod event;
pub mod sample;
pub mod tenant;
pub mod transaction;

pub use event::EventDto;
pub use sample::SampleDto;
pub use tenant::TenantDto;
pub use transaction::{BuyerDto, TicketDto, TransactionDto, TransactionRequest};
