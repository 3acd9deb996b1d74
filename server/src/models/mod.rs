//! Storage records: one persisted shape per table.

pub mod event;
pub mod sample;
pub mod tenant;
pub mod transaction;

pub use event::EventModel;
pub use sample::SampleModel;
pub use tenant::TenantModel;
pub use transaction::TransactionModel;

/// Numeric primary key shared by every table.
pub type DbId = i64;
