//! Business-side shapes, decoupled from both storage and the wire format.

pub mod event;
pub mod sample;
pub mod tenant;
pub mod transaction;

pub use event::Event;
pub use sample::Sample;
pub use tenant::Tenant;
pub use transaction::{Buyer, Ticket, Transaction};
