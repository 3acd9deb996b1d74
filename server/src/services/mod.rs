//! Use-case orchestration over repositories and mappers.

pub mod crud;
pub mod transaction;

pub use crud::CrudService;
pub use transaction::TransactionService;

use crate::domain::{Event, Sample, Tenant};
use crate::models::{EventModel, SampleModel, TenantModel};

pub type EventService = CrudService<EventModel, Event>;
pub type TenantService = CrudService<TenantModel, Tenant>;
pub type SampleService = CrudService<SampleModel, Sample>;
