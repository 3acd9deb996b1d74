use std::sync::Arc;

use crate::config::StoreKind;
use crate::repositories::Stores;
use crate::services::{EventService, SampleService, TenantService, TransactionService};

/// Shared application state handed to every handler via `State<AppState>`.
///
/// Services are built once here from the repositories they depend on.
#[derive(Clone)]
pub struct AppState {
    pub store: StoreKind,
    pub events: Arc<EventService>,
    pub tenants: Arc<TenantService>,
    pub samples: Arc<SampleService>,
    pub transactions: Arc<TransactionService>,
}

impl AppState {
    pub fn new(store: StoreKind, stores: Stores) -> Self {
        Self {
            store,
            events: Arc::new(EventService::new(stores.events)),
            tenants: Arc::new(TenantService::new(stores.tenants)),
            samples: Arc::new(SampleService::new(stores.samples)),
            transactions: Arc::new(TransactionService::new(stores.transactions)),
        }
    }
}
