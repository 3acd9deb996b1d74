use chrono::{DateTime, Utc};

use crate::models::DbId;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Option<DbId>,
    pub name: String,
    pub event_type: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
}
