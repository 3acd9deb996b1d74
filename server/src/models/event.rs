use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbId;
use crate::repositories::Record;

/// A row from the `events` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EventModel {
    pub id: Option<DbId>,
    pub name: String,
    pub event_type: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
}

impl Record for EventModel {
    const TABLE: &'static str = "events";
    const KIND: &'static str = "Event";

    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn set_id(&mut self, id: Option<DbId>) {
        self.id = id;
    }
}
