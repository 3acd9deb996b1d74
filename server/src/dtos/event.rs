use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DbId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: Option<DbId>,
    pub name: String,
    pub event_type: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
}
