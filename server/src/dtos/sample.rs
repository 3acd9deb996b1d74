use serde::{Deserialize, Serialize};

use crate::models::DbId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDto {
    pub id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
}
