use sqlx::FromRow;

use super::DbId;
use crate::repositories::Record;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SampleModel {
    pub id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
}

impl Record for SampleModel {
    const TABLE: &'static str = "samples";
    const KIND: &'static str = "Sample";

    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn set_id(&mut self, id: Option<DbId>) {
        self.id = id;
    }
}
