use sqlx::FromRow;

use super::DbId;
use crate::repositories::Record;

/// A row from the `tenants` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TenantModel {
    pub id: Option<DbId>,
    pub name: String,
    pub contact_email: String,
}

impl Record for TenantModel {
    const TABLE: &'static str = "tenants";
    const KIND: &'static str = "Tenant";

    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn set_id(&mut self, id: Option<DbId>) {
        self.id = id;
    }
}
