use crate::models::DbId;

#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
    pub id: Option<DbId>,
    pub name: String,
    pub contact_email: String,
}
