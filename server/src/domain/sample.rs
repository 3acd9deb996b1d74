use crate::models::DbId;

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
}
