use super::STATUS_PENDING;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Resource {
    pub id: i64,
    pub resource_type: String,
    pub resource_name: String,
    pub quantity: i32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewResource {
    pub resource_type: String,
    pub resource_name: String,
    pub quantity: i32,
    pub status: String,
}

impl NewResource {
    pub fn requested(resource_type: String, quantity: i32) -> Self {
        Self {
            resource_name: format!("{resource_type} Request"),
            resource_type,
            quantity,
            status: STATUS_PENDING.to_string(),
        }
    }
}
