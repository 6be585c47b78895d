//! Client entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the clients table.
#[derive(Debug, Clone, FromRow)]
pub struct ClientEntity {
    pub id: Uuid,
    pub client_name: String,
    pub contact: String,
    pub client_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClientEntity> for domain::models::Client {
    fn from(entity: ClientEntity) -> Self {
        Self {
            id: entity.id,
            client_name: entity.client_name,
            contact: entity.contact,
            client_email: entity.client_email,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
