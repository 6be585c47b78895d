//! Content entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the contents table.
#[derive(Debug, Clone, FromRow)]
pub struct ContentEntity {
    pub id: Uuid,
    pub client_id: Uuid,
    pub template_id: Uuid,
    pub fields: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentEntity> for domain::models::Content {
    fn from(entity: ContentEntity) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            template_id: entity.template_id,
            fields: entity.fields,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
