//! Send entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the sends table.
#[derive(Debug, Clone, FromRow)]
pub struct SendEntity {
    pub id: Uuid,
    pub content_id: Uuid,
    pub client_id: Uuid,
    pub template_id: Uuid,
    pub group_id: Uuid,
    pub code: i32,
    pub message: String,
    pub mid: String,
    pub success_count: i32,
    pub fail_count: i32,
    pub msg_count: Option<i32>,
    pub msg_content: Option<String>,
    pub send_state: Option<String>,
    pub send_date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SendEntity> for domain::models::Send {
    fn from(entity: SendEntity) -> Self {
        Self {
            id: entity.id,
            content_id: entity.content_id,
            client_id: entity.client_id,
            template_id: entity.template_id,
            group_id: entity.group_id,
            code: entity.code,
            message: entity.message,
            mid: entity.mid,
            success_count: entity.success_count,
            fail_count: entity.fail_count,
            msg_count: entity.msg_count,
            msg_content: entity.msg_content,
            send_state: entity.send_state,
            send_date: entity.send_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
