//! Delivery result entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the result_details table.
#[derive(Debug, Clone, FromRow)]
pub struct ResultDetailEntity {
    pub id: Uuid,
    pub msgid: String,
    pub phone: String,
    pub message: Option<String>,
    pub status: Option<String>,
    pub request_date: Option<String>,
    pub send_date: Option<String>,
    pub receive_date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResultDetailEntity> for domain::models::ResultDetail {
    fn from(entity: ResultDetailEntity) -> Self {
        Self {
            id: entity.id,
            msgid: entity.msgid,
            phone: entity.phone,
            message: entity.message,
            status: entity.status,
            request_date: entity.request_date,
            send_date: entity.send_date,
            receive_date: entity.receive_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the result_clients join table.
#[derive(Debug, Clone, FromRow)]
pub struct ResultClientEntity {
    pub id: Uuid,
    pub client_id: Uuid,
    pub send_id: Uuid,
    pub result_detail_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<ResultClientEntity> for domain::models::ResultClient {
    fn from(entity: ResultClientEntity) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            send_id: entity.send_id,
            result_detail_id: entity.result_detail_id,
            created_at: entity.created_at,
        }
    }
}

/// Result detail joined with its send/client context.
#[derive(Debug, Clone, FromRow)]
pub struct ResultDetailWithClientEntity {
    pub id: Uuid,
    pub msgid: String,
    pub phone: String,
    pub message: Option<String>,
    pub status: Option<String>,
    pub request_date: Option<String>,
    pub send_date: Option<String>,
    pub receive_date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Join fields
    pub client_id: Uuid,
    pub send_id: Uuid,
}

impl From<ResultDetailWithClientEntity> for domain::models::result::ResultDetailWithClient {
    fn from(entity: ResultDetailWithClientEntity) -> Self {
        Self {
            detail: domain::models::ResultDetail {
                id: entity.id,
                msgid: entity.msgid,
                phone: entity.phone,
                message: entity.message,
                status: entity.status,
                request_date: entity.request_date,
                send_date: entity.send_date,
                receive_date: entity.receive_date,
                created_at: entity.created_at,
                updated_at: entity.updated_at,
            },
            client_id: entity.client_id,
            send_id: entity.send_id,
        }
    }
}
