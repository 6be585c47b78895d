//! Dispatch (send) domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Record of one gateway dispatch for one
/// (content, client, template, group) tuple.
///
/// The synchronous gateway response (`code`, `message`, `mid`, counts) is
/// captured at creation; the `msg_*`/`send_*` fields arrive later through
/// result reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Send {
    pub id: Uuid,
    pub content_id: Uuid,
    pub client_id: Uuid,
    pub template_id: Uuid,
    pub group_id: Uuid,
    pub code: i32,
    pub message: String,
    /// Gateway-assigned identifier for the dispatched batch.
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

/// One tuple of a dispatch batch: references to already-stored entities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchItem {
    pub content_id: Uuid,
    pub client_id: Uuid,
    pub template_id: Uuid,
    pub group_id: Uuid,
}

/// Request payload for dispatching a batch.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendAlimtalkRequest {
    #[validate(length(min = 1, message = "At least one dispatch tuple is required"))]
    pub data: Vec<DispatchItem>,
}

/// Response payload for a dispatch: the shared gateway response plus the
/// Send rows persisted for each tuple, in input order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAlimtalkResponse {
    pub message: String,
    pub aligo_result: crate::services::gateway::GatewayResponse,
    pub sends: Vec<Send>,
}

/// Send reference used to correlate asynchronous result callbacks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendContext {
    pub send_id: Uuid,
    pub client_id: Uuid,
    pub template_id: Uuid,
    pub mid: String,
}
