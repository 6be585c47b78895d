//! Delivery result domain models.
//!
//! Results arrive asynchronously from the gateway in two shapes:
//! batch-level rows keyed by `mid` that update existing Send records, and
//! per-recipient rows keyed by `msgid` that become ResultDetail records
//! joined back to a Send. Date fields are kept in the gateway's
//! `YYYY-MM-DD HH:MM:SS` string form, as delivered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Per-recipient delivery outcome, at most one per gateway `msgid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDetail {
    pub id: Uuid,
    /// Gateway-assigned identifier for this recipient's message.
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

/// Join row associating a ResultDetail with its Send and client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultClient {
    pub id: Uuid,
    pub client_id: Uuid,
    pub send_id: Uuid,
    pub result_detail_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// ResultDetail together with its join context, as returned by the
/// reconciliation endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDetailWithClient {
    #[serde(flatten)]
    pub detail: ResultDetail,
    pub client_id: Uuid,
    pub send_id: Uuid,
}

/// Batch-level result callback row, keyed by `mid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResultPayload {
    pub mid: String,
    pub msg_count: i32,
    pub msg_content: String,
    pub send_state: String,
    pub send_date: String,
}

/// Per-recipient result callback row, keyed by `msgid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDetailPayload {
    pub msgid: String,
    pub phone: String,
    pub message: Option<String>,
    pub status: Option<String>,
    pub request_date: Option<String>,
    pub send_date: Option<String>,
    pub receive_date: Option<String>,
}

/// Request body for the batch-level reconciliation endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileSendsRequest {
    #[validate(length(min = 1, message = "At least one result is required"))]
    pub results: Vec<SendResultPayload>,
}

/// Request body for the per-recipient reconciliation endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileDetailsRequest {
    #[validate(length(min = 1, message = "At least one result is required"))]
    pub results: Vec<ResultDetailPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_result_payload_wire_names() {
        let json = serde_json::json!({
            "mid": "M20240101",
            "msgCount": 2,
            "msgContent": "order shipped",
            "sendState": "completed",
            "sendDate": "2024-01-01 10:00:00"
        });
        let payload: SendResultPayload = serde_json::from_value(json).unwrap();
        assert_eq!(payload.mid, "M20240101");
        assert_eq!(payload.msg_count, 2);
    }

    #[test]
    fn test_reconcile_requests_reject_empty_results() {
        let sends = ReconcileSendsRequest { results: vec![] };
        assert!(sends.validate().is_err());
        let details = ReconcileDetailsRequest { results: vec![] };
        assert!(details.validate().is_err());
    }
}
