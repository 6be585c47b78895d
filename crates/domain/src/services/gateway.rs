//! AlimTalk gateway seam.
//!
//! Abstracts the outbound send API so the dispatch pipeline can be
//! exercised against a mock in tests. The wire shapes mirror the Aligo
//! API: one parameter object per recipient in the request, and a single
//! synchronous response carrying a batch id and sent/failed counts.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;

/// Gateway response code signalling success.
pub const GATEWAY_SUCCESS_CODE: i32 = 0;

/// One recipient's parameter set within a dispatch request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkSendRequest {
    /// Template code registered with the gateway.
    #[serde(rename = "tpl_code")]
    pub template_code: String,
    /// Recipient phone number.
    pub receiver: String,
    /// Recipient display name.
    pub recvname: String,
    /// Subject line (the dispatch group's name).
    pub subject: String,
    /// Template body dispatched as the message text.
    pub message: String,
    /// Substituted content fields for template variables.
    #[serde(rename = "talk_send_data")]
    pub talk_send_data: Value,
}

/// Synchronous gateway response for one batch dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub code: i32,
    pub message: String,
    pub info: GatewayInfo,
}

/// Batch bookkeeping inside the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayInfo {
    /// Gateway-assigned batch identifier.
    pub mid: String,
    /// Accepted message count.
    pub scnt: i32,
    /// Rejected message count.
    pub fcnt: i32,
}

impl GatewayResponse {
    pub fn is_success(&self) -> bool {
        self.code == GATEWAY_SUCCESS_CODE
    }
}

/// Error surfaced by a gateway implementation.
///
/// No retry or backoff is applied anywhere; failures propagate to the
/// caller unmodified.
#[derive(Debug, thiserror::Error)]
pub enum TalkGatewayError {
    #[error("Gateway request failed: {0}")]
    Transport(String),

    #[error("Gateway rejected the dispatch: code {code}, {message}")]
    Rejected { code: i32, message: String },

    #[error("Gateway response could not be decoded: {0}")]
    Decode(String),

    #[error("Gateway is not enabled")]
    NotEnabled,
}

/// Outbound send API.
#[async_trait::async_trait]
pub trait TalkGateway: Send + Sync {
    /// Dispatches the full parameter list as a single gateway call.
    async fn send_alimtalk(
        &self,
        requests: &[TalkSendRequest],
    ) -> Result<GatewayResponse, TalkGatewayError>;
}

/// Mock gateway for development and testing.
///
/// Records every dispatched parameter list and answers with a canned
/// response.
pub struct MockTalkGateway {
    /// Response returned for each call.
    response: GatewayResponse,
    /// Whether to fail each call instead.
    simulate_failure: bool,
    /// Parameter lists received, one entry per call.
    dispatched: Mutex<Vec<Vec<TalkSendRequest>>>,
}

impl MockTalkGateway {
    pub fn new() -> Self {
        Self::with_mid("mock-mid-1")
    }

    /// Mock answering successfully with the given batch id.
    pub fn with_mid(mid: &str) -> Self {
        Self {
            response: GatewayResponse {
                code: GATEWAY_SUCCESS_CODE,
                message: "success".to_string(),
                info: GatewayInfo {
                    mid: mid.to_string(),
                    scnt: 0,
                    fcnt: 0,
                },
            },
            simulate_failure: false,
            dispatched: Mutex::new(Vec::new()),
        }
    }

    /// Mock that fails every dispatch.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::new()
        }
    }

    /// Parameter lists received so far.
    pub fn dispatched(&self) -> Vec<Vec<TalkSendRequest>> {
        self.dispatched.lock().unwrap().clone()
    }
}

impl Default for MockTalkGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TalkGateway for MockTalkGateway {
    async fn send_alimtalk(
        &self,
        requests: &[TalkSendRequest],
    ) -> Result<GatewayResponse, TalkGatewayError> {
        if self.simulate_failure {
            tracing::warn!(
                batch_size = requests.len(),
                "Mock gateway simulating dispatch failure"
            );
            return Err(TalkGatewayError::Transport("Simulated failure".to_string()));
        }

        tracing::info!(
            batch_size = requests.len(),
            mid = %self.response.info.mid,
            "Mock: would dispatch AlimTalk batch"
        );

        self.dispatched.lock().unwrap().push(requests.to_vec());

        let mut response = self.response.clone();
        response.info.scnt = requests.len() as i32;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> TalkSendRequest {
        TalkSendRequest {
            template_code: "WELCOME01".to_string(),
            receiver: "010-1234-5678".to_string(),
            recvname: "Kim Dawoon".to_string(),
            subject: "March notices".to_string(),
            message: "Hello #{name}".to_string(),
            talk_send_data: json!({"name": "Kim Dawoon"}),
        }
    }

    #[tokio::test]
    async fn test_mock_records_dispatches_and_counts() {
        let gateway = MockTalkGateway::with_mid("M123");
        let batch = vec![request(), request()];

        let response = gateway.send_alimtalk(&batch).await.unwrap();
        assert!(response.is_success());
        assert_eq!(response.info.mid, "M123");
        assert_eq!(response.info.scnt, 2);

        let dispatched = gateway.dispatched();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].len(), 2);
    }

    #[tokio::test]
    async fn test_failing_mock_surfaces_transport_error() {
        let gateway = MockTalkGateway::failing();
        let result = gateway.send_alimtalk(&[request()]).await;
        assert!(matches!(result, Err(TalkGatewayError::Transport(_))));
    }

    #[test]
    fn test_request_serializes_with_gateway_field_names() {
        let json = serde_json::to_value(request()).unwrap();
        assert!(json.get("tpl_code").is_some());
        assert!(json.get("talk_send_data").is_some());
        assert!(json.get("recvname").is_some());
    }

    #[test]
    fn test_response_success_check() {
        let response = GatewayResponse {
            code: GATEWAY_SUCCESS_CODE,
            message: "success".to_string(),
            info: GatewayInfo {
                mid: "M1".to_string(),
                scnt: 1,
                fcnt: 0,
            },
        };
        assert!(response.is_success());

        let failed = GatewayResponse {
            code: -99,
            ..response
        };
        assert!(!failed.is_success());
    }
}
