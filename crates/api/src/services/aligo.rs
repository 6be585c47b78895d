//! Aligo AlimTalk gateway client.
//!
//! Implements the TalkGateway trait against the Aligo HTTP API. One batch
//! dispatch is a single form-encoded POST carrying account credentials,
//! the template code and numbered per-recipient fields. The synchronous
//! response carries a result code, a batch id and accepted/rejected
//! counts.
//!
//! Failures are surfaced unmodified; no retry or backoff is applied.

use std::time::Duration;

use domain::services::{
    GatewayInfo, GatewayResponse, MockTalkGateway, TalkGateway, TalkGatewayError, TalkSendRequest,
    GATEWAY_SUCCESS_CODE,
};
use reqwest::Client;
use serde::Deserialize;

use crate::config::AligoConfig;

/// Send endpoint path on the Aligo API host.
const SEND_PATH: &str = "/akv10/alimtalk/send/";

/// Aligo gateway client.
pub struct AligoTalkGateway {
    client: Client,
    config: AligoConfig,
}

/// Raw wire response. `info` is absent when the gateway rejects the
/// dispatch outright.
#[derive(Debug, Deserialize)]
struct WireResponse {
    code: i32,
    message: String,
    info: Option<WireInfo>,
}

#[derive(Debug, Deserialize)]
struct WireInfo {
    mid: String,
    scnt: i32,
    fcnt: i32,
}

impl AligoTalkGateway {
    /// Create a new Aligo gateway client.
    ///
    /// # Errors
    /// Returns an error if the gateway is disabled or the HTTP client
    /// cannot be constructed.
    pub fn new(config: AligoConfig) -> Result<Self, TalkGatewayError> {
        if !config.enabled {
            return Err(TalkGatewayError::NotEnabled);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| TalkGatewayError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the form parameters for one batch dispatch.
    ///
    /// The Aligo API takes one `tpl_code` per call plus numbered
    /// per-recipient fields (`receiver_1`, `subject_1`, ...). Template
    /// variables are substituted into each recipient's message body from
    /// the stored content fields.
    fn build_form(&self, requests: &[TalkSendRequest]) -> Vec<(String, String)> {
        let mut form = vec![
            ("apikey".to_string(), self.config.api_key.clone()),
            ("userid".to_string(), self.config.user_id.clone()),
            ("senderkey".to_string(), self.config.sender_key.clone()),
            ("sender".to_string(), self.config.sender.clone()),
        ];

        if let Some(first) = requests.first() {
            form.push(("tpl_code".to_string(), first.template_code.clone()));
        }

        for (idx, request) in requests.iter().enumerate() {
            let n = idx + 1;
            form.push((format!("receiver_{}", n), request.receiver.clone()));
            form.push((format!("recvname_{}", n), request.recvname.clone()));
            form.push((format!("subject_{}", n), request.subject.clone()));
            form.push((
                format!("message_{}", n),
                render_message(&request.message, &request.talk_send_data),
            ));
        }

        form
    }
}

/// Substitute `#{variable}` placeholders from the content fields.
///
/// Unknown placeholders are left as-is; the template was validated
/// against its declared variables when the content was stored.
fn render_message(template: &str, fields: &serde_json::Value) -> String {
    let Some(map) = fields.as_object() else {
        return template.to_string();
    };

    let mut message = template.to_string();
    for (name, value) in map {
        let placeholder = format!("#{{{}}}", name);
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        message = message.replace(&placeholder, &text);
    }
    message
}

#[async_trait::async_trait]
impl TalkGateway for AligoTalkGateway {
    async fn send_alimtalk(
        &self,
        requests: &[TalkSendRequest],
    ) -> Result<GatewayResponse, TalkGatewayError> {
        let url = format!("{}{}", self.config.base_url, SEND_PATH);
        let form = self.build_form(requests);

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| TalkGatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TalkGatewayError::Transport(format!(
                "Gateway returned HTTP {}: {}",
                status, body
            )));
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| TalkGatewayError::Decode(e.to_string()))?;

        if wire.code != GATEWAY_SUCCESS_CODE {
            return Err(TalkGatewayError::Rejected {
                code: wire.code,
                message: wire.message,
            });
        }

        let info = wire.info.ok_or_else(|| {
            TalkGatewayError::Decode("Success response carried no batch info".to_string())
        })?;

        tracing::info!(
            batch_size = requests.len(),
            mid = %info.mid,
            scnt = info.scnt,
            fcnt = info.fcnt,
            "AlimTalk batch dispatched"
        );

        Ok(GatewayResponse {
            code: wire.code,
            message: wire.message,
            info: GatewayInfo {
                mid: info.mid,
                scnt: info.scnt,
                fcnt: info.fcnt,
            },
        })
    }
}

/// Wire up the configured gateway implementation.
///
/// A disabled gateway resolves to the logging mock so development and
/// test environments never reach the network.
pub fn build_gateway(config: &AligoConfig) -> anyhow::Result<Box<dyn TalkGateway>> {
    if config.enabled {
        let gateway = AligoTalkGateway::new(config.clone())?;
        Ok(Box::new(gateway))
    } else {
        tracing::warn!("Aligo gateway disabled; dispatches will be mocked");
        Ok(Box::new(MockTalkGateway::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enabled_config() -> AligoConfig {
        AligoConfig {
            enabled: true,
            base_url: "https://kakaoapi.aligo.in".to_string(),
            api_key: "key".to_string(),
            user_id: "account".to_string(),
            sender_key: "sender-key".to_string(),
            sender: "025551234".to_string(),
            timeout_ms: 10000,
        }
    }

    fn request(receiver: &str) -> TalkSendRequest {
        TalkSendRequest {
            template_code: "WELCOME01".to_string(),
            receiver: receiver.to_string(),
            recvname: "Kim Dawoon".to_string(),
            subject: "Welcome batch".to_string(),
            message: "#{name}님, 가입을 환영합니다. (#{date})".to_string(),
            talk_send_data: json!({"name": "Kim Dawoon", "date": "2024-01-01"}),
        }
    }

    #[test]
    fn test_disabled_gateway_is_rejected() {
        let config = AligoConfig {
            enabled: false,
            ..enabled_config()
        };
        let result = AligoTalkGateway::new(config);
        assert!(matches!(result, Err(TalkGatewayError::NotEnabled)));
    }

    #[test]
    fn test_build_form_numbers_recipients() {
        let gateway = AligoTalkGateway::new(enabled_config()).unwrap();
        let form = gateway.build_form(&[request("01011112222"), request("01033334444")]);

        let lookup = |key: &str| {
            form.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(lookup("apikey"), Some("key"));
        assert_eq!(lookup("tpl_code"), Some("WELCOME01"));
        assert_eq!(lookup("receiver_1"), Some("01011112222"));
        assert_eq!(lookup("receiver_2"), Some("01033334444"));
        assert_eq!(lookup("subject_2"), Some("Welcome batch"));
        assert!(lookup("receiver_3").is_none());
    }

    #[test]
    fn test_render_message_substitutes_declared_variables() {
        let rendered = render_message(
            "#{name}님, 가입을 환영합니다. (#{date})",
            &json!({"name": "Kim Dawoon", "date": "2024-01-01"}),
        );
        assert_eq!(rendered, "Kim Dawoon님, 가입을 환영합니다. (2024-01-01)");
    }

    #[test]
    fn test_render_message_leaves_unknown_placeholders() {
        let rendered = render_message("Hello #{name}", &json!({"other": "x"}));
        assert_eq!(rendered, "Hello #{name}");
    }

    #[test]
    fn test_render_message_formats_non_string_values() {
        let rendered = render_message("Paid: #{paymentPrice} won", &json!({"paymentPrice": 35000}));
        assert_eq!(rendered, "Paid: 35000 won");
    }

    #[test]
    fn test_wire_response_decodes_without_info() {
        let wire: WireResponse =
            serde_json::from_str(r#"{"code": -99, "message": "invalid api key"}"#).unwrap();
        assert_eq!(wire.code, -99);
        assert!(wire.info.is_none());
    }
}
