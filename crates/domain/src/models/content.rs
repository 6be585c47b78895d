//! Message content domain models.
//!
//! Content is one instantiation of a template for one client: the
//! substituted field values plus references to both. The field set is
//! open-ended (each template declares its own variables), so values are
//! carried as a flat JSON object and validated against the template's
//! declared variables before persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

/// Validated, persisted message content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: Uuid,
    pub client_id: Uuid,
    pub template_id: Uuid,
    /// Substituted values keyed by the template's variable names.
    pub fields: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for validating and storing content.
///
/// The variable values arrive as sibling keys of `clientId` and
/// `templateCode` on the wire; `#[serde(flatten)]` collects them.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveContentRequest {
    pub client_id: Uuid,

    #[validate(custom(function = "shared::validation::validate_template_code"))]
    pub template_code: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Response payload after content is stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveContentResponse {
    pub content_id: Uuid,
    pub client_id: Uuid,
    pub template_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_content_request_flattens_variable_fields() {
        let json = serde_json::json!({
            "clientId": "7b7f9a6e-0a54-4f3b-9f5c-1b6ad43a1a01",
            "templateCode": "WELCOME01",
            "name": "Kim Dawoon",
            "date": "2024-01-01"
        });
        let request: SaveContentRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.template_code, "WELCOME01");
        assert_eq!(request.fields.len(), 2);
        assert_eq!(request.fields["name"], "Kim Dawoon");
    }

    #[test]
    fn test_save_content_request_rejects_lowercase_code() {
        let request = SaveContentRequest {
            client_id: Uuid::new_v4(),
            template_code: "welcome01".to_string(),
            fields: Map::new(),
        };
        assert!(request.validate().is_err());
    }
}
