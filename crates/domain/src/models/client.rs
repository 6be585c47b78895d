//! Client (message recipient) domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An addressable message recipient registered by a tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub client_name: String,
    pub contact: String,
    pub client_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for registering a single client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 50, message = "Client name is required"))]
    pub client_name: String,

    #[validate(custom(function = "shared::validation::validate_contact"))]
    pub contact: String,

    #[validate(email(message = "Invalid client email address"))]
    pub client_email: Option<String>,
}

/// Request payload for bulk client registration.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateClientsRequest {
    #[validate(length(min = 1, message = "At least one client is required"), nested)]
    pub data: Vec<CreateClientRequest>,
}

/// Request payload for editing a client. Both fields are required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 50, message = "Client name is required"))]
    pub client_name: String,

    #[validate(custom(function = "shared::validation::validate_contact"))]
    pub contact: String,
}

/// Response payload for client registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientResponse {
    pub client_id: Uuid,
    pub message: String,
}

/// Response payload for bulk registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateClientsResponse {
    pub new_clients: Vec<Client>,
    pub message: String,
}

/// List wrapper returned by the client listing endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientListResponse {
    pub data: Vec<Client>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateClientRequest {
        CreateClientRequest {
            client_name: "Kim Dawoon".to_string(),
            contact: "010-9876-5432".to_string(),
            client_email: Some("dawoon@example.com".to_string()),
        }
    }

    #[test]
    fn test_create_client_request_validation() {
        assert!(valid_request().validate().is_ok());

        let mut bad_contact = valid_request();
        bad_contact.contact = "not-a-number".to_string();
        assert!(bad_contact.validate().is_err());

        let mut empty_name = valid_request();
        empty_name.client_name = String::new();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_bulk_request_rejects_empty_array() {
        let request = BulkCreateClientsRequest { data: vec![] };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bulk_request_validates_members() {
        let mut bad = valid_request();
        bad.contact = "123".to_string();
        let request = BulkCreateClientsRequest {
            data: vec![valid_request(), bad],
        };
        assert!(request.validate().is_err());
    }
}
