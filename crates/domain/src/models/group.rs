//! Dispatch group domain models.
//!
//! A group is a named label for a batch of sends; its name becomes the
//! subject line of the dispatched messages. It is not a delivery unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A named dispatch label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub group_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a group.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[validate(length(min = 1, max = 100, message = "Group name is required"))]
    pub group_name: String,
}

/// Response payload for group creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupResponse {
    pub group_id: Uuid,
    pub message: String,
}

/// List wrapper for groups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupListResponse {
    pub data: Vec<Group>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_group_request_validation() {
        let request = CreateGroupRequest {
            group_name: "March delivery notices".to_string(),
        };
        assert!(request.validate().is_ok());

        let empty = CreateGroupRequest {
            group_name: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
