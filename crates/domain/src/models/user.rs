//! User and company (tenant) domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Role of an operator within their company.
///
/// `Admin` is the account that registered the company; company-wide
/// updates and deletion ride along with that user's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Member,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Member => "member",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "member" => Ok(UserRole::Member),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operator account belonging to a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub company_id: Uuid,
    pub email: String,
    #[serde(skip_serializing)] // Never serialize the hash to API responses
    pub password_hash: Option<String>,
    pub name: String,
    pub phone_number: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tenant organization on whose behalf messages are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub company_name: String,
    pub company_number: String,
    pub company_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration request. When `company_name` is unknown a new company is
/// created together with the user in one transaction.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_contact"))]
    pub phone_number: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Company name is required"))]
    pub company_name: String,

    #[validate(custom(function = "shared::validation::validate_registration_number"))]
    pub company_number: String,

    #[validate(email(message = "Invalid company email address"))]
    pub company_email: String,
}

/// Duplicate-email probe request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckEmailRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Profile update request. A company admin also updates the company rows.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_contact"))]
    pub phone_number: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub company_name: Option<String>,

    pub company_number: Option<String>,

    #[validate(email(message = "Invalid company email address"))]
    pub company_email: Option<String>,
}

/// User detail paired with the owning company.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailResponse {
    pub user: User,
    pub company: Company,
}

/// Registration response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_roundtrip() {
        assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::from_str("MEMBER").unwrap(), UserRole::Member);
        assert!(UserRole::from_str("owner").is_err());
        assert_eq!(format!("{}", UserRole::Admin), "admin");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            email: "op@example.com".to_string(),
            password_hash: Some("$argon2id$secret".to_string()),
            name: "Operator".to_string(),
            phone_number: None,
            role: UserRole::Member,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("passwordHash"));
    }

    #[test]
    fn test_register_request_validation() {
        let request = RegisterUserRequest {
            email: "op@example.com".to_string(),
            password: "long-enough-pass".to_string(),
            name: "Operator".to_string(),
            phone_number: Some("010-1234-5678".to_string()),
            company_name: "Hanbit Trading".to_string(),
            company_number: "123-45-67890".to_string(),
            company_email: "contact@hanbit.example".to_string(),
        };
        assert!(request.validate().is_ok());

        let bad_email = RegisterUserRequest {
            email: "not-an-email".to_string(),
            ..request.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterUserRequest {
            password: "short".to_string(),
            ..request
        };
        assert!(short_password.validate().is_err());
    }
}
