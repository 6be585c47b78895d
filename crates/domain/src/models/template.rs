//! Message template domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reusable message skeleton registered with the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Uuid,
    /// Human lookup key, unique (e.g. `WELCOME01`).
    pub code: String,
    /// Message body with `#{variable}` placeholders.
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named placeholder a template declares. Content referencing the
/// template must supply a value for every declared variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    pub id: Uuid,
    pub template_id: Uuid,
    /// Key used to match content payload fields (case-sensitive).
    pub name_eng: String,
    /// Display label shown to operators.
    pub name_kor: String,
    /// Position of the placeholder within the template body.
    pub position: i32,
}

/// Template together with its declared variables, in declaration order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDetail {
    #[serde(flatten)]
    pub template: Template,
    pub variables: Vec<TemplateVariable>,
}

/// List wrapper for template details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateListResponse {
    pub data: Vec<TemplateDetail>,
}
