//! Template entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the templates table.
#[derive(Debug, Clone, FromRow)]
pub struct TemplateEntity {
    pub id: Uuid,
    pub code: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TemplateEntity> for domain::models::Template {
    fn from(entity: TemplateEntity) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the template_variables table.
#[derive(Debug, Clone, FromRow)]
pub struct TemplateVariableEntity {
    pub id: Uuid,
    pub template_id: Uuid,
    pub name_eng: String,
    pub name_kor: String,
    pub position: i32,
}

impl From<TemplateVariableEntity> for domain::models::TemplateVariable {
    fn from(entity: TemplateVariableEntity) -> Self {
        Self {
            id: entity.id,
            template_id: entity.template_id,
            name_eng: entity.name_eng,
            name_kor: entity.name_kor,
            position: entity.position,
        }
    }
}
