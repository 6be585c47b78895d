//! Template repository for database operations.
//!
//! Templates and their declared variables are reference data seeded by
//! migration; only lookups live here.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{TemplateEntity, TemplateVariableEntity};
use crate::metrics::QueryTimer;

/// Repository for template lookups.
#[derive(Clone)]
pub struct TemplateRepository {
    pool: PgPool,
}

impl TemplateRepository {
    /// Creates a new TemplateRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a template by its unique code.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<TemplateEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_template_by_code");
        let result = sqlx::query_as::<_, TemplateEntity>(
            r#"
            SELECT id, code, content, created_at, updated_at
            FROM templates
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a template by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TemplateEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_template_by_id");
        let result = sqlx::query_as::<_, TemplateEntity>(
            r#"
            SELECT id, code, content, created_at, updated_at
            FROM templates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all templates in code order.
    pub async fn list_all(&self) -> Result<Vec<TemplateEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_templates");
        let result = sqlx::query_as::<_, TemplateEntity>(
            r#"
            SELECT id, code, content, created_at, updated_at
            FROM templates
            ORDER BY code ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Variables declared by a template, in declaration order.
    pub async fn variables_for_template(
        &self,
        template_id: Uuid,
    ) -> Result<Vec<TemplateVariableEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_template_variables");
        let result = sqlx::query_as::<_, TemplateVariableEntity>(
            r#"
            SELECT id, template_id, name_eng, name_kor, position
            FROM template_variables
            WHERE template_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(template_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Declared variable names only, in declaration order.
    pub async fn variable_names(&self, template_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
        let timer = QueryTimer::new("find_template_variable_names");
        let result = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name_eng
            FROM template_variables
            WHERE template_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(template_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // TemplateRepository tests require a database connection and are
    // covered by integration tests.
}
