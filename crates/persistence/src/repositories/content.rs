//! Content repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ContentEntity;
use crate::metrics::QueryTimer;

/// Repository for validated message content.
#[derive(Clone)]
pub struct ContentRepository {
    pool: PgPool,
}

impl ContentRepository {
    /// Creates a new ContentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a validated content row.
    pub async fn create_content(
        &self,
        client_id: Uuid,
        template_id: Uuid,
        fields: &serde_json::Value,
    ) -> Result<ContentEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_content");
        let result = sqlx::query_as::<_, ContentEntity>(
            r#"
            INSERT INTO contents (client_id, template_id, fields)
            VALUES ($1, $2, $3)
            RETURNING id, client_id, template_id, fields, created_at, updated_at
            "#,
        )
        .bind(client_id)
        .bind(template_id)
        .bind(fields)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a content row by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_content_by_id");
        let result = sqlx::query_as::<_, ContentEntity>(
            r#"
            SELECT id, client_id, template_id, fields, created_at, updated_at
            FROM contents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // ContentRepository tests require a database connection and are
    // covered by integration tests.
}
