//! Group repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::GroupEntity;
use crate::metrics::QueryTimer;

/// Repository for dispatch-group database operations.
#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    /// Creates a new GroupRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new group.
    pub async fn create_group(&self, group_name: &str) -> Result<GroupEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_group");
        let result = sqlx::query_as::<_, GroupEntity>(
            r#"
            INSERT INTO groups (group_name)
            VALUES ($1)
            RETURNING id, group_name, created_at, updated_at
            "#,
        )
        .bind(group_name)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a group by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<GroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_group_by_id");
        let result = sqlx::query_as::<_, GroupEntity>(
            r#"
            SELECT id, group_name, created_at, updated_at
            FROM groups
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all groups, newest first.
    pub async fn list_all(&self) -> Result<Vec<GroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_groups");
        let result = sqlx::query_as::<_, GroupEntity>(
            r#"
            SELECT id, group_name, created_at, updated_at
            FROM groups
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a group.
    pub async fn delete_group(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_group");
        let result = sqlx::query(
            r#"
            DELETE FROM groups
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // GroupRepository tests require a database connection and are covered
    // by integration tests.
}
