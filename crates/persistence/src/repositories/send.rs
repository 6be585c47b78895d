//! Send repository for database operations.

use domain::models::send::DispatchItem;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::SendEntity;
use crate::metrics::QueryTimer;

/// Synchronous gateway response fields captured on a new Send row.
#[derive(Debug, Clone)]
pub struct NewSendResponse<'a> {
    pub code: i32,
    pub message: &'a str,
    pub mid: &'a str,
    pub success_count: i32,
    pub fail_count: i32,
}

/// Repository for dispatch (send) records.
#[derive(Clone)]
pub struct SendRepository {
    pool: PgPool,
}

impl SendRepository {
    /// Creates a new SendRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist one Send row pairing a dispatch tuple with the shared
    /// gateway response.
    pub async fn create_send(
        &self,
        item: &DispatchItem,
        response: &NewSendResponse<'_>,
    ) -> Result<SendEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_send");
        let result = sqlx::query_as::<_, SendEntity>(
            r#"
            INSERT INTO sends (content_id, client_id, template_id, group_id, code, message, mid, success_count, fail_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, content_id, client_id, template_id, group_id, code, message, mid,
                      success_count, fail_count, msg_count, msg_content, send_state, send_date,
                      created_at, updated_at
            "#,
        )
        .bind(item.content_id)
        .bind(item.client_id)
        .bind(item.template_id)
        .bind(item.group_id)
        .bind(response.code)
        .bind(response.message)
        .bind(response.mid)
        .bind(response.success_count)
        .bind(response.fail_count)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a send by its gateway batch id.
    pub async fn find_by_mid(&self, mid: &str) -> Result<Option<SendEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_send_by_mid");
        let result = sqlx::query_as::<_, SendEntity>(
            r#"
            SELECT id, content_id, client_id, template_id, group_id, code, message, mid,
                   success_count, fail_count, msg_count, msg_content, send_state, send_date,
                   created_at, updated_at
            FROM sends
            WHERE mid = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(mid)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Most recent send for a group, for callback correlation.
    pub async fn find_latest_by_group(
        &self,
        group_id: Uuid,
    ) -> Result<Option<SendEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_send_by_group");
        let result = sqlx::query_as::<_, SendEntity>(
            r#"
            SELECT id, content_id, client_id, template_id, group_id, code, message, mid,
                   success_count, fail_count, msg_count, msg_content, send_state, send_date,
                   created_at, updated_at
            FROM sends
            WHERE group_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(group_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Apply batch-level result fields to every send dispatched under `mid`.
    pub async fn update_send_result(
        &self,
        mid: &str,
        msg_count: i32,
        msg_content: &str,
        send_state: &str,
        send_date: &str,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("update_send_result");
        let result = sqlx::query(
            r#"
            UPDATE sends
            SET msg_count = $2, msg_content = $3, send_state = $4, send_date = $5, updated_at = NOW()
            WHERE mid = $1
            "#,
        )
        .bind(mid)
        .bind(msg_count)
        .bind(msg_content)
        .bind(send_state)
        .bind(send_date)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

}

#[cfg(test)]
mod tests {
    // SendRepository tests require a database connection and are covered
    // by integration tests.
}
