//! Delivery result repository for database operations.

use domain::models::result::ResultDetailPayload;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ResultDetailEntity, ResultDetailWithClientEntity};
use crate::metrics::QueryTimer;

/// Repository for per-recipient delivery results and their join rows.
#[derive(Clone)]
pub struct ResultRepository {
    pool: PgPool,
}

impl ResultRepository {
    /// Creates a new ResultRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a result detail by its gateway message id.
    pub async fn find_detail_by_msgid(
        &self,
        msgid: &str,
    ) -> Result<Option<ResultDetailEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_result_detail_by_msgid");
        let result = sqlx::query_as::<_, ResultDetailEntity>(
            r#"
            SELECT id, msgid, phone, message, status, request_date, send_date, receive_date,
                   created_at, updated_at
            FROM result_details
            WHERE msgid = $1
            "#,
        )
        .bind(msgid)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a result detail together with its join row, atomically.
    pub async fn create_detail_with_client(
        &self,
        payload: &ResultDetailPayload,
        send_id: Uuid,
        client_id: Uuid,
    ) -> Result<ResultDetailEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_result_detail");

        let mut tx = self.pool.begin().await?;

        let detail = sqlx::query_as::<_, ResultDetailEntity>(
            r#"
            INSERT INTO result_details (msgid, phone, message, status, request_date, send_date, receive_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, msgid, phone, message, status, request_date, send_date, receive_date,
                      created_at, updated_at
            "#,
        )
        .bind(&payload.msgid)
        .bind(&payload.phone)
        .bind(payload.message.as_deref())
        .bind(payload.status.as_deref())
        .bind(payload.request_date.as_deref())
        .bind(payload.send_date.as_deref())
        .bind(payload.receive_date.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO result_clients (client_id, send_id, result_detail_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(client_id)
        .bind(send_id)
        .bind(detail.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(detail)
    }

    /// Result detail joined with its send/client context, by message id.
    pub async fn find_joined_by_msgid(
        &self,
        msgid: &str,
    ) -> Result<Option<ResultDetailWithClientEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_result_joined_by_msgid");
        let result = sqlx::query_as::<_, ResultDetailWithClientEntity>(
            r#"
            SELECT
                rd.id, rd.msgid, rd.phone, rd.message, rd.status, rd.request_date, rd.send_date,
                rd.receive_date, rd.created_at, rd.updated_at,
                rc.client_id, rc.send_id
            FROM result_details rd
            JOIN result_clients rc ON rc.result_detail_id = rd.id
            WHERE rd.msgid = $1
            "#,
        )
        .bind(msgid)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

}

#[cfg(test)]
mod tests {
    // ResultRepository tests require a database connection and are
    // covered by integration tests.
}
