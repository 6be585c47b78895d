//! Client repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ClientEntity;
use crate::metrics::QueryTimer;

/// Fields accepted when creating a client row.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub client_name: String,
    pub contact: String,
    pub client_email: Option<String>,
}

/// Repository for client-related database operations.
#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    /// Creates a new ClientRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a single client.
    pub async fn create_client(&self, client: &NewClient) -> Result<ClientEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_client");
        let result = sqlx::query_as::<_, ClientEntity>(
            r#"
            INSERT INTO clients (client_name, contact, client_email)
            VALUES ($1, $2, $3)
            RETURNING id, client_name, contact, client_email, created_at, updated_at
            "#,
        )
        .bind(&client.client_name)
        .bind(&client.contact)
        .bind(client.client_email.as_deref())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Register many clients atomically; all rows or none.
    pub async fn create_clients_bulk(
        &self,
        clients: &[NewClient],
    ) -> Result<Vec<ClientEntity>, sqlx::Error> {
        let timer = QueryTimer::new("create_clients_bulk");

        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(clients.len());

        for client in clients {
            let row = sqlx::query_as::<_, ClientEntity>(
                r#"
                INSERT INTO clients (client_name, contact, client_email)
                VALUES ($1, $2, $3)
                RETURNING id, client_name, contact, client_email, created_at, updated_at
                "#,
            )
            .bind(&client.client_name)
            .bind(&client.contact)
            .bind(client.client_email.as_deref())
            .fetch_one(&mut *tx)
            .await?;
            created.push(row);
        }

        tx.commit().await?;
        timer.record();
        Ok(created)
    }

    /// Find a client by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ClientEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_client_by_id");
        let result = sqlx::query_as::<_, ClientEntity>(
            r#"
            SELECT id, client_name, contact, client_email, created_at, updated_at
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all registered clients, newest first.
    pub async fn list_all(&self) -> Result<Vec<ClientEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_clients");
        let result = sqlx::query_as::<_, ClientEntity>(
            r#"
            SELECT id, client_name, contact, client_email, created_at, updated_at
            FROM clients
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List clients that received a send under the given group.
    pub async fn find_by_group(&self, group_id: Uuid) -> Result<Vec<ClientEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_clients_by_group");
        let result = sqlx::query_as::<_, ClientEntity>(
            r#"
            SELECT DISTINCT c.id, c.client_name, c.contact, c.client_email, c.created_at, c.updated_at
            FROM clients c
            JOIN sends s ON s.client_id = c.id
            WHERE s.group_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a client's name and contact.
    pub async fn update_client(
        &self,
        id: Uuid,
        client_name: &str,
        contact: &str,
    ) -> Result<ClientEntity, sqlx::Error> {
        let timer = QueryTimer::new("update_client");
        let result = sqlx::query_as::<_, ClientEntity>(
            r#"
            UPDATE clients
            SET client_name = $2, contact = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, client_name, contact, client_email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(client_name)
        .bind(contact)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a client. Contents referencing it are removed by cascade.
    pub async fn delete_client(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_client");
        let result = sqlx::query(
            r#"
            DELETE FROM clients
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
    // ClientRepository tests require a database connection and are
    // covered by integration tests.
}
