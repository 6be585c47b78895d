//! User repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{CompanyEntity, UserEntity};
use crate::metrics::QueryTimer;

/// Fields accepted when creating a user row.
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub name: &'a str,
    pub phone_number: Option<&'a str>,
}

/// Fields accepted when creating a company row.
pub struct NewCompany<'a> {
    pub company_name: &'a str,
    pub company_number: &'a str,
    pub company_email: &'a str,
}

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a company and its admin user atomically.
    ///
    /// An interrupted registration must leave neither row behind, so both
    /// inserts run in one transaction.
    pub async fn create_user_with_company(
        &self,
        user: NewUser<'_>,
        company: NewCompany<'_>,
    ) -> Result<(UserEntity, CompanyEntity), sqlx::Error> {
        let timer = QueryTimer::new("create_user_with_company");

        let mut tx = self.pool.begin().await?;

        let new_company = sqlx::query_as::<_, CompanyEntity>(
            r#"
            INSERT INTO companies (company_name, company_number, company_email)
            VALUES ($1, $2, $3)
            RETURNING id, company_name, company_number, company_email, created_at, updated_at
            "#,
        )
        .bind(company.company_name)
        .bind(company.company_number)
        .bind(company.company_email)
        .fetch_one(&mut *tx)
        .await?;

        let new_user = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (company_id, email, password_hash, name, phone_number, role)
            VALUES ($1, $2, $3, $4, $5, 'admin')
            RETURNING id, company_id, email, password_hash, name, phone_number, role, created_at, updated_at
            "#,
        )
        .bind(new_company.id)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.name)
        .bind(user.phone_number)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok((new_user, new_company))
    }

    /// Create a member user attached to an existing company.
    pub async fn create_user(
        &self,
        user: NewUser<'_>,
        company_id: Uuid,
    ) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (company_id, email, password_hash, name, phone_number, role)
            VALUES ($1, $2, $3, $4, $5, 'member')
            RETURNING id, company_id, email, password_hash, name, phone_number, role, created_at, updated_at
            "#,
        )
        .bind(company_id)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.name)
        .bind(user.phone_number)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_id");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, company_id, email, password_hash, name, phone_number, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_email");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, company_id, email, password_hash, name, phone_number, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a user's profile fields.
    pub async fn update_user(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
        name: &str,
        phone_number: Option<&str>,
    ) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("update_user");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            UPDATE users
            SET email = $2, password_hash = $3, name = $4, phone_number = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, company_id, email, password_hash, name, phone_number, role, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(phone_number)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a user.
    pub async fn delete_user(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_user");
        let result = sqlx::query(
            r#"
            DELETE FROM users
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
    // UserRepository tests require a database connection and are covered
    // by integration tests.
}
