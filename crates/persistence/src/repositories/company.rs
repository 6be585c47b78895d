//! Company repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::CompanyEntity;
use crate::metrics::QueryTimer;

/// Repository for company-related database operations.
#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// Creates a new CompanyRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a company by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CompanyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_company_by_id");
        let result = sqlx::query_as::<_, CompanyEntity>(
            r#"
            SELECT id, company_name, company_number, company_email, created_at, updated_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a company by its (unique) name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<CompanyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_company_by_name");
        let result = sqlx::query_as::<_, CompanyEntity>(
            r#"
            SELECT id, company_name, company_number, company_email, created_at, updated_at
            FROM companies
            WHERE company_name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a company record.
    pub async fn update_company(
        &self,
        id: Uuid,
        company_name: Option<&str>,
        company_number: Option<&str>,
        company_email: Option<&str>,
    ) -> Result<CompanyEntity, sqlx::Error> {
        let timer = QueryTimer::new("update_company");
        let result = sqlx::query_as::<_, CompanyEntity>(
            r#"
            UPDATE companies
            SET
                company_name = COALESCE($2, company_name),
                company_number = COALESCE($3, company_number),
                company_email = COALESCE($4, company_email),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, company_name, company_number, company_email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(company_name)
        .bind(company_number)
        .bind(company_email)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a company.
    pub async fn delete_company(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_company");
        let result = sqlx::query(
            r#"
            DELETE FROM companies
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
    // CompanyRepository tests require a database connection and are
    // covered by integration tests.
}
