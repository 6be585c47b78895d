//! User and company entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::user::UserRole;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapping for the user_role PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRoleDb {
    Admin,
    Member,
}

impl From<UserRoleDb> for UserRole {
    fn from(db_role: UserRoleDb) -> Self {
        match db_role {
            UserRoleDb::Admin => UserRole::Admin,
            UserRoleDb::Member => UserRole::Member,
        }
    }
}

impl From<UserRole> for UserRoleDb {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => UserRoleDb::Admin,
            UserRole::Member => UserRoleDb::Member,
        }
    }
}

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub company_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub role: UserRoleDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            company_id: entity.company_id,
            email: entity.email,
            password_hash: Some(entity.password_hash),
            name: entity.name,
            phone_number: entity.phone_number,
            role: entity.role.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the companies table.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyEntity {
    pub id: Uuid,
    pub company_name: String,
    pub company_number: String,
    pub company_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyEntity> for domain::models::Company {
    fn from(entity: CompanyEntity) -> Self {
        Self {
            id: entity.id,
            company_name: entity.company_name,
            company_number: entity.company_number,
            company_email: entity.company_email,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
