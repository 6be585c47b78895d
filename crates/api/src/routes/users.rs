//! User and company management routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::user::{
    CheckEmailRequest, RegisterUserRequest, RegisterUserResponse, UpdateUserRequest,
    UserDetailResponse,
};
use domain::models::UserRole;
use persistence::repositories::user::{NewCompany, NewUser};
use persistence::repositories::{CompanyRepository, UserRepository};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Simple acknowledgement body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

/// Register a new user, creating their company when it is not yet known.
///
/// POST /api/v1/users
///
/// An unseen company name creates company and admin user atomically; a
/// known one attaches the user as a member. Duplicate emails surface as
/// Conflict.
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<RegisterUserResponse>), ApiError> {
    request.validate()?;

    let user_repo = UserRepository::new(state.pool.clone());
    let company_repo = CompanyRepository::new(state.pool.clone());

    let password_hash = shared::password::hash_password(&request.password)?;

    let new_user = NewUser {
        email: &request.email,
        password_hash: &password_hash,
        name: &request.name,
        phone_number: request.phone_number.as_deref(),
    };

    let existing_company = company_repo.find_by_name(&request.company_name).await?;

    let (user, company_id) = match existing_company {
        Some(company) => {
            let user = user_repo.create_user(new_user, company.id).await?;
            (user, company.id)
        }
        None => {
            let company = NewCompany {
                company_name: &request.company_name,
                company_number: &request.company_number,
                company_email: &request.company_email,
            };
            let (user, company) = user_repo.create_user_with_company(new_user, company).await?;
            (user, company.id)
        }
    };

    info!(
        user_id = %user.id,
        company_id = %company_id,
        role = ?user.role,
        "User registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(RegisterUserResponse {
            user_id: user.id,
            company_id,
            message: "Registration completed".to_string(),
        }),
    ))
}

/// Probe whether an email is already registered.
///
/// POST /api/v1/users/check-email
pub async fn check_email(
    State(state): State<AppState>,
    Json(request): Json<CheckEmailRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate()?;

    let user_repo = UserRepository::new(state.pool.clone());

    if user_repo.find_by_email(&request.email).await?.is_some() {
        return Err(ApiError::Conflict(
            "A user with this email already exists".to_string(),
        ));
    }

    Ok(Json(MessageResponse {
        message: "Email is available".to_string(),
    }))
}

/// Fetch a user together with their company.
///
/// GET /api/v1/users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserDetailResponse>, ApiError> {
    let user_repo = UserRepository::new(state.pool.clone());
    let company_repo = CompanyRepository::new(state.pool.clone());

    let user = user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let company = company_repo
        .find_by_id(user.company_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Company not found".to_string()))?;

    Ok(Json(UserDetailResponse {
        user: user.into(),
        company: company.into(),
    }))
}

/// Update a user's profile; a company admin also updates the company.
///
/// PUT /api/v1/users/:user_id
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate()?;

    let user_repo = UserRepository::new(state.pool.clone());
    let company_repo = CompanyRepository::new(state.pool.clone());

    let user = user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let password_hash = shared::password::hash_password(&request.password)?;

    user_repo
        .update_user(
            user.id,
            &request.email,
            &password_hash,
            &request.name,
            request.phone_number.as_deref(),
        )
        .await?;

    let role: UserRole = user.role.into();
    if role == UserRole::Admin {
        company_repo
            .update_company(
                user.company_id,
                request.company_name.as_deref(),
                request.company_number.as_deref(),
                request.company_email.as_deref(),
            )
            .await?;
    }

    info!(user_id = %user.id, "User updated");

    Ok(Json(MessageResponse {
        message: "Update completed".to_string(),
    }))
}

/// Delete a user; a company admin deletes the company as well.
///
/// DELETE /api/v1/users/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_repo = UserRepository::new(state.pool.clone());
    let company_repo = CompanyRepository::new(state.pool.clone());

    let user = user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    user_repo.delete_user(user.id).await?;

    let role: UserRole = user.role.into();
    if role == UserRole::Admin {
        company_repo.delete_company(user.company_id).await?;
    }

    info!(user_id = %user.id, "User deleted");

    Ok(Json(MessageResponse {
        message: "Deletion completed".to_string(),
    }))
}
