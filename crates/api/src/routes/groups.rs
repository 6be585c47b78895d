//! Dispatch group routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::group::{CreateGroupRequest, CreateGroupResponse, GroupListResponse};
use persistence::repositories::GroupRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::users::MessageResponse;

/// Create a new dispatch group.
///
/// POST /api/v1/groups
pub async fn create_group(
    State(state): State<AppState>,
    Json(request): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<CreateGroupResponse>), ApiError> {
    request.validate()?;

    let repo = GroupRepository::new(state.pool.clone());
    let group = repo.create_group(&request.group_name).await?;

    info!(group_id = %group.id, group_name = %group.group_name, "Group created");

    Ok((
        StatusCode::CREATED,
        Json(CreateGroupResponse {
            group_id: group.id,
            message: "Group created".to_string(),
        }),
    ))
}

/// List all dispatch groups.
///
/// GET /api/v1/groups
pub async fn list_groups(
    State(state): State<AppState>,
) -> Result<Json<GroupListResponse>, ApiError> {
    let repo = GroupRepository::new(state.pool.clone());
    let groups = repo.list_all().await?;

    Ok(Json(GroupListResponse {
        data: groups.into_iter().map(Into::into).collect(),
    }))
}

/// Delete a dispatch group.
///
/// DELETE /api/v1/groups/:group_id
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = GroupRepository::new(state.pool.clone());

    let deleted = repo.delete_group(group_id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Group not found".to_string()));
    }

    info!(group_id = %group_id, "Group deleted");

    Ok(Json(MessageResponse {
        message: "Deletion completed".to_string(),
    }))
}
