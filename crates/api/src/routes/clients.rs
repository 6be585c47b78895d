//! Client management routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::client::{
    BulkCreateClientsRequest, BulkCreateClientsResponse, ClientListResponse, CreateClientRequest,
    CreateClientResponse, UpdateClientRequest,
};
use persistence::repositories::client::NewClient;
use persistence::repositories::ClientRepository;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::users::MessageResponse;

/// Query parameters for the group-scoped client listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsByGroupQuery {
    pub group_id: Uuid,
}

/// Register a single client.
///
/// POST /api/v1/clients
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<CreateClientResponse>), ApiError> {
    request.validate()?;

    let repo = ClientRepository::new(state.pool.clone());
    let client = repo
        .create_client(&NewClient {
            client_name: request.client_name,
            contact: request.contact,
            client_email: request.client_email,
        })
        .await?;

    info!(client_id = %client.id, "Client registered");

    Ok((
        StatusCode::CREATED,
        Json(CreateClientResponse {
            client_id: client.id,
            message: "Registration completed".to_string(),
        }),
    ))
}

/// Register many clients in one call, atomically.
///
/// POST /api/v1/clients/bulk
pub async fn create_clients_bulk(
    State(state): State<AppState>,
    Json(request): Json<BulkCreateClientsRequest>,
) -> Result<(StatusCode, Json<BulkCreateClientsResponse>), ApiError> {
    request.validate()?;

    let rows: Vec<NewClient> = request
        .data
        .into_iter()
        .map(|c| NewClient {
            client_name: c.client_name,
            contact: c.contact,
            client_email: c.client_email,
        })
        .collect();

    let repo = ClientRepository::new(state.pool.clone());
    let created = repo.create_clients_bulk(&rows).await?;

    info!(count = created.len(), "Clients bulk registered");

    Ok((
        StatusCode::CREATED,
        Json(BulkCreateClientsResponse {
            new_clients: created.into_iter().map(Into::into).collect(),
            message: "Bulk registration completed".to_string(),
        }),
    ))
}

/// List all registered clients.
///
/// GET /api/v1/clients
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<ClientListResponse>, ApiError> {
    let repo = ClientRepository::new(state.pool.clone());
    let clients = repo.list_all().await?;

    Ok(Json(ClientListResponse {
        data: clients.into_iter().map(Into::into).collect(),
    }))
}

/// List clients that received a send under a group.
///
/// GET /api/v1/clients/by-group?groupId=...
pub async fn list_clients_by_group(
    State(state): State<AppState>,
    Query(query): Query<ClientsByGroupQuery>,
) -> Result<Json<ClientListResponse>, ApiError> {
    let repo = ClientRepository::new(state.pool.clone());
    let clients = repo.find_by_group(query.group_id).await?;

    Ok(Json(ClientListResponse {
        data: clients.into_iter().map(Into::into).collect(),
    }))
}

/// Edit a client's name and contact.
///
/// PUT /api/v1/clients/:client_id
pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<Uuid>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate()?;

    let repo = ClientRepository::new(state.pool.clone());

    repo.find_by_id(client_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Client not found".to_string()))?;

    repo.update_client(client_id, &request.client_name, &request.contact)
        .await?;

    info!(client_id = %client_id, "Client updated");

    Ok(Json(MessageResponse {
        message: "Update completed".to_string(),
    }))
}

/// Delete a client.
///
/// DELETE /api/v1/clients/:client_id
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ClientRepository::new(state.pool.clone());

    let deleted = repo.delete_client(client_id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Client not found".to_string()));
    }

    info!(client_id = %client_id, "Client deleted");

    Ok(Json(MessageResponse {
        message: "Deletion completed".to_string(),
    }))
}
