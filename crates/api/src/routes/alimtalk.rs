//! AlimTalk dispatch pipeline routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use domain::models::content::{SaveContentRequest, SaveContentResponse};
use domain::models::result::{
    ReconcileDetailsRequest, ReconcileSendsRequest, ResultDetailWithClient,
};
use domain::models::send::{SendAlimtalkRequest, SendAlimtalkResponse};
use domain::models::Send;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::AlimtalkService;

/// List wrapper for reconciled sends.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileSendsResponse {
    pub data: Vec<Send>,
}

/// List wrapper for reconciled per-recipient results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileDetailsResponse {
    pub data: Vec<ResultDetailWithClient>,
}

/// Query parameters correlating detail callbacks with a dispatch group.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailCallbackQuery {
    pub group_id: Uuid,
}

/// Validate content against its template and store it.
///
/// POST /api/v1/alimtalk/contents
pub async fn save_contents(
    State(state): State<AppState>,
    Json(request): Json<SaveContentRequest>,
) -> Result<(StatusCode, Json<SaveContentResponse>), ApiError> {
    request.validate()?;

    let service = AlimtalkService::new(state.pool.clone(), state.gateway.clone());
    let response = service.save_content(&request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Dispatch a batch through the gateway and persist the paired sends.
///
/// POST /api/v1/alimtalk/send
///
/// The batch is all-or-nothing: any unresolved tuple fails the whole
/// request before the gateway is called.
pub async fn send_alimtalk(
    State(state): State<AppState>,
    Json(request): Json<SendAlimtalkRequest>,
) -> Result<(StatusCode, Json<SendAlimtalkResponse>), ApiError> {
    request.validate()?;

    let service = AlimtalkService::new(state.pool.clone(), state.gateway.clone());
    let response = service.send_alimtalk(&request.data).await?;

    info!(
        batch_size = request.data.len(),
        mid = %response.aligo_result.info.mid,
        "AlimTalk batch dispatched"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// Ingest batch-level delivery results from the gateway.
///
/// POST /api/v1/alimtalk/results
///
/// Results whose `mid` matches no send are skipped; matched sends are
/// updated and returned.
pub async fn save_results(
    State(state): State<AppState>,
    Json(request): Json<ReconcileSendsRequest>,
) -> Result<Json<ReconcileSendsResponse>, ApiError> {
    request.validate()?;

    let service = AlimtalkService::new(state.pool.clone(), state.gateway.clone());
    let reconciled = service.reconcile_sends(&request.results).await?;

    info!(
        received = request.results.len(),
        matched = reconciled.len(),
        "Send results reconciled"
    );

    Ok(Json(ReconcileSendsResponse { data: reconciled }))
}

/// Ingest per-recipient delivery results, idempotently by `msgid`.
///
/// POST /api/v1/alimtalk/results/detail?groupId=...
pub async fn save_result_details(
    State(state): State<AppState>,
    Query(query): Query<DetailCallbackQuery>,
    Json(request): Json<ReconcileDetailsRequest>,
) -> Result<Json<ReconcileDetailsResponse>, ApiError> {
    request.validate()?;

    let service = AlimtalkService::new(state.pool.clone(), state.gateway.clone());

    let context = service.get_send_context_by_group(query.group_id).await?;
    let reconciled = service.reconcile_details(&request.results, &context).await?;

    info!(
        group_id = %query.group_id,
        send_id = %context.send_id,
        count = reconciled.len(),
        "Per-recipient results reconciled"
    );

    Ok(Json(ReconcileDetailsResponse { data: reconciled }))
}
