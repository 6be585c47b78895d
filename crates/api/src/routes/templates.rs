//! Template lookup routes.
//!
//! Templates are reference data seeded by migration; the API only reads
//! them.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::template::{TemplateDetail, TemplateListResponse};
use persistence::repositories::TemplateRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// List all templates with their declared variables.
///
/// GET /api/v1/templates
pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<TemplateListResponse>, ApiError> {
    let repo = TemplateRepository::new(state.pool.clone());

    let templates = repo.list_all().await?;
    let mut data = Vec::with_capacity(templates.len());
    for template in templates {
        let variables = repo.variables_for_template(template.id).await?;
        data.push(TemplateDetail {
            template: template.into(),
            variables: variables.into_iter().map(Into::into).collect(),
        });
    }

    Ok(Json(TemplateListResponse { data }))
}

/// Fetch one template by its unique code.
///
/// GET /api/v1/templates/:code
pub async fn get_template_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<TemplateDetail>, ApiError> {
    let repo = TemplateRepository::new(state.pool.clone());

    let template = repo
        .find_by_code(&code)
        .await?
        .ok_or_else(|| ApiError::NotFound("Template not found".to_string()))?;

    let variables = repo.variables_for_template(template.id).await?;

    Ok(Json(TemplateDetail {
        template: template.into(),
        variables: variables.into_iter().map(Into::into).collect(),
    }))
}
