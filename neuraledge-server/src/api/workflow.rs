//! Workflow API Handlers
//!
//! HTTP endpoints for browsing and downloading workflows.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::header,
    response::IntoResponse,
};
use neuraledge_core::dto::workflow::ListWorkflows;

use crate::api::CATALOG_SOURCE_HEADER;
use crate::api::error::ApiResult;
use crate::service::workflow_service;
use crate::state::AppState;

// =============================================================================
// Catalog Endpoints
// =============================================================================

/// GET /api/workflows
/// Search the catalog, or count categories when `categories=true`
///
/// Query parameters:
/// - `q`: free text, matched case-insensitively
/// - `category`, `complexity`: exact filters, "all" disables them
/// - `page`, `pageSize`: paging, clamped into range
pub async fn list_workflows(
    State(state): State<AppState>,
    params: Result<Query<ListWorkflows>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = params?;
    tracing::debug!("Listing workflows: {:?}", params);

    let (listing, origin) =
        workflow_service::list_workflows(&state.store, &state.config, &params).await;

    Ok(([(CATALOG_SOURCE_HEADER, origin.as_str())], Json(listing)))
}

/// GET /api/workflows/{id}
/// Get one workflow and up to four related workflows
pub async fn get_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    tracing::debug!("Getting workflow: {}", id);

    let (detail, origin) = workflow_service::get_workflow(&state.store, &id).await?;

    Ok(([(CATALOG_SOURCE_HEADER, origin.as_str())], Json(detail)))
}

// =============================================================================
// Raw File Endpoints
// =============================================================================

/// GET /api/workflows/{id}/download
/// Get the raw workflow file, exactly as stored
pub async fn download_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    tracing::debug!("Downloading workflow file: {}", id);

    let contents = workflow_service::download_workflow(&state.files, &id).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], contents))
}
