//! Catalog API Handlers
//!
//! Reports which catalog the server is answering from.

use axum::{Json, extract::State, response::IntoResponse};
use neuraledge_core::dto::catalog::CatalogStatus;

use crate::api::CATALOG_SOURCE_HEADER;
use crate::service::catalog_service;
use crate::state::AppState;

/// GET /api/catalog/status
/// Origin, record count and load time of the current catalog
pub async fn catalog_status(State(state): State<AppState>) -> impl IntoResponse {
    let status: CatalogStatus = catalog_service::status(&state.store).await;
    tracing::debug!(
        "Catalog status: {} records from {}",
        status.record_count,
        status.source
    );

    ([(CATALOG_SOURCE_HEADER, status.source.as_str())], Json(status))
}
