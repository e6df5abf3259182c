//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific domain.

pub mod catalog;
pub mod error;
pub mod health;
pub mod workflow;

use axum::{Router, http::Method, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Response header naming the origin of the catalog that answered a request
pub const CATALOG_SOURCE_HEADER: &str = "x-catalog-source";

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    // The catalog is public and read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .expose_headers([axum::http::HeaderName::from_static(CATALOG_SOURCE_HEADER)]);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Workflow endpoints
        .route("/api/workflows", get(workflow::list_workflows))
        .route("/api/workflows/{id}", get(workflow::get_workflow))
        .route("/api/workflows/{id}/download", get(workflow::download_workflow))
        // Catalog endpoints
        .route("/api/catalog/status", get(catalog::catalog_status))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
