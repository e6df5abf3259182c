//! NeuralEdge Server
//!
//! HTTP service over the workflow catalog: configuration, the caching
//! catalog store, the service layer and the axum routes.

pub mod api;
pub mod config;
pub mod repository;
pub mod service;
pub mod state;

pub use api::create_router;
pub use config::Config;
pub use state::AppState;
