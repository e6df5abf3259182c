//! Service Module
//!
//! Business logic layer for the server.
//! Services read the current catalog snapshot and run the catalog pipeline
//! over it; they never touch HTTP types.

pub mod catalog;
pub mod error;
pub mod workflow;

// Re-export for convenience
pub use catalog as catalog_service;
pub use error::ServiceError;
pub use workflow as workflow_service;
