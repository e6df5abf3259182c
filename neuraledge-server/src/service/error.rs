//! Service error type

use neuraledge_catalog::IdentifierError;
use thiserror::Error;

/// Failure of a service operation
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Workflow {0} not found")]
    NotFound(String),

    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("{0}")]
    Internal(String),
}
