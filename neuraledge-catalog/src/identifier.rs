//! Download identifier validation
//!
//! Identifiers name files on disk, so they are checked against a strict
//! allow-list before any path is built from them.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static FILE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid regex"));

/// Rejected download identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid workflow id: {0:?}")]
pub struct IdentifierError(pub String);

/// Accept only ASCII letters, digits, `-` and `_`
pub fn validate_file_id(id: &str) -> Result<&str, IdentifierError> {
    if FILE_ID.is_match(id) {
        Ok(id)
    } else {
        Err(IdentifierError(id.to_string()))
    }
}
