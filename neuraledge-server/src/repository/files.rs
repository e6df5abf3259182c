//! Raw workflow files
//!
//! One `<id>.json` file per workflow, served as-is by the download endpoint.
//! Callers must pass an identifier that has already been validated.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory of raw per-workflow files
#[derive(Debug, Clone)]
pub struct WorkflowFiles {
    dir: PathBuf,
}

impl WorkflowFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the raw file for a validated identifier
    ///
    /// Returns `Ok(None)` when no such file exists.
    pub async fn read(&self, id: &str) -> Result<Option<Vec<u8>>, std::io::Error> {
        let path = self.dir.join(format!("{}.json", id));

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}
