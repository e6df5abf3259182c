//! Catalog sources
//!
//! A source produces the full list of workflow records in one read. The
//! store tries its sources in order and keeps the first that succeeds.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use neuraledge_core::domain::catalog::CatalogOrigin;
use neuraledge_core::domain::workflow::WorkflowRecord;
use thiserror::Error;

/// Failure to read a catalog source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Something the catalog can be loaded from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Origin reported for a catalog loaded from this source
    fn origin(&self) -> CatalogOrigin;

    /// Human-readable location, used in log messages
    fn describe(&self) -> String;

    /// Read and parse every record
    async fn load(&self) -> Result<Vec<WorkflowRecord>, SourceError>;
}

/// A JSON array of records on the local file system
#[derive(Debug, Clone)]
pub struct FileSource {
    origin: CatalogOrigin,
    path: PathBuf,
}

impl FileSource {
    pub fn new(origin: CatalogOrigin, path: impl Into<PathBuf>) -> Self {
        Self {
            origin,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<WorkflowRecord>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
