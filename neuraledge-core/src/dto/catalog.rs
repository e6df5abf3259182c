//! Catalog status DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::CatalogOrigin;

/// Snapshot currently served by the catalog store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatus {
    /// Which source the records were loaded from
    pub source: CatalogOrigin,

    /// Number of records in the snapshot
    pub record_count: usize,

    /// When the snapshot was loaded
    pub loaded_at: DateTime<Utc>,
}
