//! Catalog Store
//!
//! Holds the current catalog snapshot in memory and reloads it once its
//! validity window has passed. Readers always get a whole snapshot: a reload
//! builds a new one off to the side and swaps the pointer under a short
//! write lock.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use neuraledge_catalog::sample_workflows;
use neuraledge_core::domain::catalog::CatalogOrigin;
use neuraledge_core::domain::workflow::WorkflowRecord;
use neuraledge_core::dto::catalog::CatalogStatus;
use tokio::sync::RwLock;

use super::clock::Clock;
use super::source::CatalogSource;

/// An immutable, fully loaded catalog
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub records: Vec<WorkflowRecord>,
    pub origin: CatalogOrigin,
    pub loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn status(&self) -> CatalogStatus {
        CatalogStatus {
            source: self.origin,
            record_count: self.records.len(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Caching front for an ordered chain of catalog sources
///
/// Sources are tried in order; when all of them fail the built-in sample
/// catalog is served and tagged [`CatalogOrigin::Sample`].
pub struct CatalogStore {
    sources: Vec<Box<dyn CatalogSource>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    current: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl CatalogStore {
    pub fn new(sources: Vec<Box<dyn CatalogSource>>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            sources,
            ttl,
            clock,
            current: RwLock::new(None),
        }
    }

    /// Current snapshot, reloading first if it is missing or expired
    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        if let Some(snapshot) = self.current.read().await.as_ref() {
            if self.is_fresh(snapshot) {
                tracing::debug!(
                    "Catalog cache hit ({} records from {})",
                    snapshot.records.len(),
                    snapshot.origin
                );
                return Arc::clone(snapshot);
            }
        }

        // Concurrent reloads may race here; each one builds a complete
        // snapshot and the last swap wins.
        let loaded = Arc::new(self.load().await);
        *self.current.write().await = Some(Arc::clone(&loaded));
        loaded
    }

    /// Drop the cached snapshot so the next call reloads
    pub async fn invalidate(&self) {
        *self.current.write().await = None;
    }

    fn is_fresh(&self, snapshot: &CatalogSnapshot) -> bool {
        if self.ttl.is_zero() {
            return false;
        }

        // A clock that moved backwards counts as no time elapsed
        let elapsed = (self.clock.now() - snapshot.loaded_at)
            .to_std()
            .unwrap_or_default();
        elapsed < self.ttl
    }

    async fn load(&self) -> CatalogSnapshot {
        for source in &self.sources {
            match source.load().await {
                Ok(records) => {
                    tracing::info!(
                        "Loaded {} workflows from {} catalog {}",
                        records.len(),
                        source.origin(),
                        source.describe()
                    );
                    return CatalogSnapshot {
                        records,
                        origin: source.origin(),
                        loaded_at: self.clock.now(),
                    };
                }
                Err(err) => {
                    tracing::warn!("Catalog source unavailable: {}", err);
                }
            }
        }

        let records = sample_workflows();
        tracing::warn!(
            "No catalog file could be read, serving {} sample workflows",
            records.len()
        );

        CatalogSnapshot {
            records,
            origin: CatalogOrigin::Sample,
            loaded_at: self.clock.now(),
        }
    }
}
