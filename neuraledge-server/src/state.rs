//! Shared application state

use std::sync::Arc;

use neuraledge_core::domain::catalog::CatalogOrigin;

use crate::config::Config;
use crate::repository::{CatalogSource, CatalogStore, Clock, FileSource, SystemClock, WorkflowFiles};

/// State handed to every handler via `State<AppState>`
///
/// Cheap to clone; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<CatalogStore>,
    pub files: Arc<WorkflowFiles>,
}

impl AppState {
    /// Build the state from configuration, reading the catalog files named there
    pub fn from_config(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let sources: Vec<Box<dyn CatalogSource>> = vec![
            Box::new(FileSource::new(CatalogOrigin::Primary, &config.catalog_path)),
            Box::new(FileSource::new(
                CatalogOrigin::Fallback,
                &config.catalog_fallback_path,
            )),
        ];

        Self::new(config, sources, clock)
    }

    pub fn new(config: Config, sources: Vec<Box<dyn CatalogSource>>, clock: Arc<dyn Clock>) -> Self {
        let store = CatalogStore::new(sources, config.cache_ttl, clock);
        let files = WorkflowFiles::new(&config.workflow_files_dir);

        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            files: Arc::new(files),
        }
    }
}
