//! Repository Module
//!
//! Data access layer for the server.
//! Catalog sources and the caching store that fronts them, plus the raw
//! per-workflow file directory.

pub mod clock;
pub mod files;
pub mod source;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use files::WorkflowFiles;
pub use source::{CatalogSource, FileSource, SourceError};
pub use store::{CatalogSnapshot, CatalogStore};
