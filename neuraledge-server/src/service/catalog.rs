//! Catalog Service
//!
//! Reports which catalog is being served.

use neuraledge_core::dto::catalog::CatalogStatus;

use crate::repository::CatalogStore;

/// Origin, size and load time of the current snapshot
pub async fn status(store: &CatalogStore) -> CatalogStatus {
    store.snapshot().await.status()
}
