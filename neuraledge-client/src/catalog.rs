//! Catalog status endpoint

use neuraledge_core::dto::catalog::CatalogStatus;

use crate::CatalogClient;
use crate::error::Result;

impl CatalogClient {
    /// Origin, size and load time of the catalog the server is answering from
    pub async fn catalog_status(&self) -> Result<CatalogStatus> {
        let url = self.endpoint(&["api", "catalog", "status"])?;
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// Check that the server is up
    pub async fn health(&self) -> Result<bool> {
        let url = self.endpoint(&["health"])?;
        let response = self.client.get(url).send().await?;

        Ok(response.status().is_success())
    }
}
