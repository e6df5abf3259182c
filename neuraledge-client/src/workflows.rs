//! Workflow-related API endpoints

use neuraledge_core::domain::category::CategoryCount;
use neuraledge_core::dto::workflow::{
    CategoriesResponse, ListWorkflows, PaginatedResult, WorkflowDetail, WorkflowView,
};

use crate::CatalogClient;
use crate::error::Result;

impl CatalogClient {
    // =============================================================================
    // Catalog Browsing
    // =============================================================================

    /// Search the catalog and fetch one page of results
    ///
    /// The `categories` flag of `params` is ignored; use
    /// [`CatalogClient::categories`] for category counts.
    pub async fn list_workflows(&self, params: &ListWorkflows) -> Result<PaginatedResult<WorkflowView>> {
        let params = ListWorkflows {
            categories: None,
            ..params.clone()
        };
        let url = self.endpoint(&["api", "workflows"])?;
        tracing::debug!("GET {} {:?}", url, params);

        let response = self.client.get(url).query(&params).send().await?;

        self.handle_response(response).await
    }

    /// Category labels with the number of workflows carrying each
    pub async fn categories(&self) -> Result<Vec<CategoryCount>> {
        let params = ListWorkflows {
            categories: Some(true),
            ..Default::default()
        };
        let url = self.endpoint(&["api", "workflows"])?;
        let response = self.client.get(url).query(&params).send().await?;

        let body: CategoriesResponse = self.handle_response(response).await?;
        Ok(body.categories)
    }

    /// Get a workflow and its related workflows
    ///
    /// # Arguments
    /// * `id` - The workflow identifier as it appears in the catalog
    pub async fn get_workflow(&self, id: &str) -> Result<WorkflowDetail> {
        let url = self.endpoint(&["api", "workflows", id])?;
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// Download the raw workflow file, exactly as the server stores it
    pub async fn download_workflow(&self, id: &str) -> Result<String> {
        let url = self.endpoint(&["api", "workflows", id, "download"])?;
        let response = self.client.get(url).send().await?;

        self.handle_text_response(response).await
    }
}
