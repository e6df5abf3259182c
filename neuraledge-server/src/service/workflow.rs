//! Workflow Service
//!
//! List, detail and download operations over the workflow catalog.

use neuraledge_catalog::normalize::view;
use neuraledge_catalog::related::RELATED_LIMIT;
use neuraledge_catalog::{
    SearchCriteria, count_categories, find_workflow, paginate, related_workflows, search,
    validate_file_id,
};
use neuraledge_core::domain::catalog::CatalogOrigin;
use neuraledge_core::dto::workflow::{
    CategoriesResponse, ListWorkflows, PaginatedResult, WorkflowDetail, WorkflowView,
};
use serde::Serialize;
use serde::de::IgnoredAny;

use crate::config::Config;
use crate::repository::{CatalogStore, WorkflowFiles};
use crate::service::error::ServiceError;

/// Body of the list endpoint: a page of workflows or the category counts
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WorkflowListing {
    Page(PaginatedResult<WorkflowView>),
    Categories(CategoriesResponse),
}

/// Search and paginate the catalog, or count its categories
///
/// With the `categories` flag set, the filters and paging parameters are
/// ignored and the category counts of the whole catalog are returned.
pub async fn list_workflows(
    store: &CatalogStore,
    config: &Config,
    params: &ListWorkflows,
) -> (WorkflowListing, CatalogOrigin) {
    let snapshot = store.snapshot().await;

    if params.categories.unwrap_or(false) {
        let categories = count_categories(&snapshot.records);
        tracing::debug!("Counted {} categories", categories.len());
        return (
            WorkflowListing::Categories(CategoriesResponse { categories }),
            snapshot.origin,
        );
    }

    let criteria = SearchCriteria::new(
        params.q.as_deref().unwrap_or(""),
        params.category.as_deref(),
        params.complexity.as_deref(),
    );
    let matches = search(&snapshot.records, &criteria);

    let page_size = config.page_size(params.page_size);
    let page = paginate(&matches, params.page.unwrap_or(1), page_size).map(|record| view(record));

    tracing::debug!(
        "Search matched {} of {} workflows, serving page {}/{}",
        page.total_count,
        snapshot.records.len(),
        page.current_page,
        page.total_pages
    );

    (WorkflowListing::Page(page), snapshot.origin)
}

/// A single workflow with up to four related workflows
pub async fn get_workflow(
    store: &CatalogStore,
    id: &str,
) -> Result<(WorkflowDetail, CatalogOrigin), ServiceError> {
    let snapshot = store.snapshot().await;

    let record = find_workflow(&snapshot.records, id)
        .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

    let related_workflows = related_workflows(&snapshot.records, record, RELATED_LIMIT)
        .into_iter()
        .map(view)
        .collect();

    let detail = WorkflowDetail {
        workflow: view(record),
        related_workflows,
    };

    Ok((detail, snapshot.origin))
}

/// Raw file contents of a workflow, byte for byte
///
/// The identifier is checked against the allow-list before any path is built.
/// Files that are not valid JSON are reported as internal errors.
pub async fn download_workflow(files: &WorkflowFiles, id: &str) -> Result<Vec<u8>, ServiceError> {
    let id = validate_file_id(id)?;

    let bytes = files
        .read(id)
        .await
        .map_err(|err| ServiceError::Internal(format!("Failed to read workflow file {}: {}", id, err)))?
        .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

    serde_json::from_slice::<IgnoredAny>(&bytes)
        .map_err(|err| ServiceError::Internal(format!("Workflow file {} is not valid JSON: {}", id, err)))?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{CatalogSource, SystemClock};
    use neuraledge_core::domain::workflow::WorkflowRecord;
    use std::sync::Arc;
    use std::time::Duration;

    fn sample_store() -> CatalogStore {
        let sources: Vec<Box<dyn CatalogSource>> = Vec::new();
        CatalogStore::new(sources, Duration::from_secs(60), Arc::new(SystemClock))
    }

    fn unwrap_page(listing: WorkflowListing) -> PaginatedResult<WorkflowView> {
        match listing {
            WorkflowListing::Page(page) => page,
            WorkflowListing::Categories(_) => panic!("expected a page"),
        }
    }

    #[tokio::test]
    async fn test_list_defaults() {
        let store = sample_store();
        let (listing, origin) = list_workflows(&store, &Config::default(), &ListWorkflows::default()).await;
        let page = unwrap_page(listing);

        assert_eq!(origin, CatalogOrigin::Sample);
        assert_eq!(page.total_count, 100);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.workflows.len(), 24);
    }

    #[tokio::test]
    async fn test_list_categories_ignores_paging() {
        let store = sample_store();
        let params = ListWorkflows {
            categories: Some(true),
            page: Some(9),
            q: Some("nothing".to_string()),
            ..Default::default()
        };

        let (listing, _) = list_workflows(&store, &Config::default(), &params).await;
        match listing {
            WorkflowListing::Categories(response) => {
                assert_eq!(response.categories.len(), 10);
                assert!(response.categories.iter().all(|c| c.count == 10));
            }
            WorkflowListing::Page(_) => panic!("expected categories"),
        }
    }

    #[tokio::test]
    async fn test_get_workflow_with_related() {
        let store = sample_store();
        let (detail, _) = get_workflow(&store, "1").await.unwrap();

        assert_eq!(detail.workflow.record.id, 1);
        assert_eq!(detail.related_workflows.len(), RELATED_LIMIT);
        let wanted: &WorkflowRecord = &detail.workflow.record;
        for related in &detail.related_workflows {
            assert_ne!(related.record.id, 1);
            assert_eq!(related.record.categories, wanted.categories);
        }
    }

    #[tokio::test]
    async fn test_get_unknown_workflow() {
        let store = sample_store();
        let result = get_workflow(&store, "999999").await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_download_rejects_traversal_before_reading() {
        let files = WorkflowFiles::new("/nonexistent");
        let result = download_workflow(&files, "../secret").await;
        assert!(matches!(result, Err(ServiceError::InvalidIdentifier(_))));
    }

    #[tokio::test]
    async fn test_download_returns_file_bytes_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let contents = br#"{"name":"Slack alerts","nodes":[],"connections":{},"active":false}"#;
        std::fs::write(dir.path().join("slack-alerts.json"), contents).unwrap();

        let files = WorkflowFiles::new(dir.path());
        let bytes = download_workflow(&files, "slack-alerts").await.unwrap();
        assert_eq!(bytes, contents.to_vec());
    }

    #[tokio::test]
    async fn test_download_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let files = WorkflowFiles::new(dir.path());
        let result = download_workflow(&files, "broken").await;
        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }
}
