//! NeuralEdge HTTP Client
//!
//! A small, type-safe client for the NeuralEdge catalog API.
//!
//! # Example
//!
//! ```no_run
//! use neuraledge_client::CatalogClient;
//! use neuraledge_core::dto::workflow::ListWorkflows;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CatalogClient::new("http://localhost:8080");
//!
//!     let page = client.list_workflows(&ListWorkflows {
//!         q: Some("slack".to_string()),
//!         ..Default::default()
//!     }).await?;
//!
//!     println!("{} matching workflows", page.total_count);
//!     Ok(())
//! }
//! ```

pub mod error;
mod catalog;
mod workflows;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the NeuralEdge catalog API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    ///
    /// # Example
    /// ```
    /// use neuraledge_client::CatalogClient;
    ///
    /// let client = CatalogClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new catalog client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL from path segments
    ///
    /// Each segment is percent-encoded, so identifiers cannot change the path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidRequest(format!("Invalid base URL {}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidRequest(format!("Base URL {} cannot have a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        self.check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response and return the body text unchanged
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        Ok(self.check_status(response).await?.text().await?)
    }

    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }
}
