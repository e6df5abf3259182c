//! Configuration module
//!
//! Handles CLI configuration.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the catalog server
    pub server_url: String,
}
