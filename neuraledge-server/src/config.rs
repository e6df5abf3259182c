//! Server configuration
//!
//! Defines where the catalog is read from, how long a loaded catalog stays
//! valid and the paging limits applied to list requests.

use std::path::PathBuf;
use std::time::Duration;

use neuraledge_catalog::paginate::DEFAULT_PAGE_SIZE;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address (e.g., "0.0.0.0:8080")
    pub bind_addr: String,

    /// Primary catalog file, a JSON array of workflow records
    pub catalog_path: PathBuf,

    /// Secondary catalog file, tried when the primary cannot be read
    pub catalog_fallback_path: PathBuf,

    /// Directory holding one raw `<id>.json` file per workflow
    pub workflow_files_dir: PathBuf,

    /// How long a loaded catalog is served before reloading; zero reloads on every call
    pub cache_ttl: Duration,

    /// Page size used when a request does not give one
    pub default_page_size: usize,

    /// Upper bound for requested page sizes
    pub max_page_size: usize,
}

impl Config {
    /// Creates a configuration with default values and the given catalog path
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            catalog_path: catalog_path.into(),
            catalog_fallback_path: PathBuf::from("data/workflows.json"),
            workflow_files_dir: PathBuf::from("workflows/workflows"),
            cache_ttl: Duration::from_secs(300),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 100,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// All variables are optional:
    /// - NEURALEDGE_BIND_ADDR (default: 0.0.0.0:8080)
    /// - NEURALEDGE_CATALOG_PATH (default: ../workflows/workflows_export.json)
    /// - NEURALEDGE_CATALOG_FALLBACK_PATH (default: data/workflows.json)
    /// - NEURALEDGE_WORKFLOW_FILES_DIR (default: workflows/workflows)
    /// - NEURALEDGE_CACHE_TTL_SECS (default: 300)
    /// - NEURALEDGE_DEFAULT_PAGE_SIZE (default: 24)
    /// - NEURALEDGE_MAX_PAGE_SIZE (default: 100)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let parse_number = |key: &str, default: u64| -> anyhow::Result<u64> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| anyhow::anyhow!("{} must be a non-negative integer, got {:?}", key, raw)),
                None => Ok(default),
            }
        };

        let bind_addr = lookup("NEURALEDGE_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let catalog_path = lookup("NEURALEDGE_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);

        let catalog_fallback_path = lookup("NEURALEDGE_CATALOG_FALLBACK_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_fallback_path);

        let workflow_files_dir = lookup("NEURALEDGE_WORKFLOW_FILES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.workflow_files_dir);

        let cache_ttl = Duration::from_secs(parse_number(
            "NEURALEDGE_CACHE_TTL_SECS",
            defaults.cache_ttl.as_secs(),
        )?);

        let default_page_size =
            parse_number("NEURALEDGE_DEFAULT_PAGE_SIZE", defaults.default_page_size as u64)? as usize;

        let max_page_size =
            parse_number("NEURALEDGE_MAX_PAGE_SIZE", defaults.max_page_size as u64)? as usize;

        Ok(Self {
            bind_addr,
            catalog_path,
            catalog_fallback_path,
            workflow_files_dir,
            cache_ttl,
            default_page_size,
            max_page_size,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.trim().is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.catalog_path.as_os_str().is_empty() {
            anyhow::bail!("catalog_path cannot be empty");
        }

        if self.default_page_size == 0 {
            anyhow::bail!("default_page_size must be greater than 0");
        }

        if self.default_page_size > self.max_page_size {
            anyhow::bail!(
                "default_page_size ({}) cannot exceed max_page_size ({})",
                self.default_page_size,
                self.max_page_size
            );
        }

        Ok(())
    }

    /// Clamp a requested page size into `[1, max_page_size]`
    pub fn page_size(&self, requested: Option<i64>) -> usize {
        match requested {
            None => self.default_page_size,
            Some(size) => size.clamp(1, self.max_page_size.max(1) as i64) as usize,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("../workflows/workflows_export.json")
    }
}
