//! Catalog snapshot metadata

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the records of a catalog snapshot came from
///
/// `Sample` means neither catalog file could be read and the deterministic
/// sample set is being served instead of real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    Primary,
    Fallback,
    Sample,
}

impl CatalogOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogOrigin::Primary => "primary",
            CatalogOrigin::Fallback => "fallback",
            CatalogOrigin::Sample => "sample",
        }
    }

    /// True when the snapshot holds records read from a catalog file
    pub fn is_real_data(&self) -> bool {
        !matches!(self, CatalogOrigin::Sample)
    }
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_serializes_lowercase() {
        let json = serde_json::to_string(&CatalogOrigin::Fallback).unwrap();
        assert_eq!(json, "\"fallback\"");
        assert_eq!(CatalogOrigin::Sample.to_string(), "sample");
    }

    #[test]
    fn test_only_sample_is_not_real_data() {
        assert!(CatalogOrigin::Primary.is_real_data());
        assert!(CatalogOrigin::Fallback.is_real_data());
        assert!(!CatalogOrigin::Sample.is_real_data());
    }
}
