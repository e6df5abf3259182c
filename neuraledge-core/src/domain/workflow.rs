//! Workflow domain types

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow template record
///
/// One entry of the catalog source file. Records are loaded in bulk and
/// never mutated; derived attributes (complexity, integrations) are computed
/// on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    /// Category labels as stored. May contain duplicates.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,
    /// Raw node type identifiers, e.g. `n8n-nodes-base.slack`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub node_types: Vec<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub creator_username: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(default)]
    pub node_count: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub scraped_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Fields this crate does not model, passed through to API responses
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Coarse size bucket derived from a workflow's node count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Intermediate,
    Advanced,
}

impl Complexity {
    /// Bucket a node count: up to 5 is simple, 6 to 15 intermediate, 16+ advanced
    pub fn from_node_count(node_count: u32) -> Self {
        match node_count {
            0..=5 => Complexity::Simple,
            6..=15 => Complexity::Intermediate,
            _ => Complexity::Advanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Complexity::Simple),
            "intermediate" => Ok(Complexity::Intermediate),
            "advanced" => Ok(Complexity::Advanced),
            other => Err(format!("unknown complexity: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_boundaries() {
        assert_eq!(Complexity::from_node_count(0), Complexity::Simple);
        assert_eq!(Complexity::from_node_count(5), Complexity::Simple);
        assert_eq!(Complexity::from_node_count(6), Complexity::Intermediate);
        assert_eq!(Complexity::from_node_count(15), Complexity::Intermediate);
        assert_eq!(Complexity::from_node_count(16), Complexity::Advanced);
        assert_eq!(Complexity::from_node_count(u32::MAX), Complexity::Advanced);
    }

    #[test]
    fn test_complexity_parse_is_exact() {
        assert_eq!("simple".parse::<Complexity>(), Ok(Complexity::Simple));
        assert_eq!("advanced".parse::<Complexity>(), Ok(Complexity::Advanced));
        assert!("Simple".parse::<Complexity>().is_err());
        assert!("all".parse::<Complexity>().is_err());
    }

    #[test]
    fn test_record_tolerates_missing_and_null_fields() {
        let json = r#"{
            "id": 7,
            "title": "Slack digest",
            "categories": null,
            "full_description": null
        }"#;

        let record: WorkflowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert!(record.categories.is_empty());
        assert!(record.node_types.is_empty());
        assert_eq!(record.node_count, 0);
        assert_eq!(record.full_description, None);
    }

    #[test]
    fn test_record_keeps_duplicate_categories() {
        let json = r#"{"id": 1, "title": "t", "categories": ["Sales", "Sales"]}"#;
        let record: WorkflowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.categories, vec!["Sales", "Sales"]);
    }

    #[test]
    fn test_record_keeps_unknown_fields() {
        let json = r#"{"id": 1, "title": "t", "views": 12, "tags": ["x"]}"#;
        let record: WorkflowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra["views"], 12);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["tags"], serde_json::json!(["x"]));
    }
}
