//! Workflow DTOs

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::domain::category::CategoryCount;
use crate::domain::workflow::{Complexity, WorkflowRecord};

/// Query parameters of the list endpoint
///
/// Every field is optional; the server applies the defaults (`q` empty,
/// `category`/`complexity` "all", page 1, configured page size). An empty
/// `page` or `pageSize` counts as omitted, and `categories` is only set by
/// the exact value `true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkflows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<i64>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_size: Option<i64>,
    /// When true the endpoint returns category counts instead of a page
    #[serde(
        default,
        deserialize_with = "true_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub categories: Option<bool>,
}

/// Query strings carry every value as text; JSON bodies carry typed values
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagOrText {
    Flag(bool),
    Text(String),
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid number: {}", text))),
    }
}

fn true_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<FlagOrText>::deserialize(deserializer)? {
        None => None,
        Some(FlagOrText::Flag(flag)) => Some(flag),
        Some(FlagOrText::Text(text)) => Some(text == "true"),
    })
}

/// A stored record plus the attributes derived from it on read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowView {
    #[serde(flatten)]
    pub record: WorkflowRecord,
    pub complexity: Complexity,
    pub integrations: Vec<String>,
}

/// One page of a filtered catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub workflows: Vec<T>,
    pub total_pages: usize,
    pub current_page: usize,
    pub total_count: usize,
}

impl<T> PaginatedResult<T> {
    /// Convert the page items while keeping the page bookkeeping
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            workflows: self.workflows.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            current_page: self.current_page,
            total_count: self.total_count,
        }
    }
}

/// Response of the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDetail {
    pub workflow: WorkflowView,
    pub related_workflows: Vec<WorkflowView>,
}

/// Response of the list endpoint when category counts are requested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryCount>,
}
