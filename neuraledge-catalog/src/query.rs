//! Catalog search
//!
//! Conjunctive filtering over free text, category and complexity tier.
//! Results keep catalog order; there is no relevance ranking.

use neuraledge_core::domain::workflow::WorkflowRecord;

use crate::normalize;

/// Value of the category and complexity filters that disables them
pub const ANY: &str = "all";

/// Filter criteria for [`search`]
///
/// Text and category comparisons are case-insensitive; the complexity
/// filter must equal the tier name exactly (`simple`, `intermediate`,
/// `advanced`). Unknown tiers match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    query: Option<String>,
    category: Option<String>,
    complexity: Option<String>,
}

impl SearchCriteria {
    /// Build criteria from raw request values
    ///
    /// Empty strings and "all" disable the corresponding filter.
    pub fn new(query: &str, category: Option<&str>, complexity: Option<&str>) -> Self {
        let query = (!query.is_empty()).then(|| query.to_lowercase());
        let category = active_filter(category).map(str::to_lowercase);
        let complexity = active_filter(complexity).map(str::to_string);

        Self {
            query,
            category,
            complexity,
        }
    }

    /// True when no filter is active
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_none() && self.category.is_none() && self.complexity.is_none()
    }

    /// Check a single record against every active filter
    pub fn matches(&self, record: &WorkflowRecord) -> bool {
        self.matches_text(record) && self.matches_category(record) && self.matches_complexity(record)
    }

    fn matches_text(&self, record: &WorkflowRecord) -> bool {
        let Some(query) = &self.query else {
            return true;
        };
        let contains = |value: &str| value.to_lowercase().contains(query.as_str());

        contains(record.title.as_str())
            || contains(record.description.as_str())
            || record.full_description.as_deref().is_some_and(contains)
            || record.creator.as_deref().is_some_and(contains)
            || record.creator_username.as_deref().is_some_and(contains)
            || record.categories.iter().any(|c| contains(c.as_str()))
            || record.node_types.iter().any(|t| contains(t.as_str()))
    }

    fn matches_category(&self, record: &WorkflowRecord) -> bool {
        let Some(category) = &self.category else {
            return true;
        };

        normalize::categories(record)
            .iter()
            .any(|c| c.to_lowercase() == *category)
    }

    fn matches_complexity(&self, record: &WorkflowRecord) -> bool {
        let Some(complexity) = &self.complexity else {
            return true;
        };

        normalize::complexity(record).as_str() == complexity.as_str()
    }
}

fn active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ANY)
}

/// Return the records matching `criteria`, in catalog order
pub fn search<'a>(records: &'a [WorkflowRecord], criteria: &SearchCriteria) -> Vec<&'a WorkflowRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}
