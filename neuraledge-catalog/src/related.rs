//! Single-record lookup and related records

use std::collections::HashSet;

use neuraledge_core::domain::workflow::WorkflowRecord;

use crate::normalize;

/// Maximum number of related records returned with a workflow
pub const RELATED_LIMIT: usize = 4;

/// Find a record by the identifier string used in request paths
pub fn find_workflow<'a>(records: &'a [WorkflowRecord], id: &str) -> Option<&'a WorkflowRecord> {
    records.iter().find(|r| r.id.to_string() == id)
}

/// Records sharing at least one derived category label with `target`
///
/// Excludes the target itself, keeps catalog order and stops at `limit`.
pub fn related_workflows<'a>(
    records: &'a [WorkflowRecord],
    target: &WorkflowRecord,
    limit: usize,
) -> Vec<&'a WorkflowRecord> {
    let target_categories = normalize::categories(target);
    let wanted: HashSet<&str> = target_categories.iter().map(String::as_str).collect();
    if wanted.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|r| r.id != target.id)
        .filter(|r| {
            normalize::categories(r)
                .iter()
                .any(|c| wanted.contains(c.as_str()))
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, categories: &[&str]) -> WorkflowRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Workflow {}", id),
            "categories": categories,
        }))
        .unwrap()
    }

    #[test]
    fn test_find_by_string_id() {
        let records = vec![record(10, &[]), record(42, &[])];
        assert_eq!(find_workflow(&records, "42").map(|r| r.id), Some(42));
        assert!(find_workflow(&records, "43").is_none());
        assert!(find_workflow(&records, "abc").is_none());
    }

    #[test]
    fn test_related_share_a_category_and_exclude_target() {
        let records = vec![
            record(1, &["Sales", "CRM"]),
            record(2, &["Marketing"]),
            record(3, &["CRM"]),
            record(4, &["Sales"]),
        ];

        let related: Vec<u64> = related_workflows(&records, &records[0], RELATED_LIMIT)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(related, vec![3, 4]);
    }

    #[test]
    fn test_related_capped_in_catalog_order() {
        let records: Vec<WorkflowRecord> = (1..=10).map(|id| record(id, &["Sales"])).collect();

        let related: Vec<u64> = related_workflows(&records, &records[4], RELATED_LIMIT)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(related, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_keyword_categories_relate() {
        let records: Vec<WorkflowRecord> = vec![
            serde_json::from_value(serde_json::json!({"id": 1, "title": "A", "description": "send email"}))
                .unwrap(),
            serde_json::from_value(serde_json::json!({"id": 2, "title": "B", "description": "email digest"}))
                .unwrap(),
            record(3, &["Sales"]),
        ];

        let related: Vec<u64> = related_workflows(&records, &records[0], RELATED_LIMIT)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(related, vec![2]);
    }

    #[test]
    fn test_target_without_categories_has_no_related() {
        let records = vec![record(1, &[]), record(2, &[])];
        assert!(related_workflows(&records, &records[0], RELATED_LIMIT).is_empty());
    }
}
