//! Offline catalog maintenance
//!
//! Transforms applied to a catalog file by the CLI, never by the server.
//! Each returns a report of what it found or changed; file handling and
//! backups are the caller's job.
//!
//! Records are handled as raw JSON objects rather than [`WorkflowRecord`]s:
//! only the `categories` array is ever edited and whole records are only
//! ever dropped, so every other field is written back exactly as read.
//!
//! [`WorkflowRecord`]: neuraledge_core::domain::workflow::WorkflowRecord

use std::collections::{HashMap, HashSet};

use neuraledge_core::domain::category::CategoryCount;
use serde_json::Value;

use crate::aggregate::Tally;

/// How many entries the "top N" report sections keep
pub const REPORT_TOP: usize = 20;

/// One catalog entry as it appears in the file
pub type RawRecord = serde_json::Map<String, Value>;

/// A record whose stored category list repeats a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCategories {
    pub id: String,
    pub title: String,
    pub categories: Vec<String>,
}

/// Result of [`inspect`]
#[derive(Debug, Clone, Default)]
pub struct InspectionReport {
    pub total: usize,
    /// Label occurrences across stored categories, highest first
    pub top_categories: Vec<CategoryCount>,
    /// Pairs of labels that differ only by letter case
    pub case_conflicts: Vec<(String, String)>,
    pub duplicate_categories: Vec<DuplicateCategories>,
}

/// Result of [`dedupe_categories`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDedupeReport {
    /// Ids of the records whose category list shrank
    pub fixed: Vec<String>,
}

/// Result of [`dedupe_titles`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleDedupeReport {
    pub before: usize,
    pub after: usize,
    /// Titles with the number of extra copies removed, most copies first
    pub top_duplicates: Vec<(String, usize)>,
}

impl TitleDedupeReport {
    pub fn removed(&self) -> usize {
        self.before - self.after
    }
}

/// Result of [`strip_categories`]
#[derive(Debug, Clone, Default)]
pub struct StripReport {
    pub records_fixed: usize,
    pub labels_removed: usize,
    pub top_categories: Vec<CategoryCount>,
    pub without_categories: usize,
}

/// Survey a catalog for category problems without changing it
pub fn inspect(records: &[RawRecord]) -> InspectionReport {
    let mut tally = Tally::default();
    for record in records {
        for category in stored_categories(record) {
            tally.add(category);
        }
    }
    let all_labels = tally.into_sorted();

    let mut by_lowercase: HashMap<String, &str> = HashMap::new();
    let mut case_conflicts = Vec::new();
    for label in &all_labels {
        match by_lowercase.get(&label.name.to_lowercase()) {
            Some(first) => case_conflicts.push((first.to_string(), label.name.clone())),
            None => {
                by_lowercase.insert(label.name.to_lowercase(), &label.name);
            }
        }
    }

    let duplicate_categories = records
        .iter()
        .filter_map(|r| {
            let categories: Vec<&str> = stored_categories(r).collect();
            has_duplicates(&categories).then(|| DuplicateCategories {
                id: id_of(r),
                title: title_of(r).to_string(),
                categories: categories.into_iter().map(String::from).collect(),
            })
        })
        .collect();

    let mut top_categories = all_labels.clone();
    top_categories.truncate(REPORT_TOP);

    InspectionReport {
        total: records.len(),
        top_categories,
        case_conflicts,
        duplicate_categories,
    }
}

/// Remove repeated labels within each record, keeping first-seen order
///
/// Records whose `categories` is absent, null or not an array are left alone.
pub fn dedupe_categories(records: &mut [RawRecord]) -> CategoryDedupeReport {
    let mut report = CategoryDedupeReport::default();

    for record in records.iter_mut() {
        let id = id_of(record);
        let Some(categories) = categories_mut(record) else {
            continue;
        };

        let before = categories.len();
        let mut seen: Vec<Value> = Vec::with_capacity(before);
        categories.retain(|c| {
            if seen.contains(c) {
                false
            } else {
                seen.push(c.clone());
                true
            }
        });

        if categories.len() < before {
            report.fixed.push(id);
        }
    }

    report
}

/// Keep the first record for each exact title and drop later copies
///
/// Records without a title share the empty title.
pub fn dedupe_titles(records: Vec<RawRecord>) -> (Vec<RawRecord>, TitleDedupeReport) {
    let before = records.len();
    let mut seen = HashSet::new();
    let mut extra = Tally::default();
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        let title = title_of(&record).to_string();
        if seen.insert(title.clone()) {
            kept.push(record);
        } else {
            extra.add(&title);
        }
    }

    let top_duplicates = extra
        .into_sorted()
        .into_iter()
        .take(REPORT_TOP)
        .map(|c| (c.name, c.count))
        .collect();

    let report = TitleDedupeReport {
        before,
        after: kept.len(),
        top_duplicates,
    };

    (kept, report)
}

/// Remove the given labels from every record
pub fn strip_categories(records: &mut [RawRecord], labels: &[String]) -> StripReport {
    let unwanted: HashSet<&str> = labels.iter().map(String::as_str).collect();
    let mut report = StripReport::default();
    let mut remaining = Tally::default();

    for record in records.iter_mut() {
        if let Some(categories) = categories_mut(record) {
            let before = categories.len();
            categories.retain(|c| c.as_str().is_none_or(|label| !unwanted.contains(label)));
            let removed = before - categories.len();

            if removed > 0 {
                report.records_fixed += 1;
                report.labels_removed += removed;
            }
        }

        let mut left = stored_categories(record).peekable();
        if left.peek().is_none() {
            report.without_categories += 1;
        }
        for category in left {
            remaining.add(category);
        }
    }

    report.top_categories = remaining.into_sorted();
    report.top_categories.truncate(REPORT_TOP);
    report
}

// =============================================================================
// Field Access
// =============================================================================

fn id_of(record: &RawRecord) -> String {
    match record.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(id) => id.to_string(),
        None => String::new(),
    }
}

fn title_of(record: &RawRecord) -> &str {
    record.get("title").and_then(Value::as_str).unwrap_or("")
}

/// String labels of the stored `categories` array
fn stored_categories(record: &RawRecord) -> impl Iterator<Item = &str> {
    record
        .get("categories")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

fn categories_mut(record: &mut RawRecord) -> Option<&mut Vec<Value>> {
    record.get_mut("categories").and_then(Value::as_array_mut)
}

fn has_duplicates(categories: &[&str]) -> bool {
    let unique: HashSet<&str> = categories.iter().copied().collect();
    unique.len() < categories.len()
}
