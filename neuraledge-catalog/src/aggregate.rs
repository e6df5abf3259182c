//! Category counts
//!
//! Recomputed from the full catalog on every call.

use std::collections::{HashMap, HashSet};

use neuraledge_core::domain::category::CategoryCount;
use neuraledge_core::domain::workflow::WorkflowRecord;

use crate::normalize;

/// Count how many records carry each category label
///
/// A label listed twice on the same record counts once for that record.
/// The result is sorted by descending count; ties keep the order in which
/// labels were first seen in the catalog.
pub fn count_categories(records: &[WorkflowRecord]) -> Vec<CategoryCount> {
    let mut tally = Tally::default();

    for record in records {
        let categories = normalize::categories(record);
        let mut seen = HashSet::new();
        for category in categories.iter() {
            if seen.insert(category.as_str()) {
                tally.add(category);
            }
        }
    }

    tally.into_sorted()
}

/// Insertion-ordered label counter
#[derive(Debug, Default)]
pub(crate) struct Tally {
    index: HashMap<String, usize>,
    counts: Vec<CategoryCount>,
}

impl Tally {
    pub(crate) fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.counts[i].count += 1,
            None => {
                self.index.insert(label.to_string(), self.counts.len());
                self.counts.push(CategoryCount::new(label, 1));
            }
        }
    }

    pub(crate) fn into_sorted(mut self) -> Vec<CategoryCount> {
        self.counts.sort_by(|a, b| b.count.cmp(&a.count));
        self.counts
    }
}
