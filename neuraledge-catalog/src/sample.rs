//! Deterministic sample catalog
//!
//! Served when no catalog file can be read, so the catalog is never empty.
//! Every call produces the same records.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use neuraledge_core::domain::workflow::WorkflowRecord;

/// Number of records in the sample catalog
pub const SAMPLE_SIZE: u64 = 100;

const SAMPLE_CATEGORIES: [&str; 10] = [
    "Email Automation",
    "CRM Integration",
    "Data Processing",
    "Social Media",
    "E-commerce",
    "Analytics",
    "Marketing",
    "Sales",
    "Support",
    "Development",
];

const SAMPLE_NODE_TYPES: [&str; 5] = [
    "n8n-nodes-base.webhook",
    "n8n-nodes-base.httpRequest",
    "n8n-nodes-base.function",
    "n8n-nodes-base.emailSend",
    "n8n-nodes-base.postgres",
];

/// 2024-01-01T00:00:00Z
const SAMPLE_EPOCH_SECS: i64 = 1_704_067_200;

/// Build the sample catalog
pub fn sample_workflows() -> Vec<WorkflowRecord> {
    let epoch = DateTime::<Utc>::from_timestamp(SAMPLE_EPOCH_SECS, 0).unwrap_or_default();
    let stamp = |at: DateTime<Utc>| at.to_rfc3339_opts(SecondsFormat::Secs, true);

    (1..=SAMPLE_SIZE)
        .map(|i| {
            let category = SAMPLE_CATEGORIES[(i as usize) % SAMPLE_CATEGORIES.len()];
            let node_count = 3 + ((i * 7) % 20) as u32;
            let node_types = SAMPLE_NODE_TYPES[..1 + (i as usize) % SAMPLE_NODE_TYPES.len()]
                .iter()
                .map(|t| t.to_string())
                .collect();
            let creator = (i * 37) % 100;
            let lowered = category.to_lowercase();

            WorkflowRecord {
                id: i,
                url: format!("https://n8n.io/workflows/{}", i),
                slug: format!("workflow-{}", i),
                title: format!("{} Workflow {}", category, i),
                description: format!("Automate your {} tasks with this powerful workflow.", lowered),
                full_description: Some(format!(
                    "Automate your {} tasks with this powerful workflow. Connect multiple \
                     services and streamline your processes.",
                    lowered
                )),
                categories: vec![category.to_string()],
                node_types,
                creator: Some(format!("User {}", creator)),
                creator_username: Some(format!("user{}", creator)),
                published_date: Some(stamp(epoch - Duration::days(i as i64 * 3))),
                updated_date: Some(stamp(epoch - Duration::days(i as i64 % 30))),
                node_count,
                status: "completed".to_string(),
                scraped_at: stamp(epoch),
                updated_at: stamp(epoch),
                extra: Default::default(),
            }
        })
        .collect()
}
