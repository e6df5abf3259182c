//! Record normalization
//!
//! Derives the secondary attributes of a workflow record: its complexity
//! tier, its category list and the human-readable integrations hidden in its
//! raw node type identifiers. All functions are pure.

use std::borrow::Cow;
use std::sync::LazyLock;

use neuraledge_core::domain::workflow::{Complexity, WorkflowRecord};
use neuraledge_core::dto::workflow::WorkflowView;
use regex::Regex;

/// Maximum number of integrations reported per record
pub const MAX_INTEGRATIONS: usize = 10;

/// Keywords scanned in the description of records that carry no categories
const FALLBACK_CATEGORIES: [&str; 20] = [
    "email",
    "automation",
    "api",
    "database",
    "webhook",
    "notification",
    "integration",
    "data",
    "crm",
    "marketing",
    "sales",
    "support",
    "analytics",
    "social media",
    "e-commerce",
    "productivity",
    "communication",
    "finance",
    "hr",
    "development",
];

/// Service keywords recognized inside node type identifiers
const KNOWN_SERVICES: [&str; 51] = [
    "webhook",
    "http",
    "api",
    "email",
    "slack",
    "discord",
    "telegram",
    "twitter",
    "facebook",
    "google",
    "github",
    "gitlab",
    "jira",
    "trello",
    "asana",
    "notion",
    "airtable",
    "salesforce",
    "hubspot",
    "mailchimp",
    "sendgrid",
    "twilio",
    "stripe",
    "paypal",
    "shopify",
    "woocommerce",
    "wordpress",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "aws",
    "s3",
    "lambda",
    "sqs",
    "sns",
    "azure",
    "gcp",
    "sheets",
    "calendar",
    "drive",
    "gmail",
    "outlook",
    "zoom",
    "teams",
    "dropbox",
    "box",
    "ftp",
    "ssh",
    "sftp",
];

/// Flow-control nodes that never name an integration (compared lowercase)
const GENERIC_NODES: [&str; 13] = [
    "set",
    "if",
    "switch",
    "loop",
    "function",
    "code",
    "merge",
    "split",
    "wait",
    "start",
    "stop",
    "noop",
    "stickynote",
];

/// Display names for keywords that are not simply capitalized
const DISPLAY_OVERRIDES: [(&str, &str); 17] = [
    ("http", "HTTP"),
    ("api", "API"),
    ("aws", "AWS"),
    ("s3", "S3"),
    ("sqs", "SQS"),
    ("sns", "SNS"),
    ("gcp", "GCP"),
    ("ftp", "FTP"),
    ("ssh", "SSH"),
    ("sftp", "SFTP"),
    ("mongodb", "MongoDB"),
    ("postgresql", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("hubspot", "HubSpot"),
    ("sendgrid", "SendGrid"),
    ("woocommerce", "WooCommerce"),
    ("wordpress", "WordPress"),
];

/// `n8n-nodes-base.<service>`
static NAMESPACED_NODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)n8n-nodes-base\.([a-z0-9]+)").expect("valid regex")
});

/// `@n8n/<service>` or `n8n-nodes-<service>.`
static PACKAGE_NODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)@n8n/([a-z0-9]+)|n8n-nodes-([a-z0-9]+)\.").expect("valid regex")
});

/// Complexity tier of a record, from its node count
pub fn complexity(record: &WorkflowRecord) -> Complexity {
    Complexity::from_node_count(record.node_count)
}

/// Category labels of a record
///
/// A non-empty stored list is returned as is, duplicates included. Records
/// without categories fall back to the generic keywords found in their short
/// description, each at most once.
pub fn categories(record: &WorkflowRecord) -> Cow<'_, [String]> {
    if !record.categories.is_empty() {
        return Cow::Borrowed(record.categories.as_slice());
    }

    let description = record.description.to_lowercase();
    let found = FALLBACK_CATEGORIES
        .iter()
        .filter(|keyword| description.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    Cow::Owned(found)
}

/// Human-readable integrations inferred from a record's node types
///
/// Deterministic and order-preserving: names appear in the order they are
/// first seen, without duplicates, capped at [`MAX_INTEGRATIONS`].
pub fn integrations(record: &WorkflowRecord) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut push = |name: String| {
        if !found.contains(&name) {
            found.push(name);
        }
    };

    for node_type in &record.node_types {
        if let Some(caps) = NAMESPACED_NODE.captures(node_type) {
            let service = caps[1].to_lowercase();

            if !GENERIC_NODES.contains(&service.as_str()) {
                match match_known_service(&service) {
                    Some(keyword) => push(display_name(keyword)),
                    // Unknown services stay visible under their own name
                    None => push(capitalize(&service)),
                }
            }
        }

        if let Some(caps) = PACKAGE_NODE.captures(node_type) {
            let service = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_lowercase())
                .unwrap_or_default();

            if let Some(keyword) = match_known_service(&service) {
                push(display_name(keyword));
            }
        }

        let lower = node_type.to_lowercase();
        for keyword in KNOWN_SERVICES {
            if lower.contains(keyword) {
                push(display_name(keyword));
            }
        }
    }

    found.truncate(MAX_INTEGRATIONS);
    found
}

/// Build the wire view of a record with its derived attributes
///
/// Stored values under the derived field names are dropped so they cannot
/// shadow the computed ones.
pub fn view(record: &WorkflowRecord) -> WorkflowView {
    let mut stored = record.clone();
    stored.extra.remove("complexity");
    stored.extra.remove("integrations");

    WorkflowView {
        record: stored,
        complexity: complexity(record),
        integrations: integrations(record),
    }
}

fn match_known_service(service: &str) -> Option<&'static str> {
    if service.is_empty() {
        return None;
    }

    KNOWN_SERVICES
        .iter()
        .copied()
        .find(|keyword| service.contains(keyword) || keyword.contains(service))
}

fn display_name(keyword: &str) -> String {
    DISPLAY_OVERRIDES
        .iter()
        .find(|(key, _)| *key == keyword)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| capitalize(keyword))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_nodes(node_types: &[&str]) -> WorkflowRecord {
        WorkflowRecord {
            id: 1,
            url: String::new(),
            slug: String::new(),
            title: "Test".to_string(),
            description: String::new(),
            full_description: None,
            categories: vec![],
            node_types: node_types.iter().map(|s| s.to_string()).collect(),
            creator: None,
            creator_username: None,
            published_date: None,
            updated_date: None,
            node_count: 0,
            status: "completed".to_string(),
            scraped_at: String::new(),
            updated_at: String::new(),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_complexity_follows_node_count() {
        let mut record = record_with_nodes(&[]);
        record.node_count = 5;
        assert_eq!(complexity(&record), Complexity::Simple);
        record.node_count = 6;
        assert_eq!(complexity(&record), Complexity::Intermediate);
        record.node_count = 16;
        assert_eq!(complexity(&record), Complexity::Advanced);
    }

    #[test]
    fn test_stored_categories_returned_verbatim() {
        let mut record = record_with_nodes(&[]);
        record.categories = vec!["Sales".to_string(), "Sales".to_string(), "CRM".to_string()];
        record.description = "email marketing".to_string();

        let cats = categories(&record);
        assert!(matches!(cats, Cow::Borrowed(_)));
        assert_eq!(cats.as_ref(), ["Sales", "Sales", "CRM"]);
    }

    #[test]
    fn test_fallback_categories_from_description() {
        let mut record = record_with_nodes(&[]);
        record.description = "Send an Email to your CRM when the webhook fires. Email again.".to_string();

        let cats = categories(&record);
        assert_eq!(cats.as_ref(), ["email", "webhook", "crm"]);
    }

    #[test]
    fn test_no_categories_and_no_keywords() {
        let mut record = record_with_nodes(&[]);
        record.description = "Nothing to see".to_string();
        assert!(categories(&record).is_empty());
    }

    #[test]
    fn test_slack_and_http_request() {
        let record = record_with_nodes(&["n8n-nodes-base.slack", "n8n-nodes-base.httpRequest"]);
        assert_eq!(integrations(&record), vec!["Slack", "HTTP"]);
    }

    #[test]
    fn test_generic_nodes_are_skipped() {
        let record = record_with_nodes(&[
            "n8n-nodes-base.if",
            "n8n-nodes-base.set",
            "n8n-nodes-base.noOp",
            "n8n-nodes-base.stickyNote",
        ]);
        assert!(integrations(&record).is_empty());
    }

    #[test]
    fn test_unknown_service_surfaces_capitalized() {
        let record = record_with_nodes(&["n8n-nodes-base.clickUp"]);
        assert_eq!(integrations(&record), vec!["Clickup"]);
    }

    #[test]
    fn test_unknown_service_spellings_merge() {
        let record = record_with_nodes(&[
            "n8n-nodes-base.clickUp",
            "n8n-nodes-base.clickup",
            "n8n-nodes-base.clickUpTrigger",
        ]);
        assert_eq!(integrations(&record), vec!["Clickup", "Clickuptrigger"]);
    }

    #[test]
    fn test_display_overrides() {
        let record = record_with_nodes(&[
            "n8n-nodes-base.postgresql",
            "n8n-nodes-base.mongoDb",
            "n8n-nodes-base.awsS3",
            "n8n-nodes-base.wooCommerce",
        ]);
        let found = integrations(&record);
        assert!(found.contains(&"PostgreSQL".to_string()));
        assert!(found.contains(&"MongoDB".to_string()));
        assert!(found.contains(&"AWS".to_string()));
        assert!(found.contains(&"S3".to_string()));
        assert!(found.contains(&"WooCommerce".to_string()));
    }

    #[test]
    fn test_package_identifier() {
        let record = record_with_nodes(&["@n8n/telegramTrigger"]);
        assert_eq!(integrations(&record), vec!["Telegram"]);
    }

    #[test]
    fn test_integrations_capped_and_deduplicated() {
        let record = record_with_nodes(&[
            "n8n-nodes-base.slack",
            "n8n-nodes-base.slack",
            "n8n-nodes-base.discord",
            "n8n-nodes-base.telegram",
            "n8n-nodes-base.github",
            "n8n-nodes-base.gitlab",
            "n8n-nodes-base.jira",
            "n8n-nodes-base.trello",
            "n8n-nodes-base.asana",
            "n8n-nodes-base.notion",
            "n8n-nodes-base.airtable",
            "n8n-nodes-base.stripe",
        ]);

        let found = integrations(&record);
        assert_eq!(found.len(), MAX_INTEGRATIONS);
        assert_eq!(found[0], "Slack");
        assert_eq!(found.iter().filter(|n| *n == "Slack").count(), 1);
    }

    #[test]
    fn test_integrations_are_deterministic() {
        let record = record_with_nodes(&[
            "n8n-nodes-base.googleSheets",
            "n8n-nodes-base.gmail",
            "n8n-nodes-base.dropbox",
        ]);
        assert_eq!(integrations(&record), integrations(&record));
    }

    #[test]
    fn test_view_carries_derived_fields() {
        let mut record = record_with_nodes(&["n8n-nodes-base.slack"]);
        record.node_count = 20;

        let view = view(&record);
        assert_eq!(view.complexity, Complexity::Advanced);
        assert_eq!(view.integrations, vec!["Slack"]);
        assert_eq!(view.record, record);
    }

    #[test]
    fn test_view_drops_stale_derived_fields() {
        let mut record = record_with_nodes(&[]);
        record.extra.insert("complexity".to_string(), "expert".into());
        record.extra.insert("views".to_string(), 3.into());

        let json = serde_json::to_value(view(&record)).unwrap();
        assert_eq!(json["complexity"], "simple");
        assert_eq!(json["views"], 3);
    }
}
