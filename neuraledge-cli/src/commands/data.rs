//! Data command handlers
//!
//! Offline maintenance of catalog JSON files. Every command that rewrites a
//! file first copies it next to itself, then writes the result as
//! pretty-printed JSON, then prints a report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use neuraledge_catalog::maintenance::{self, RawRecord};
use neuraledge_core::domain::category::CategoryCount;

/// How many records with duplicate categories `check` lists
const LISTED_DUPLICATES: usize = 5;

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Report category problems without changing the file
    Check {
        /// Catalog file
        file: PathBuf,
    },
    /// Remove repeated category labels within each workflow
    DedupeCategories {
        /// Catalog file
        file: PathBuf,
    },
    /// Keep only the first workflow for each title
    DedupeTitles {
        /// Catalog file
        file: PathBuf,
    },
    /// Remove the given category labels from every workflow
    StripCategories {
        /// Catalog file
        file: PathBuf,

        /// Labels to remove (comma-separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        category: Vec<String>,
    },
}

/// Handle data commands
pub fn handle_data_command(command: DataCommands) -> Result<()> {
    match command {
        DataCommands::Check { file } => check(&file),
        DataCommands::DedupeCategories { file } => dedupe_categories(&file),
        DataCommands::DedupeTitles { file } => dedupe_titles(&file),
        DataCommands::StripCategories { file, category } => strip_categories(&file, &category),
    }
}

fn check(file: &Path) -> Result<()> {
    let records = read_catalog(file)?;
    let report = maintenance::inspect(&records);

    println!("{}", format!("Total workflows: {}", report.total).bold());

    println!("\n{}", format!("Top {} categories:", maintenance::REPORT_TOP).bold());
    print_counts(&report.top_categories);

    if !report.case_conflicts.is_empty() {
        println!("\n{}", "Category names differing only by case:".yellow());
        for (first, second) in &report.case_conflicts {
            println!("  - \"{}\" and \"{}\"", first, second);
        }
    }

    if report.duplicate_categories.is_empty() {
        println!("\n{}", "✓ No workflows with duplicate categories".green().bold());
    } else {
        println!(
            "\n{}",
            format!(
                "Workflows with duplicate categories: {}",
                report.duplicate_categories.len()
            )
            .yellow()
        );
        for dup in report.duplicate_categories.iter().take(LISTED_DUPLICATES) {
            println!("  {} {} {}", "▸".cyan(), dup.id.dimmed(), dup.title.bold());
            println!("    Categories: {}", dup.categories.join(", ").dimmed());
        }
    }

    Ok(())
}

fn dedupe_categories(file: &Path) -> Result<()> {
    let mut records = read_catalog(file)?;
    let backup = backup_catalog(file, "categories-backup")?;

    let report = maintenance::dedupe_categories(&mut records);
    write_catalog(file, &records)?;

    println!("  Backup: {}", backup.display().to_string().dimmed());
    println!(
        "{}",
        format!("✓ Fixed {} workflow(s) with duplicate categories", report.fixed.len())
            .green()
            .bold()
    );

    Ok(())
}

fn dedupe_titles(file: &Path) -> Result<()> {
    let records = read_catalog(file)?;
    let backup = backup_catalog(file, "backup")?;

    let (kept, report) = maintenance::dedupe_titles(records);
    write_catalog(file, &kept)?;

    println!("  Backup: {}", backup.display().to_string().dimmed());

    if !report.top_duplicates.is_empty() {
        println!("\n{}", "Most duplicated titles:".bold());
        for (title, extra) in &report.top_duplicates {
            println!("  {} {} ({} extra)", "▸".cyan(), title, extra);
        }
    }

    println!(
        "\n{}",
        format!(
            "✓ Removed {} duplicate(s): {} → {} workflows",
            report.removed(),
            report.before,
            report.after
        )
        .green()
        .bold()
    );

    Ok(())
}

fn strip_categories(file: &Path, labels: &[String]) -> Result<()> {
    let mut records = read_catalog(file)?;
    let backup = backup_catalog(file, "pre-category-fix")?;

    let report = maintenance::strip_categories(&mut records, labels);
    write_catalog(file, &records)?;

    println!("  Backup: {}", backup.display().to_string().dimmed());
    println!(
        "{}",
        format!(
            "✓ Removed {} label(s) from {} workflow(s)",
            report.labels_removed, report.records_fixed
        )
        .green()
        .bold()
    );

    println!("\n{}", format!("Top {} categories now:", maintenance::REPORT_TOP).bold());
    print_counts(&report.top_categories);

    if report.without_categories > 0 {
        println!(
            "\n{}",
            format!("{} workflow(s) have no categories left", report.without_categories).yellow()
        );
    }

    Ok(())
}

fn print_counts(counts: &[CategoryCount]) {
    for count in counts {
        println!("  {}: {} workflows", count.name, count.count);
    }
}

// =============================================================================
// File Handling
// =============================================================================

fn read_catalog(file: &Path) -> Result<Vec<RawRecord>> {
    let bytes =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;

    serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a JSON array of workflow objects", file.display()))
}

fn write_catalog(file: &Path, records: &[RawRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(file, json).with_context(|| format!("Failed to write {}", file.display()))
}

/// Copy `file` to its backup location and return that path
fn backup_catalog(file: &Path, label: &str) -> Result<PathBuf> {
    let backup = backup_path(file, label);
    std::fs::copy(file, &backup)
        .with_context(|| format!("Failed to write backup {}", backup.display()))?;
    Ok(backup)
}

/// `data/workflows.json` with label `backup` becomes `data/workflows.backup.json`
fn backup_path(file: &Path, label: &str) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());

    file.with_file_name(format!("{}.{}.json", stem, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("data/workflows.json"), "backup"),
            PathBuf::from("data/workflows.backup.json")
        );
        assert_eq!(
            backup_path(Path::new("workflows.json"), "pre-category-fix"),
            PathBuf::from("workflows.pre-category-fix.json")
        );
    }

    #[test]
    fn test_dedupe_categories_rewrites_file_and_keeps_backup() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("workflows.json");
        let original = r#"[{"id": 1, "title": "A", "categories": ["Sales", "Sales"], "views": 7}]"#;
        std::fs::write(&file, original).unwrap();

        dedupe_categories(&file).unwrap();

        let backup = dir.path().join("workflows.categories-backup.json");
        assert_eq!(std::fs::read_to_string(backup).unwrap(), original);

        let rewritten: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(rewritten[0]["categories"], serde_json::json!(["Sales"]));
        assert_eq!(rewritten[0]["views"], 7);
    }

    #[test]
    fn test_strip_categories_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("workflows.json");
        std::fs::write(
            &file,
            r#"[{"id": 1, "title": "A", "categories": ["Utility", "Finance"]}]"#,
        )
        .unwrap();

        strip_categories(&file, &["Utility".to_string()]).unwrap();

        let records = read_catalog(&file).unwrap();
        assert_eq!(records[0]["categories"], serde_json::json!(["Finance"]));
        assert!(dir.path().join("workflows.pre-category-fix.json").exists());
    }

    #[test]
    fn test_rewrite_keeps_sparse_records_as_they_were() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("workflows.json");
        std::fs::write(
            &file,
            r#"[{"id": 1, "title": "A", "categories": null, "zeta": 1, "alpha": 2},
                {"id": 2, "title": "B", "categories": ["X", "X"]}]"#,
        )
        .unwrap();

        dedupe_categories(&file).unwrap();

        let rewritten = std::fs::read_to_string(&file).unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(
            records[0],
            serde_json::json!({"id": 1, "title": "A", "categories": null, "zeta": 1, "alpha": 2})
        );
        assert_eq!(records[1]["categories"], serde_json::json!(["X"]));
        assert!(rewritten.find("\"zeta\"").unwrap() < rewritten.find("\"alpha\"").unwrap());
    }

    #[test]
    fn test_read_catalog_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("workflows.json");
        std::fs::write(&file, r#"{"id": 1}"#).unwrap();
        assert!(read_catalog(&file).is_err());
    }
}
