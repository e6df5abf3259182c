//! Workflow command handlers
//!
//! Queries a running catalog server: search, detail, category counts,
//! raw file download and catalog status.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use neuraledge_client::CatalogClient;
use neuraledge_core::dto::workflow::{ListWorkflows, WorkflowView};

use crate::config::Config;

/// Workflow subcommands
#[derive(Subcommand)]
pub enum WorkflowCommands {
    /// Search the catalog
    List {
        /// Free-text query
        #[arg(short, long)]
        query: Option<String>,

        /// Category filter ("all" for none)
        #[arg(long)]
        category: Option<String>,

        /// Complexity filter: simple, intermediate, advanced
        #[arg(long)]
        complexity: Option<String>,

        /// Page number
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,

        /// Workflows per page
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Show a workflow and its related workflows
    Get {
        /// Workflow ID
        id: String,
    },
    /// Show category counts
    Categories,
    /// Download the raw workflow file
    Download {
        /// Workflow ID
        id: String,

        /// Write to this file instead of standard output
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show which catalog the server is answering from
    Status,
}

/// Handle workflow commands
pub async fn handle_workflow_command(command: WorkflowCommands, config: &Config) -> Result<()> {
    let client = CatalogClient::new(&config.server_url);

    match command {
        WorkflowCommands::List {
            query,
            category,
            complexity,
            page,
            page_size,
        } => {
            let params = ListWorkflows {
                q: query,
                category,
                complexity,
                page,
                page_size,
                categories: None,
            };
            list_workflows(&client, &params).await
        }
        WorkflowCommands::Get { id } => get_workflow(&client, &id).await,
        WorkflowCommands::Categories => list_categories(&client).await,
        WorkflowCommands::Download { id, output } => {
            download_workflow(&client, &id, output.as_deref()).await
        }
        WorkflowCommands::Status => show_status(&client).await,
    }
}

/// Search and print one page
async fn list_workflows(client: &CatalogClient, params: &ListWorkflows) -> Result<()> {
    let page = client.list_workflows(params).await?;

    if page.workflows.is_empty() {
        println!("{}", "No workflows found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Found {} workflow(s), page {}/{}:",
            page.total_count, page.current_page, page.total_pages
        )
        .bold()
    );
    println!();
    for workflow in &page.workflows {
        print_workflow_summary(workflow);
    }

    Ok(())
}

/// Print a workflow with its related workflows
async fn get_workflow(client: &CatalogClient, id: &str) -> Result<()> {
    let detail = client
        .get_workflow(id)
        .await
        .with_context(|| format!("Failed to fetch workflow {}", id))?;

    print_workflow_details(&detail.workflow);

    if !detail.related_workflows.is_empty() {
        println!("\n{}", "Related:".bold());
        for related in &detail.related_workflows {
            print_workflow_summary(related);
        }
    }

    Ok(())
}

/// Print category counts
async fn list_categories(client: &CatalogClient) -> Result<()> {
    let categories = client.categories().await?;

    if categories.is_empty() {
        println!("{}", "No categories found.".yellow());
        return Ok(());
    }

    println!("{}", format!("{} categories:", categories.len()).bold());
    for category in categories {
        println!("  {} {}", format!("{:>6}", category.count).cyan(), category.name);
    }

    Ok(())
}

/// Print or save the raw workflow file
async fn download_workflow(client: &CatalogClient, id: &str, output: Option<&str>) -> Result<()> {
    let contents = client
        .download_workflow(id)
        .await
        .with_context(|| format!("Failed to download workflow {}", id))?;

    match output {
        Some(path) => {
            std::fs::write(path, &contents).with_context(|| format!("Failed to write {}", path))?;
            println!(
                "{}",
                format!("✓ Workflow {} saved to {}", id, path).green().bold()
            );
        }
        None => println!("{}", contents),
    }

    Ok(())
}

/// Print catalog origin and size
async fn show_status(client: &CatalogClient) -> Result<()> {
    let status = client.catalog_status().await?;

    println!("{}", "Catalog Status:".bold());
    println!("  Source:  {}", status.source.to_string().cyan());
    println!("  Records: {}", status.record_count);
    println!(
        "  Loaded:  {}",
        status.loaded_at.format("%Y-%m-%d %H:%M:%S")
    );

    if !status.source.is_real_data() {
        println!(
            "{}",
            "  No catalog file is readable; the server is serving sample data.".yellow()
        );
    }

    Ok(())
}

/// Print a workflow summary
fn print_workflow_summary(workflow: &WorkflowView) {
    let record = &workflow.record;
    println!("  {} {}", "▸".cyan(), record.title.bold());
    println!("    ID:         {}", record.id.to_string().dimmed());
    println!("    Complexity: {}", workflow.complexity.to_string().dimmed());
    if !record.categories.is_empty() {
        println!("    Categories: {}", record.categories.join(", ").dimmed());
    }
    println!();
}

/// Print detailed workflow information
fn print_workflow_details(workflow: &WorkflowView) {
    let record = &workflow.record;

    println!("{}", "Workflow Details:".bold());
    println!("  ID:           {}", record.id.to_string().cyan());
    println!("  Title:        {}", record.title.bold());
    if !record.url.is_empty() {
        println!("  URL:          {}", record.url);
    }
    if let Some(creator) = &record.creator {
        println!("  Creator:      {}", creator);
    }
    println!("  Nodes:        {}", record.node_count);
    println!("  Complexity:   {}", workflow.complexity);
    if !record.categories.is_empty() {
        println!("  Categories:   {}", record.categories.join(", "));
    }
    if !workflow.integrations.is_empty() {
        println!("  Integrations: {}", workflow.integrations.join(", "));
    }

    if !record.description.is_empty() {
        println!("\n{}", "Description:".bold());
        println!("{}", "─".repeat(80).dimmed());
        println!("{}", record.description);
        println!("{}", "─".repeat(80).dimmed());
    }
}
