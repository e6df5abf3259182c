//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod data;
mod workflows;

pub use data::DataCommands;
pub use workflows::WorkflowCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the catalog served by a running server
    Workflows {
        #[command(subcommand)]
        command: WorkflowCommands,
    },
    /// Inspect and repair catalog files on disk
    Data {
        #[command(subcommand)]
        command: DataCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Workflows { command } => {
            workflows::handle_workflow_command(command, config).await
        }
        Commands::Data { command } => data::handle_data_command(command),
    }
}
