//! NeuralEdge CLI
//!
//! Command-line interface for querying a NeuralEdge catalog server and for
//! maintaining catalog files offline.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "neuraledge")]
#[command(about = "NeuralEdge workflow catalog CLI", long_about = None)]
struct Cli {
    /// Catalog server URL
    #[arg(
        long,
        env = "NEURALEDGE_SERVER_URL",
        default_value = "http://localhost:8080"
    )]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        server_url: cli.server_url,
    };

    handle_command(cli.command, &config).await
}
