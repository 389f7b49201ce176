//! CLI module for Hitlog
//!
//! Provides commands:
//! - `serve`: Start the HTTP server (default)
//! - `summary`: Summarize the configured event log once and print JSON
//! - `doctor`: Configuration and log diagnostics

use clap::{Parser, Subcommand};

pub mod doctor;
pub mod summary;

/// Hitlog CLI
#[derive(Parser, Debug)]
#[command(name = "hitlog")]
#[command(about = "Request logging with AI-generated log summaries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the server (default)
    Serve,
    /// Summarize the event log and print the result
    Summary,
    /// Run configuration diagnostics
    Doctor,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Summary) => summary::run().await,
        Some(Commands::Doctor) => doctor::run().await,
        Some(Commands::Serve) | None => crate::server::run().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["hitlog"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_summary_subcommand() {
        let cli = Cli::try_parse_from(["hitlog", "summary"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Summary)));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["hitlog", "init"]).is_err());
    }
}
