//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::ConfigOverrides;

/// AUX MCP server - PDF documents, domain lookups and prompt templates over MCP
#[derive(Debug, Parser)]
#[command(name = "aux-mcp-server")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the AUX MCP server
    Start(StartArgs),
}

/// Options of the `start` command.
///
/// Flags left out fall through to the environment and then the defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct StartArgs {
    /// Directory containing PDF files
    #[arg(short = 'd', long)]
    pub pdf_directory: Option<PathBuf>,

    /// Server name
    #[arg(short = 'n', long)]
    pub name: Option<String>,
}

impl StartArgs {
    /// The explicit configuration layer carried by these flags.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            document_directory: self.pdf_directory.clone(),
            server_name: self.name.clone(),
            ..ConfigOverrides::default()
        }
    }
}
