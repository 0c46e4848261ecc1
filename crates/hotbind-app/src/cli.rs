use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// hotbind: edit and apply global hotkey settings.
#[derive(Parser, Debug)]
#[command(name = "hotbind", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the stored bindings.
    Show {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Open the settings panel in an interactive shell (default).
    Edit,
}

pub fn parse() -> Args {
    Args::parse()
}
