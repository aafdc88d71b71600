//! CLI command implementations.

pub mod apply;
pub mod check;
pub mod config;
pub mod list;

use clap::{Args, Subcommand};

/// Arguments for the apply command.
#[derive(Args)]
pub struct ApplyArgs {
    /// Path to the brand module (default: from config, then src/data/brands.ts).
    #[arg(short, long)]
    pub file: Option<String>,

    /// Compute the result without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// Keep a copy of the current file as <file>.bak.
    #[arg(long)]
    pub backup: bool,

    /// Skip the insertion instead of failing when the anchor is missing.
    #[arg(long)]
    pub allow_missing_anchor: bool,

    /// Timestamp to write into updatedAt (RFC 3339).
    #[arg(long)]
    pub updated_at: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Path to the brand module.
    #[arg(short, long)]
    pub file: Option<String>,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Show only products with this tag.
    #[arg(short, long)]
    pub tag: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
