//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `idforge`.
#[derive(Debug, Parser)]
#[command(name = "idforge", version, about = "Configure and issue custom inventory item IDs")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an inventory with no custom ID format.
    Init {
        /// Inventory id (letters, digits, '-' or '_').
        inventory: String,
        /// Display title; defaults to the id.
        #[arg(long)]
        title: Option<String>,
    },
    /// Replace an inventory's custom ID format from a YAML or JSON file.
    SetFormat {
        /// Inventory id.
        inventory: String,
        /// Format document to apply.
        file: PathBuf,
        /// Version the edit is based on (see `idforge show <INVENTORY>`).
        #[arg(long)]
        expected_version: u64,
    },
    /// Check a format document without storing it.
    Validate {
        /// Format document to check.
        file: PathBuf,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Render one identifier from a format document without storing anything.
    Preview {
        /// Format document to render.
        file: PathBuf,
    },
    /// Issue identifiers for new items and advance the inventory's counter.
    Next {
        /// Inventory id.
        inventory: String,
        /// How many identifiers to issue (1 to 1000).
        #[arg(
            long,
            short = 'n',
            default_value_t = 1,
            value_parser = clap::value_parser!(u16).range(1..=1000)
        )]
        count: u16,
    },
    /// List inventories, or show one inventory's record.
    Show {
        /// Inventory id; omit to list all.
        inventory: Option<String>,
    },
}
