//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `racetable import <file>` - Load a results table and snapshot it
//! - `racetable show <id>` - Print a saved snapshot
//! - `racetable export <id>` - Export a snapshot to a file or stdout
//! - `racetable history` - List and prune snapshots
//! - `racetable config` - Show or write settings

mod config;
mod export;
mod history;
mod import;
mod show;

pub use config::ConfigCommand;
pub use export::ExportCommand;
pub use history::HistoryCommand;
pub use import::ImportCommand;
pub use show::ShowCommand;

use crate::config::{AppSettings, Paths};
use crate::error::CliResult;
use crate::storage::SnapshotStore;
use crate::store::ResultsStore;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// racetable - keep race classification tables as data.
///
/// Imports results tables from CSV or JSON, keeps every import as a
/// snapshot, and renders them as text, JSON, or CSV.
#[derive(Parser, Debug)]
#[command(name = "racetable")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Store, inspect and export race results tables", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep configuration and snapshots under this directory
    #[arg(long, global = true, value_name = "DIR", env = "RACETABLE_HOME")]
    pub data_dir: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a results table from a CSV or JSON file
    #[command(alias = "i")]
    Import(ImportCommand),

    /// Show a saved snapshot
    #[command(alias = "s")]
    Show(ShowCommand),

    /// Export a saved snapshot
    #[command(alias = "e")]
    Export(ExportCommand),

    /// View and manage snapshot history
    #[command(alias = "h")]
    History(HistoryCommand),

    /// Show the effective settings or write them to the settings file
    #[command(alias = "c")]
    Config(ConfigCommand),
}

/// Output format for results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Plain,
    /// JSON state document
    Json,
    /// CSV with a header row
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Everything a command needs besides its own arguments.
#[derive(Debug)]
pub struct Context {
    pub paths: Paths,
    pub settings: AppSettings,
    pub verbose: bool,
    pub quiet: bool,
}

impl Context {
    pub fn snapshots(&self) -> CliResult<SnapshotStore> {
        Ok(SnapshotStore::open(self.paths.snapshots_dir())?)
    }
}

impl Cli {
    /// Resolve paths and settings, then run the selected command against `store`.
    pub fn run(self, store: &mut ResultsStore) -> CliResult<()> {
        let paths = match &self.data_dir {
            Some(root) => Paths::from_root(root),
            None => Paths::discover()?,
        };
        paths.ensure()?;

        let settings = match &self.config {
            Some(file) => AppSettings::load_from(file)?,
            None => AppSettings::load(&paths)?,
        };
        debug!(?paths, ?settings, "resolved configuration");

        let ctx = Context {
            paths,
            settings,
            verbose: self.verbose,
            quiet: self.quiet,
        };

        match self.command {
            Commands::Import(cmd) => cmd.execute(&ctx, store),
            Commands::Show(cmd) => cmd.execute(&ctx, store),
            Commands::Export(cmd) => cmd.execute(&ctx, store),
            Commands::History(cmd) => cmd.execute(&ctx),
            Commands::Config(cmd) => cmd.execute(&ctx),
        }
    }
}
