//! Import subcommand implementation.
//!
//! Handles `racetable import <file>`: load the table, snapshot it, print it.

use super::{Context, OutputFormat};
use crate::error::CliResult;
use crate::import::{import_file, ImportFormat, ImportMode};
use crate::output;
use crate::storage::Snapshot;
use crate::store::ResultsStore;
use clap::Parser;
use std::path::PathBuf;

/// Import a results table.
#[derive(Parser, Debug)]
pub struct ImportCommand {
    /// CSV or JSON file holding the table
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Input format (detected from the extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<ImportFormat>,

    /// Add rows after the ones restored with --onto instead of replacing them
    #[arg(short, long)]
    pub append: bool,

    /// Start from an existing snapshot (ID or prefix); needs --append
    #[arg(long, value_name = "SNAPSHOT_ID", requires = "append")]
    pub onto: Option<String>,

    /// Don't save a snapshot
    #[arg(long)]
    pub no_save: bool,

    /// Output format for the imported table
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ImportCommand {
    /// Execute the import command.
    pub fn execute(&self, ctx: &Context, store: &mut ResultsStore) -> CliResult<()> {
        let snapshots = ctx.snapshots()?;

        if let Some(base) = &self.onto {
            snapshots.resolve(base)?.restore_into(store);
        }

        let mode = if self.append {
            ImportMode::Append
        } else {
            ImportMode::Replace
        };
        let count = import_file(store, &self.file, self.format, mode)?;

        let format = self.output.unwrap_or(ctx.settings.default_format);
        let chatty = !ctx.quiet && format == OutputFormat::Plain;

        if count == 0 && !ctx.quiet {
            output::print_warning(&format!("{} contains no rows", self.file.display()));
        }

        if chatty {
            output::print_success(&format!(
                "Imported {} rows from {}",
                count,
                self.file.display()
            ));
        }

        if !self.no_save && ctx.settings.auto_save {
            let snapshot = Snapshot::capture(store, self.file.display().to_string());
            snapshots.save(&snapshot)?;

            if chatty {
                output::print_info(&format!("Snapshot saved as {}", snapshot.id.short()));
            }

            if ctx.settings.retention_days > 0 {
                let max_age = chrono::Duration::days(i64::from(ctx.settings.retention_days));
                let removed = snapshots.cleanup(max_age)?;
                if removed > 0 && ctx.verbose {
                    output::print_info(&format!("Pruned {} expired snapshots", removed));
                }
            }
        }

        output::print_results(store, format, ctx.settings.max_cell_width)?;

        Ok(())
    }
}
