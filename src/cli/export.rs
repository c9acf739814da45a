//! Export subcommand implementation.
//!
//! Handles `racetable export <id>` for writing a snapshot out as a file.

use super::{Context, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::store::ResultsStore;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Export a saved snapshot.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Snapshot ID or prefix to export
    ///
    /// Can be a full UUID or the first few characters (short ID).
    #[arg(value_name = "SNAPSHOT_ID")]
    pub snapshot_id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(&self, ctx: &Context, store: &mut ResultsStore) -> CliResult<()> {
        let snapshot = ctx.snapshots()?.resolve(&self.snapshot_id)?;
        snapshot.restore_into(store);

        let content = output::render_results(store, self.format, ctx.settings.max_cell_width)
            .map_err(|e| CliError::Output(e.to_string()))?;

        if let Some(ref path) = self.output_file {
            fs::write(path, &content)
                .map_err(|e| CliError::Output(format!("failed to write {}: {}", path.display(), e)))?;

            if !ctx.quiet {
                output::print_success(&format!(
                    "Exported snapshot {} to {}",
                    snapshot.id.short(),
                    path.display()
                ));
            }
        } else {
            print!("{}", content);
        }

        Ok(())
    }
}
