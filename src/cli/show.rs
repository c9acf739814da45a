//! Show subcommand implementation.

use super::{Context, OutputFormat};
use crate::error::CliResult;
use crate::output;
use crate::store::ResultsStore;
use clap::Parser;
use console::style;

/// Show a saved snapshot.
#[derive(Parser, Debug)]
pub struct ShowCommand {
    /// Snapshot ID or prefix
    #[arg(value_name = "SNAPSHOT_ID")]
    pub snapshot_id: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(&self, ctx: &Context, store: &mut ResultsStore) -> CliResult<()> {
        let snapshot = ctx.snapshots()?.resolve(&self.snapshot_id)?;
        snapshot.restore_into(store);

        let format = self.output.unwrap_or(ctx.settings.default_format);
        if !ctx.quiet && format == OutputFormat::Plain {
            println!("{} {}", style("Snapshot:").bold(), snapshot.id);
            println!("{} {}", style("Source:").bold(), snapshot.source);
            println!("{} {}", style("Saved:").bold(), snapshot.saved_at);
            println!();
        }

        output::print_results(store, format, ctx.settings.max_cell_width)?;
        Ok(())
    }
}
