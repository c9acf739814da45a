//! History subcommand implementation.

use super::Context;
use crate::error::CliResult;
use crate::output;
use clap::Parser;
use console::style;

/// View and manage snapshot history.
#[derive(Parser, Debug)]
pub struct HistoryCommand {
    /// Number of recent snapshots to show
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Show storage statistics
    #[arg(short, long)]
    pub detailed: bool,

    /// Delete one snapshot (ID or prefix)
    #[arg(long, value_name = "SNAPSHOT_ID")]
    pub delete: Option<String>,

    /// Delete snapshots older than N days
    #[arg(long, value_name = "DAYS")]
    pub prune: Option<u32>,

    /// Clear all snapshot history
    #[arg(long)]
    pub clear: bool,
}

impl HistoryCommand {
    /// Execute the history command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let snapshots = ctx.snapshots()?;

        if self.clear {
            let removed = snapshots.clear()?;
            if !ctx.quiet {
                output::print_success(&format!("Removed {} snapshots", removed));
            }
            return Ok(());
        }

        if let Some(target) = &self.delete {
            let snapshot = snapshots.resolve(target)?;
            snapshots.delete(&snapshot.id)?;
            if !ctx.quiet {
                output::print_success(&format!("Deleted snapshot {}", snapshot.id.short()));
            }
            return Ok(());
        }

        if let Some(days) = self.prune {
            let removed = snapshots.cleanup(chrono::Duration::days(i64::from(days)))?;
            if !ctx.quiet {
                output::print_success(&format!(
                    "Removed {} snapshots older than {} days",
                    removed, days
                ));
            }
            return Ok(());
        }

        let recent = snapshots.list_recent(self.count)?;
        if recent.is_empty() {
            if !ctx.quiet {
                println!("No snapshots found.");
            }
            return Ok(());
        }

        if !ctx.quiet {
            println!("\n{:<10} {:>6}  {:<20} {}", "ID", "ROWS", "SAVED", "SOURCE");
            println!("{}", "-".repeat(70));
        }

        for snapshot in &recent {
            println!(
                "{:<10} {:>6}  {:<20} {}",
                snapshot.id.short(),
                snapshot.row_count,
                snapshot.saved_at.format("%Y-%m-%d %H:%M:%S"),
                snapshot.source
            );
        }

        if self.detailed {
            let stats = snapshots.stats()?;
            println!();
            println!("{} {}", style("Snapshots:").bold(), stats.snapshot_count);
            println!("{} {}", style("Rows:").bold(), stats.total_rows);
            println!("{} {} bytes", style("Size:").bold(), stats.total_size_bytes);
            if let (Some(oldest), Some(newest)) = (stats.oldest, stats.newest) {
                println!("{} {} .. {}", style("Range:").bold(), oldest, newest);
            }
            println!("{} {}", style("Directory:").bold(), snapshots.dir().display());
        }

        if !ctx.quiet {
            println!();
        }

        Ok(())
    }
}
