//! Config subcommand implementation.

use super::Context;
use crate::error::{CliError, CliResult};
use crate::output;
use clap::Parser;
use console::style;

/// Show the effective settings, or write them out as the settings file.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Write the effective settings to the settings file
    #[arg(long)]
    pub init: bool,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let file = ctx.paths.settings_file();

        if self.init {
            ctx.settings.save(&ctx.paths)?;
            if !ctx.quiet {
                output::print_success(&format!("Wrote settings to {}", file.display()));
            }
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&ctx.settings)
            .map_err(|e| CliError::Output(e.to_string()))?;

        if !ctx.quiet {
            println!("{} {}", style("Settings file:").bold(), file.display());
            println!("{} {}", style("Data directory:").bold(), ctx.paths.data_dir.display());
            println!();
        }
        println!("{}", json);

        Ok(())
    }
}
