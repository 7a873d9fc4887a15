use std::path::PathBuf;

use clap::Args;
use embercert_codegen::config::DEFAULT_OUTPUT_HEADER;
use eyre::{Context, Result};

#[derive(Args)]
pub struct CleanCommand {
    /// Path of the generated header
    #[arg(short, long, default_value = DEFAULT_OUTPUT_HEADER)]
    pub output: PathBuf,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    /// Run the clean command
    pub fn run(&self) -> Result<()> {
        if !self.output.exists() {
            println!("Nothing to clean: {} does not exist", self.output.display());
            return Ok(());
        }

        if self.dry_run {
            println!("Would remove {}", self.output.display());
            return Ok(());
        }

        std::fs::remove_file(&self.output)
            .wrap_err_with(|| format!("Failed to remove {}", self.output.display()))?;
        println!("Removed {}", self.output.display());
        println!("The next 'embercert generate' will fetch a fresh certificate");

        Ok(())
    }
}
