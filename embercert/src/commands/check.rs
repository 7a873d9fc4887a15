use std::path::PathBuf;

use clap::Args;
use embercert_codegen::config::DEFAULT_OUTPUT_HEADER;
use eyre::Result;

#[derive(Args)]
pub struct CheckCommand {
    /// Path of the generated header
    #[arg(short, long, default_value = DEFAULT_OUTPUT_HEADER)]
    pub output: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        match std::fs::metadata(&self.output) {
            Ok(meta) => {
                println!("✓ {} ({} bytes)", self.output.display(), meta.len());
                Ok(())
            }
            Err(_) => {
                eprintln!("✗ {} is missing", self.output.display());
                eprintln!("  run 'embercert generate' to create it");
                std::process::exit(1);
            }
        }
    }
}
