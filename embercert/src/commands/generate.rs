use std::path::PathBuf;

use clap::Args;
use embercert_codegen::config::{DEFAULT_CERT_URL, DEFAULT_OUTPUT_HEADER, DEFAULT_VAR_NAME};
use embercert_codegen::{CertConfig, GenerateOptions, HttpSource, Outcome, generate};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// URL of the PEM certificate (defaults to the Google GTS Root R1)
    #[arg(long, default_value = DEFAULT_CERT_URL)]
    pub url: String,

    /// Path of the generated header
    #[arg(short, long, default_value = DEFAULT_OUTPUT_HEADER)]
    pub output: PathBuf,

    /// C variable name of the embedded certificate
    #[arg(long, default_value = DEFAULT_VAR_NAME)]
    pub name: String,

    /// Regenerate even if the header already exists
    #[arg(long)]
    pub force: bool,

    /// Preview the generated header without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self {
            url: DEFAULT_CERT_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_HEADER),
            name: DEFAULT_VAR_NAME.to_string(),
            force: false,
            dry_run: false,
        }
    }
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = CertConfig::new(self.url.as_str(), &self.output, self.name.as_str());
        let source = HttpSource::new(self.url.as_str());
        let opts = GenerateOptions {
            force: self.force,
            dry_run: self.dry_run,
        };

        if !config.output.exists() || self.force || self.dry_run {
            println!("Downloading root CA from {} ...", self.url);
        }

        match generate(&config, &source, opts).unwrap_or_exit() {
            Outcome::Written => {
                println!("✓ Header saved to {}", self.output.display());
            }
            Outcome::Skipped => {
                println!(
                    "✓ Header already exists: {} (skipping generation)",
                    self.output.display()
                );
            }
            Outcome::Previewed(content) => {
                println!("── {} ──", self.output.display());
                println!("{content}");
            }
        }

        Ok(())
    }
}
