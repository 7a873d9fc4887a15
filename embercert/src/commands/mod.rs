mod check;
mod clean;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on generation errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for embercert_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "embercert")]
#[command(version)]
#[command(about = "Generate a C header embedding the Google root CA for firmware builds")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        // Bare invocation runs a generation with the built-in defaults.
        match &self.command {
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::Clean(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => GenerateCommand::default().run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the certificate and generate the header (default)
    Generate(GenerateCommand),

    /// Report whether the generated header exists
    Check(CheckCommand),

    /// Delete the generated header to force regeneration
    Clean(CleanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
