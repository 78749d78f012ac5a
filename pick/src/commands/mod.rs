mod check;
mod completions;
mod explain;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use explain::ExplainCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on graph errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pickgen_graph::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pick")]
#[command(version)]
#[command(about = "Generate dependency-injection factories from a declaration graph")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate factories from pick.toml
    Generate(GenerateCommand),

    /// Resolve and validate injection targets without emitting
    Check(CheckCommand),

    /// Show the phases of a round and every resolved target
    Explain(ExplainCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
