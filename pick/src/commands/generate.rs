use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pickgen_graph::{GraphFile, Language, ValidationMode};

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to pick.toml (defaults to ./pick.toml)
    #[arg(short, long, default_value = "pick.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Target language (overrides pick.toml setting)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Report every violation of the round instead of stopping at the first
    #[arg(long)]
    pub aggregate: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON snapshot of the round after each phase
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = GraphFile::open(&self.config).unwrap_or_exit();
        let graph = file.graph();

        // Use CLI flag if provided, otherwise use graph setting
        let language = self.language.unwrap_or(graph.options().language);

        let report = ops::generate(
            graph,
            LanguageSupport::get(language),
            GenerateOptions {
                output_dir: &self.output,
                mode: self.aggregate.then_some(ValidationMode::Aggregate),
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }

        Ok(())
    }
}
