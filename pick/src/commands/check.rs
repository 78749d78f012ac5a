use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pickgen_graph::{GraphFile, ValidationMode};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to pick.toml (defaults to ./pick.toml)
    #[arg(short, long, default_value = "pick.toml")]
    pub config: PathBuf,

    /// Report every violation instead of stopping at the first
    #[arg(long)]
    pub aggregate: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = GraphFile::open(&self.config).unwrap_or_exit();

        let report = ops::check(
            file.graph(),
            &self.config,
            self.aggregate.then_some(ValidationMode::Aggregate),
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
