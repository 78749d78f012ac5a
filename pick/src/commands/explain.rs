use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pickgen_graph::GraphFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to pick.toml (defaults to ./pick.toml)
    #[arg(short, long, default_value = "pick.toml")]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let file = GraphFile::open(&self.config).unwrap_or_exit();
        let report = ops::explain(file.graph(), file.path())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
