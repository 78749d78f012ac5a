//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod explain;
mod generate;
mod output;

pub use check::CheckReport;
pub use explain::{ExplainReport, GraphInfo, ParamInfo, PhaseInfo, TargetInfo};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenFile, WrittenResult};
pub use output::{Report, TerminalOutput};
