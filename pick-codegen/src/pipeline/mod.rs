//! Round pipeline.
//!
//! A [`Pipeline`] runs the phases of one round over a [`CompilationContext`]:
//!
//! - `collect` - query annotated declarations, split into ready and deferred
//! - `resolve` - build one injection target per ready constructor
//! - `validate` - check every target before anything is emitted
//!
//! Plugins are called before and after each phase.
//!
//! # Example
//!
//! ```ignore
//! use pickgen_codegen::pipeline::{Pipeline, SnapshotPlugin};
//!
//! let ctx = Pipeline::new()
//!     .plugin(SnapshotPlugin::with_output_dir(".pick/debug"))
//!     .run(&graph, ValidationMode::Aggregate)?;
//!
//! for violation in &ctx.violations {
//!     eprintln!("error: {violation}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
