//! Pipeline snapshot plugin for visualization and debugging.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::{Result, WrapErr};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::{ResolvedTarget, ValidationError};

/// The round state right after a phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,
    /// Ready declarations, described (`test.Foo.<init>#0`).
    pub ready: Vec<String>,
    pub deferred: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<ResolvedTarget>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ValidationError>,
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures the round state after each phase.
///
/// Used by `pick generate --visualize` to dump `<phase>.json` files.
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    /// Create a snapshot plugin that only keeps snapshots in memory.
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a snapshot plugin that writes each snapshot to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn capture(&self, phase: &str, ctx: &CompilationContext<'_>) -> PhaseSnapshot {
        let describe = |decls: &[pickgen_graph::DeclRef]| {
            decls.iter().map(|&d| ctx.graph.describe(d)).collect()
        };
        PhaseSnapshot {
            phase: phase.to_string(),
            ready: describe(&ctx.ready),
            deferred: describe(&ctx.deferred),
            targets: ctx.targets.clone(),
            violations: ctx.violations.clone(),
            diagnostics: ctx.diagnostics.clone(),
        }
    }
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let snapshot = self.capture(phase, ctx);

        if let Some(ref dir) = self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create '{}'", dir.display()))?;
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
