//! Check operation - graph validation without emission.

use std::path::Path;

use eyre::{Context, Result};
use pickgen_codegen::pipeline::{Pipeline, Severity};
use pickgen_graph::{DeclarationGraph, ValidationMode};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs collect, resolve and validate and returns the diagnostics.
pub fn check(
    graph: &DeclarationGraph,
    config_path: &Path,
    mode: Option<ValidationMode>,
) -> Result<CheckReport> {
    let mode = mode.unwrap_or(graph.options().validation);
    let ctx = Pipeline::new()
        .run(graph, mode)
        .wrap_err("Validation failed")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        target_count: ctx.targets.len(),
        deferred_count: ctx.deferred.len(),
        errors,
        warnings,
        infos,
    })
}
