//! Generate operation - one round from graph to factory sources.

use std::path::Path;

use eyre::{Context, Result};
use pickgen_codegen::{BatchDriver, DirectorySink, pipeline::SnapshotPlugin};
use pickgen_graph::{DeclarationGraph, ValidationMode};
use tracing::debug;

use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult, PreviewFile, WrittenFile, WrittenResult},
};

/// First line of every written factory.
pub const HEADER: &str = "// Generated by pick. Do not edit.";

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Root of the generated source tree.
    pub output_dir: &'a Path,
    /// Overrides the validation mode of the graph options.
    pub mode: Option<ValidationMode>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs one round and, when every target is valid, writes (or previews) one
/// factory per target.
pub fn generate(
    graph: &DeclarationGraph,
    lang: LanguageSupport,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let emitter = lang.emitter(&graph.markers().runtime_package);
    let debug_dir = opts.output_dir.join(".pick/debug");
    debug!(
        language = lang.name,
        output = %opts.output_dir.display(),
        dry_run = opts.dry_run,
        "starting round"
    );

    let mut driver = BatchDriver::new(emitter.as_ref());
    if let Some(mode) = opts.mode {
        driver = driver.mode(mode);
    }
    if opts.visualize {
        driver = driver.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let outcome = driver.run(graph).wrap_err("Round failed")?;

    let deferred = outcome
        .deferred
        .iter()
        .map(|&decl| graph.describe(decl))
        .collect();

    let result = if !outcome.is_success() {
        GenerationResult::Rejected(outcome.failures.clone())
    } else if opts.dry_run {
        let files = outcome
            .emitted
            .iter()
            .map(|artifact| PreviewFile {
                path: artifact.path().display().to_string(),
                content: artifact.content.clone(),
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let sink = DirectorySink::new(opts.output_dir).with_header(HEADER);
        let files = outcome
            .write(&sink)
            .wrap_err("Failed to write factories")?
            .into_iter()
            .map(|(path, result)| WrittenFile { path, result })
            .collect();

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        language: lang.name,
        target_count: outcome.targets.len(),
        deferred,
        result,
    })
}
