//! Test utilities for resolvers and emitters.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use eyre::Result;
use pickgen_core::WriteResult;
use pickgen_graph::{DeclRef, DeclarationGraph};
use pickgen_ir::{InjectionTarget, SourceArtifact};
use tempfile::TempDir;

use crate::{OutputSink, resolver::resolve_all};

/// Parse a graph fixture, panicking on malformed input.
pub fn graph(src: &str) -> DeclarationGraph {
    src.parse().expect("Failed to parse test graph")
}

/// Injected constructors of the graph whose symbols are all resolved.
pub fn ready_constructors(graph: &DeclarationGraph) -> Vec<DeclRef> {
    graph
        .symbols_with_annotation(&graph.markers().inject)
        .into_iter()
        .filter(|decl| decl.is_constructor() && graph.validate(*decl))
        .collect()
}

/// Resolve the only injection target of a fixture.
pub fn single_target(src: &str) -> InjectionTarget {
    let graph = graph(src);
    let mut targets = resolve_all(&graph, &ready_constructors(&graph));
    assert_eq!(targets.len(), 1, "expected exactly one injection target");
    targets.remove(0).target
}

/// Sink that keeps written artifacts in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    written: Mutex<Vec<SourceArtifact>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> Vec<SourceArtifact> {
        self.written
            .lock()
            .expect("sink lock poisoned")
            .clone()
    }
}

impl OutputSink for MemorySink {
    fn write(&self, artifact: &SourceArtifact) -> Result<(PathBuf, WriteResult)> {
        self.written
            .lock()
            .expect("sink lock poisoned")
            .push(artifact.clone());
        Ok((artifact.path(), WriteResult::Written))
    }
}

/// A temporary output directory removed on drop.
pub struct TempOutput {
    dir: TempDir,
}

impl TempOutput {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Read a file relative to the output root.
    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.dir.path().join(relative)).expect("Failed to read output")
    }
}

impl Default for TempOutput {
    fn default() -> Self {
        Self::new()
    }
}
