//! Language-agnostic emitter trait.

use pickgen_graph::Language;
use pickgen_ir::{InjectionTarget, SourceArtifact};

/// Renders validated injection targets into factory source files.
///
/// Implement this trait to add a target language. Emitters are pure: the same
/// target always yields byte-identical output.
pub trait FactoryEmitter {
    /// Language of the emitted sources.
    fn language(&self) -> Language;

    /// File extension for emitted sources (e.g., "kt", "java").
    fn file_extension(&self) -> &'static str;

    /// Render the factory of one target.
    fn emit(&self, target: &InjectionTarget) -> SourceArtifact;
}
