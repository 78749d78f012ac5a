//! Batch driver: one round from graph to artifacts.
//!
//! Every resolved target is validated before the first artifact is
//! rendered. A round with any violation emits nothing.

use std::path::PathBuf;

use eyre::Result;
use pickgen_core::WriteResult;
use pickgen_graph::{DeclRef, DeclarationGraph, ValidationMode};
use pickgen_ir::SourceArtifact;
use tracing::info;

use crate::{
    FactoryEmitter, OutputSink, ResolvedTarget, ValidationError,
    pipeline::{Pipeline, Plugin},
};

/// Result of one round.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// One artifact per target, empty when any target failed validation.
    pub emitted: Vec<SourceArtifact>,
    /// Declarations whose types are not resolved yet.
    pub deferred: Vec<DeclRef>,
    /// Violations of the round; at most one in fail-fast mode.
    pub failures: Vec<ValidationError>,
    pub targets: Vec<ResolvedTarget>,
}

impl RoundOutcome {
    /// The first violation of the round.
    pub fn failed(&self) -> Option<&ValidationError> {
        self.failures.first()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Hand every emitted artifact to `sink`, in emission order.
    pub fn write(&self, sink: &dyn OutputSink) -> Result<Vec<(PathBuf, WriteResult)>> {
        self.emitted
            .iter()
            .map(|artifact| sink.write(artifact))
            .collect()
    }
}

/// Runs collect, resolve and validate, then emits with one emitter.
pub struct BatchDriver<'e> {
    emitter: &'e dyn FactoryEmitter,
    mode: Option<ValidationMode>,
    pipeline: Pipeline,
}

impl<'e> BatchDriver<'e> {
    pub fn new(emitter: &'e dyn FactoryEmitter) -> Self {
        Self {
            emitter,
            mode: None,
            pipeline: Pipeline::new(),
        }
    }

    /// Override the validation mode of the graph options.
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.pipeline = self.pipeline.plugin(plugin);
        self
    }

    /// Run one round over `graph`.
    ///
    /// Violations are reported through [`RoundOutcome::failures`]; the
    /// error case is reserved for pipeline and plugin failures.
    pub fn run(&self, graph: &DeclarationGraph) -> Result<RoundOutcome> {
        let mode = self.mode.unwrap_or(graph.options().validation);
        let ctx = self.pipeline.run(graph, mode)?;

        let emitted: Vec<SourceArtifact> = if ctx.is_valid() {
            ctx.targets
                .iter()
                .map(|resolved| self.emitter.emit(&resolved.target))
                .collect()
        } else {
            Vec::new()
        };

        info!(
            language = %self.emitter.language(),
            emitted = emitted.len(),
            deferred = ctx.deferred.len(),
            failures = ctx.violations.len(),
            "round finished"
        );

        Ok(RoundOutcome {
            emitted,
            deferred: ctx.deferred,
            failures: ctx.violations,
            targets: ctx.targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use pickgen_graph::Language;
    use pickgen_ir::InjectionTarget;

    use super::*;
    use crate::testing::{MemorySink, graph};

    /// Emits the owner's name as the whole file.
    struct NameEmitter;

    impl FactoryEmitter for NameEmitter {
        fn language(&self) -> Language {
            Language::Kotlin
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn emit(&self, target: &InjectionTarget) -> SourceArtifact {
            let name = target.factory_name();
            SourceArtifact {
                package_name: name.package.clone(),
                file_name: name.simple.clone(),
                extension: self.file_extension(),
                content: format!("{}\n", target.owner),
            }
        }
    }

    const VALID: &str = r#"
        [[class]]
        name = "test.Foo"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]

        [[class]]
        name = "test.Bar"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [{ name = "foo", type = "test.Foo" }]

        [[class]]
        name = "test.Later"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [{ name = "missing", type = "test.Missing" }]
    "#;

    const BROKEN: &str = r#"
        [[class]]
        name = "test.Good"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]

        [[class]]
        name = "test.Hidden"
        [[class.constructors]]
        visibility = "private"
        annotations = ["javax.inject.Inject"]

        [[class]]
        name = "test.Twice"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [{ name = "name", type = "kotlin.String" }]
    "#;

    #[test]
    fn test_valid_round_emits_every_target() {
        let g = graph(VALID);
        let outcome = BatchDriver::new(&NameEmitter).run(&g).unwrap();

        assert!(outcome.is_success());
        let names: Vec<_> = outcome
            .emitted
            .iter()
            .map(SourceArtifact::qualified_name)
            .collect();
        assert_eq!(names, ["test.Foo__Factory", "test.Bar__Factory"]);
        assert_eq!(outcome.deferred.len(), 1);
        assert_eq!(g.describe(outcome.deferred[0]), "test.Later.<init>#0");
    }

    #[test]
    fn test_one_violation_emits_nothing() {
        let g = graph(BROKEN);
        let outcome = BatchDriver::new(&NameEmitter).run(&g).unwrap();

        assert!(!outcome.is_success());
        assert!(outcome.emitted.is_empty());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(
            outcome.failed(),
            Some(&ValidationError::ConstructorNotVisible {
                class: "test.Hidden".into()
            })
        );
    }

    #[test]
    fn test_aggregate_mode_reports_every_violation() {
        let g = graph(BROKEN);
        let outcome = BatchDriver::new(&NameEmitter)
            .mode(ValidationMode::Aggregate)
            .run(&g)
            .unwrap();

        assert!(outcome.emitted.is_empty());
        let messages: Vec<_> = outcome.failures.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            [
                "@Inject constructors must be public in class test.Hidden",
                "Class test.Twice cannot have more than one @Inject annotated constructor.",
            ]
        );
    }

    #[test]
    fn test_write_hands_artifacts_to_sink() {
        let g = graph(VALID);
        let outcome = BatchDriver::new(&NameEmitter).run(&g).unwrap();
        let sink = MemorySink::new();

        let written = outcome.write(&sink).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(written[0].0, PathBuf::from("test/Foo__Factory.txt"));
        assert_eq!(sink.written()[1].content, "test.Bar\n");
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let g = graph(VALID);
        let driver = BatchDriver::new(&NameEmitter);

        let first = driver.run(&g).unwrap();
        let second = driver.run(&g).unwrap();

        assert_eq!(first.emitted, second.emitted);
    }
}
