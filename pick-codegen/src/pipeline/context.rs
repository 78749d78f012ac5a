//! Compilation context passed through pipeline phases.

use pickgen_graph::{DeclRef, DeclarationGraph, ValidationMode};

use super::diagnostic::{Diagnostic, Severity};
use crate::{ResolvedTarget, ValidationError};

/// State of one round, filled in phase by phase.
#[derive(Debug)]
pub struct CompilationContext<'g> {
    /// The graph of this round. Never mutated.
    pub graph: &'g DeclarationGraph,
    pub mode: ValidationMode,
    /// Annotated declarations whose symbols all resolve (populated by `collect`).
    pub ready: Vec<DeclRef>,
    /// Annotated declarations to retry in a later round (populated by `collect`).
    pub deferred: Vec<DeclRef>,
    /// Populated by `resolve`.
    pub targets: Vec<ResolvedTarget>,
    /// Populated by `validate`.
    pub violations: Vec<ValidationError>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'g> CompilationContext<'g> {
    pub fn new(graph: &'g DeclarationGraph, mode: ValidationMode) -> Self {
        Self {
            graph,
            mode,
            ready: Vec::new(),
            deferred: Vec::new(),
            targets: Vec::new(),
            violations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Whether the round may emit.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::graph;

    #[test]
    fn test_context_creation() {
        let g = graph("");
        let ctx = CompilationContext::new(&g, ValidationMode::FailFast);

        assert!(ctx.ready.is_empty());
        assert!(ctx.targets.is_empty());
        assert!(ctx.is_valid());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_context_diagnostics() {
        let g = graph("");
        let mut ctx = CompilationContext::new(&g, ValidationMode::Aggregate);

        ctx.add_diagnostic(Diagnostic::error("validate", "bad"));
        ctx.add_diagnostic(Diagnostic::warning("collect", "odd"));
        ctx.add_diagnostic(Diagnostic::info("collect", "fine"));

        assert!(ctx.has_errors());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warnings().count(), 1);
    }
}
