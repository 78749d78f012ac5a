//! Validate phase - checks every resolved target.

use eyre::Result;
use pickgen_graph::ValidationMode;

use crate::{
    pipeline::{CompilationContext, Diagnostic, Phase},
    validator::{validate, violations},
};

/// Records rule violations in the context.
///
/// In [`ValidationMode::FailFast`] only the first violation of the round is
/// kept; in [`ValidationMode::Aggregate`] every distinct violation of every
/// target is.
pub struct ValidatePhase;

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check visibility, constructor count and wrapper types"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let graph = ctx.graph;
        let found: Vec<_> = match ctx.mode {
            ValidationMode::FailFast => ctx
                .targets
                .iter()
                .find_map(|target| validate(graph, target).err())
                .into_iter()
                .collect(),
            ValidationMode::Aggregate => {
                let mut found = Vec::new();
                for violation in ctx.targets.iter().flat_map(|t| violations(graph, t)) {
                    // Class-level rules fire once per injected constructor.
                    if !found.contains(&violation) {
                        found.push(violation);
                    }
                }
                found
            }
        };

        for violation in &found {
            ctx.add_diagnostic(
                Diagnostic::error("validate", violation.to_string()).at(violation.class()),
            );
        }
        ctx.violations = found;

        Ok(())
    }
}
