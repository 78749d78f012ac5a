//! Resolve phase - builds injection targets.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    resolver::resolve_all,
};

/// Resolves one target per ready constructor. Ready fields and methods are
/// left to the member injector generator.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Build one injection target per ready constructor"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        ctx.targets = resolve_all(ctx.graph, &ctx.ready);
        Ok(())
    }
}
