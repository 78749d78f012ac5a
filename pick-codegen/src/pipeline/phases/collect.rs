//! Collect phase - queries annotated declarations.

use eyre::Result;
use pickgen_graph::DeclRef;
use tracing::debug;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Splits the declarations carrying the injection marker into ready and
/// deferred ones.
pub struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn description(&self) -> &'static str {
        "Query injection points and defer those with unresolved types"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let graph = ctx.graph;
        let symbols = graph.symbols_with_annotation(&graph.markers().inject);

        for decl in symbols {
            if let DeclRef::Class(_) = decl {
                ctx.add_diagnostic(
                    Diagnostic::warning("collect", "the injection marker has no effect on a class")
                        .at(graph.describe(decl)),
                );
            } else if graph.validate(decl) {
                ctx.ready.push(decl);
            } else {
                debug!(decl = %graph.describe(decl), "deferring unresolved declaration");
                ctx.add_diagnostic(
                    Diagnostic::info("collect", "deferred until its types resolve")
                        .at(graph.describe(decl)),
                );
                ctx.deferred.push(decl);
            }
        }

        Ok(())
    }
}
