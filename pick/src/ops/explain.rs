//! Explain operation - what a round would produce.

use std::path::Path;

use eyre::{Context, Result};
use pickgen_codegen::{ResolvedTarget, pipeline::Pipeline};
use pickgen_graph::{DeclarationGraph, ValidationMode};

use crate::reports::{ExplainReport, GraphInfo, ParamInfo, PhaseInfo, TargetInfo};

/// Execute the explain operation.
pub fn explain(graph: &DeclarationGraph, config_path: &Path) -> Result<ExplainReport> {
    let pipeline = Pipeline::new();
    let options = graph.options();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|info| PhaseInfo {
            name: info.name.to_string(),
            description: info.description.to_string(),
        })
        .collect();

    let ctx = pipeline
        .run(graph, options.validation)
        .wrap_err("Pipeline failed")?;

    Ok(ExplainReport {
        graph_info: GraphInfo {
            path: config_path.display().to_string(),
            class_count: graph.len(),
            language: options.language.to_string(),
            validation: mode_name(options.validation).to_string(),
            runtime_package: graph.markers().runtime_package.clone(),
        },
        phases,
        targets: ctx.targets.iter().map(target_info).collect(),
        deferred: ctx.deferred.iter().map(|&decl| graph.describe(decl)).collect(),
        violations: ctx.violations.iter().map(ToString::to_string).collect(),
    })
}

fn mode_name(mode: ValidationMode) -> &'static str {
    match mode {
        ValidationMode::FailFast => "fail-fast",
        ValidationMode::Aggregate => "aggregate",
    }
}

fn target_info(resolved: &ResolvedTarget) -> TargetInfo {
    let target = &resolved.target;
    let flags = [
        ("singleton", target.singleton),
        ("releasable", target.releasable),
        ("provides-singleton", target.provides_singleton_in_scope),
        ("provides-releasable", target.provides_releasable),
        ("throws", target.throws_throwable),
    ];

    TargetInfo {
        owner: target.owner.qualified(),
        factory: target.factory_name().qualified(),
        params: target
            .parameters
            .iter()
            .map(|param| ParamInfo {
                name: param.name.clone(),
                kind: param.kind.as_str(),
                declared_type: param.declared_type.to_string(),
                resolved_type: param.resolved_type.to_string(),
            })
            .collect(),
        scope: target.scope_marker.as_ref().map(|marker| {
            if marker.root {
                format!("{} (root)", marker.name)
            } else {
                marker.name.qualified()
            }
        }),
        flags: flags
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect(),
        member_injector: target.member_injector_name().map(|name| name.qualified()),
    }
}
