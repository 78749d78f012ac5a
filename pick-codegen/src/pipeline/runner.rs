//! Pipeline orchestrator.

use eyre::Result;
use pickgen_graph::{DeclarationGraph, ValidationMode};
use tracing::{debug, info};

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{CollectPhase, ResolvePhase, ValidatePhase},
};

/// The round pipeline orchestrator.
///
/// Runs the built-in phases (collect, resolve, validate) followed by any
/// user phases, calling plugin hooks before and after each phase.
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: vec![
                Box::new(CollectPhase),
                Box::new(ResolvePhase),
                Box::new(ValidatePhase),
            ],
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Names and descriptions of every phase, in run order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        self.phases.iter().map(|phase| phase.info()).collect()
    }

    /// Run every phase over `graph`.
    ///
    /// # Errors
    ///
    /// Returns an error if a phase or plugin fails. Rule violations are not
    /// errors; they are recorded in [`CompilationContext::violations`].
    pub fn run<'g>(
        &self,
        graph: &'g DeclarationGraph,
        mode: ValidationMode,
    ) -> Result<CompilationContext<'g>> {
        let mut ctx = CompilationContext::new(graph, mode);

        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        info!(
            ready = ctx.ready.len(),
            deferred = ctx.deferred.len(),
            targets = ctx.targets.len(),
            violations = ctx.violations.len(),
            "round analysed"
        );
        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        debug!(phase = phase_name, "running phase");
        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::testing::graph;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext<'_>) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext<'_>) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingPhase;

    impl Phase for FailingPhase {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn description(&self) -> &'static str {
            "Always fails"
        }

        fn run(&self, _ctx: &mut CompilationContext<'_>) -> Result<()> {
            eyre::bail!("phase failed")
        }
    }

    const SAMPLE: &str = r#"
        [[class]]
        name = "test.Foo"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
    "#;

    #[test]
    fn test_pipeline_runs_phases() {
        let g = graph(SAMPLE);
        let ctx = Pipeline::new()
            .run(&g, ValidationMode::FailFast)
            .expect("pipeline should succeed");

        assert_eq!(ctx.ready.len(), 1);
        assert_eq!(ctx.targets.len(), 1);
        assert!(ctx.is_valid());
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let g = graph(SAMPLE);
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before_count: before.clone(),
            after_count: after.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .run(&g, ValidationMode::FailFast)
            .expect("pipeline should succeed");

        // 3 built-in phases = 3 before + 3 after hooks
        assert_eq!(before.load(Ordering::SeqCst), 3);
        assert_eq!(after.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_phase_info_lists_builtin_then_user_phases() {
        let names: Vec<_> = Pipeline::new()
            .phase(FailingPhase)
            .phase_info()
            .into_iter()
            .map(|info| info.name)
            .collect();
        assert_eq!(names, ["collect", "resolve", "validate", "failing"]);
    }

    #[test]
    fn test_pipeline_phase_error_aborts() {
        let g = graph(SAMPLE);
        let err = Pipeline::new()
            .phase(FailingPhase)
            .run(&g, ValidationMode::FailFast)
            .unwrap_err();
        assert_eq!(err.to_string(), "phase failed");
    }
}
