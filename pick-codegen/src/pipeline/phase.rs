use eyre::Result;

use super::CompilationContext;

/// Name and description of a phase, for `pick explain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase of the round pipeline.
///
/// Phases run in order; each reads and extends the compilation context.
/// Rule violations are recorded in the context, not returned as errors.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A one-line description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error only if the phase cannot run at all.
    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
