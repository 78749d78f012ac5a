//! Built-in pipeline phases.
//!
//! - [`CollectPhase`] - finds annotated declarations and defers unresolved ones
//! - [`ResolvePhase`] - resolves injection targets
//! - [`ValidatePhase`] - records rule violations

mod collect;
mod resolve;
mod validate;

pub use collect::CollectPhase;
pub use resolve::ResolvePhase;
pub use validate::ValidatePhase;
