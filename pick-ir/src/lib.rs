//! Intermediate representation for the pick factory generator.
//!
//! These types sit between the declaration graph and the language emitters:
//!
//! ```text
//! pick.toml → pick-graph (declarations) → pick-ir (injection targets) → emitters
//! ```
//!
//! The IR is:
//! - Language-agnostic (no Kotlin/Java-specific concerns)
//! - Immutable once resolved
//! - Self-contained (no dependency on the graph crate)

mod artifact;
mod names;
mod target;

pub use artifact::SourceArtifact;
pub use names::{ClassName, TypeName};
pub use target::{InjectionTarget, ParamKind, ParamTarget, ScopeMarker};
