//! Target resolution, validation and shared emitter utilities for pick.
//!
//! This crate turns a [`DeclarationGraph`](pickgen_graph::DeclarationGraph)
//! into validated [`InjectionTarget`](pickgen_ir::InjectionTarget)s and hands
//! them to a language-specific [`FactoryEmitter`].
//!
//! # Module Organization
//!
//! - [`resolver`] - builds one injection target per injected constructor
//! - [`validator`] - structural checks run before anything is emitted
//! - [`pipeline`] - collect → resolve → validate phases with plugin hooks
//! - [`driver`] - runs a round and emits only when every target is valid
//! - [`builder`] - indented source text and import collection
//! - [`sink`] - where emitted artifacts are written
//! - [`testing`] - graph fixtures (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod driver;
mod emitter;
pub mod pipeline;
pub mod resolver;
pub mod sink;
pub mod validator;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use driver::{BatchDriver, RoundOutcome};
pub use emitter::FactoryEmitter;
pub use resolver::ResolvedTarget;
pub use sink::{DirectorySink, OutputSink};
pub use validator::ValidationError;
