//! Core utilities and types for the pick factory generator.
//!
//! This crate provides the file-writing layer used by output sinks and
//! qualified-name helpers shared by the graph, codegen and emitter crates.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// Name utilities
pub use utils::{decapitalize, is_in_package, package_of, simple_name_of};
