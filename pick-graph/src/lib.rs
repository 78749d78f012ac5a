//! Declaration graph for the pick factory generator.
//!
//! The graph is the read-only model of source declarations (classes,
//! constructors, fields, methods, annotations and supertypes) that the
//! resolver consumes. It is loaded from a TOML document:
//!
//! ```text
//! pick.toml (TOML) → pick-graph (parsing, resolution) → pick-codegen (targets) → emitters
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod decl;
mod error;
mod file;
mod graph;
mod options;
mod parse;
mod types;

pub use decl::{
    ClassDecl, ClassKind, ConstructorDecl, FieldDecl, MethodDecl, ParamDecl, Visibility,
};
pub use error::{Error, Result};
pub use file::GraphFile;
pub use graph::{ClassId, DeclRef, DeclarationGraph, MAX_ANCESTOR_DEPTH};
pub use options::{GraphOptions, Language, Markers, ValidationMode};
pub use types::{MAX_TYPE_DEPTH, TypeRef, TypeRefError};
