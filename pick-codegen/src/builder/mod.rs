//! Source text building blocks.
//!
//! - [`CodeBuilder`] - fluent API for indented lines
//! - [`Indent`] - indentation configuration
//! - [`ImportCollector`] - deduplicated, sorted JVM imports

mod code_builder;
mod imports;
mod indent;

pub use code_builder::CodeBuilder;
pub use imports::ImportCollector;
pub use indent::Indent;
