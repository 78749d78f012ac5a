//! Kotlin factory emitter for pick.
//!
//! Renders one `<Owner>__Factory.kt` per injection target, implementing the
//! runtime's `Factory<Owner>` contract.
//!
//! # Usage
//!
//! ```ignore
//! use pickgen_codegen::BatchDriver;
//! use pickgen_codegen_kotlin::KotlinFactoryEmitter;
//!
//! let emitter = KotlinFactoryEmitter::new(&graph.markers().runtime_package);
//! let outcome = BatchDriver::new(&emitter).run(&graph)?;
//! ```

mod emitter;
mod naming;

pub use emitter::KotlinFactoryEmitter;
pub use naming::DEFAULT_IMPORTS;
