//! Java factory emitter for pick.
//!
//! Renders one `<Owner>__Factory.java` per injection target, laid out the way
//! JavaPoet prints it: `java.lang` types are imported explicitly and every
//! contract method carries `@Override`.
//!
//! # Usage
//!
//! ```ignore
//! use pickgen_codegen::BatchDriver;
//! use pickgen_codegen_java::JavaFactoryEmitter;
//!
//! let emitter = JavaFactoryEmitter::new(&graph.markers().runtime_package);
//! let outcome = BatchDriver::new(&emitter).run(&graph)?;
//! ```

mod emitter;
mod naming;

pub use emitter::JavaFactoryEmitter;
