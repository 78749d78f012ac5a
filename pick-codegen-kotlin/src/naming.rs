//! Kotlin type spelling.

use pickgen_codegen::builder::ImportCollector;
use pickgen_ir::{ClassName, TypeName};

/// Packages every Kotlin/JVM file sees without imports.
pub const DEFAULT_IMPORTS: &[&str] = &[
    "java.lang",
    "kotlin",
    "kotlin.annotation",
    "kotlin.collections",
    "kotlin.comparisons",
    "kotlin.io",
    "kotlin.jvm",
    "kotlin.ranges",
    "kotlin.sequences",
    "kotlin.text",
];

/// Import collector for a Kotlin file in `package`.
pub fn imports_for(package: &str) -> ImportCollector {
    DEFAULT_IMPORTS
        .iter()
        .fold(ImportCollector::new(package), |imports, implicit| {
            imports.implicit(*implicit)
        })
}

/// `Foo::class.java`, type arguments erased.
pub fn class_literal(imports: &mut ImportCollector, ty: &TypeName) -> String {
    format!("{}::class.java", imports.name(&ty.class))
}

/// `Outer<Inner>` spelled with the file's imports.
pub fn generic(imports: &mut ImportCollector, raw: &ClassName, argument: &ClassName) -> String {
    let raw = imports.name(raw);
    format!("{}<{}>", raw, imports.name(argument))
}
