//! Java type and identifier spelling.

use pickgen_codegen::builder::ImportCollector;
use pickgen_core::decapitalize;
use pickgen_ir::{ClassName, TypeName};

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
];

/// `java.lang` is imported explicitly, so no package is implicit.
pub fn imports_for(package: &str) -> ImportCollector {
    ImportCollector::new(package)
}

/// A type with its arguments: `Lazy<String>`.
pub fn type_name(imports: &mut ImportCollector, ty: &TypeName) -> String {
    let raw = imports.name(&ty.class);
    if !ty.has_arguments() {
        return raw;
    }
    let arguments = ty
        .arguments
        .iter()
        .map(|argument| type_name(imports, argument))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{raw}<{arguments}>")
}

/// `Foo.class`, type arguments erased.
pub fn class_literal(imports: &mut ImportCollector, ty: &TypeName) -> String {
    format!("{}.class", imports.name(&ty.class))
}

/// Local variable holding the new instance: the decapitalized class name,
/// or `instance` when that would not be a usable identifier.
pub fn instance_variable(owner: &ClassName) -> String {
    let name = decapitalize(&owner.simple);
    let shadowed = matches!(name.as_str(), "scope" | "memberInjector") || name.starts_with("param");
    if shadowed || KEYWORDS.contains(&name.as_str()) {
        "instance".to_string()
    } else {
        name
    }
}
