//! Structural checks on resolved targets.
//!
//! Every check runs before any factory is emitted; a single violation keeps
//! the whole round from producing output.

use miette::Diagnostic;
use pickgen_graph::DeclarationGraph;
use serde::Serialize;
use thiserror::Error;

use crate::ResolvedTarget;

/// A violated injection rule.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValidationError {
    #[error("@Inject constructors must be public in class {class}")]
    #[diagnostic(
        code(pick::constructor_not_visible),
        help("make the constructor public or internal")
    )]
    ConstructorNotVisible { class: String },

    #[error("@Inject constructors are not allowed in private class {class}")]
    #[diagnostic(
        code(pick::class_not_visible),
        help("make the class public or internal")
    )]
    ClassNotVisible { class: String },

    #[error("Class {class} cannot have more than one @Inject annotated constructor.")]
    #[diagnostic(
        code(pick::multiple_injected_constructors),
        help("keep the marker on exactly one constructor")
    )]
    MultipleInjectedConstructors { class: String, count: usize },

    #[error(
        "Lazy/Provider {class}.{param} is not valid in <init>. Lazy/Provider cannot be used on generic types."
    )]
    #[diagnostic(
        code(pick::wrapper_on_generic_type),
        help("inject the wrapped type directly, or wrap a non-generic type")
    )]
    WrapperOnGenericType { class: String, param: String },
}

impl ValidationError {
    /// Fully-qualified name of the offending class.
    pub fn class(&self) -> &str {
        match self {
            ValidationError::ConstructorNotVisible { class }
            | ValidationError::ClassNotVisible { class }
            | ValidationError::MultipleInjectedConstructors { class, .. }
            | ValidationError::WrapperOnGenericType { class, .. } => class,
        }
    }
}

/// Check a target, stopping at the first violation.
pub fn validate(
    graph: &DeclarationGraph,
    resolved: &ResolvedTarget,
) -> Result<(), ValidationError> {
    match violations(graph, resolved).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Every violation of a target, in check order: constructor visibility, class
/// visibility, single injected constructor, wrappers over generic types.
pub fn violations(graph: &DeclarationGraph, resolved: &ResolvedTarget) -> Vec<ValidationError> {
    let class = graph.class(resolved.class);
    let marker = &graph.markers().inject;
    let name = || class.name.clone();
    let mut out = Vec::new();

    let constructor_visible = graph
        .constructor(resolved.class, resolved.target.constructor)
        .is_some_and(|c| c.visibility.is_module_visible());
    if !constructor_visible {
        out.push(ValidationError::ConstructorNotVisible { class: name() });
    }

    if !class.visibility.is_module_visible() {
        out.push(ValidationError::ClassNotVisible { class: name() });
    }

    let injected = class
        .constructors
        .iter()
        .filter(|c| c.has_annotation(marker))
        .count();
    if injected != 1 {
        out.push(ValidationError::MultipleInjectedConstructors {
            class: name(),
            count: injected,
        });
    }

    out.extend(
        resolved
            .target
            .parameters
            .iter()
            .filter(|p| p.kind.is_wrapper() && p.resolved_type.has_arguments())
            .map(|p| ValidationError::WrapperOnGenericType {
                class: name(),
                param: p.name.clone(),
            }),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        resolver::resolve_all,
        testing::{graph, ready_constructors},
    };

    fn check(src: &str) -> Vec<Vec<ValidationError>> {
        let g = graph(src);
        resolve_all(&g, &ready_constructors(&g))
            .iter()
            .map(|target| violations(&g, target))
            .collect()
    }

    #[test]
    fn test_valid_target() {
        let results = check(
            r#"
            [[class]]
            name = "test.Foo"
            visibility = "internal"
            [[class.constructors]]
            visibility = "internal"
            annotations = ["javax.inject.Inject"]
        "#,
        );
        assert_eq!(results, vec![vec![]]);
    }

    #[test]
    fn test_constructor_visibility() {
        for visibility in ["protected", "private"] {
            let results = check(&format!(
                r#"
                [[class]]
                name = "test.Foo"
                [[class.constructors]]
                visibility = "{visibility}"
                annotations = ["javax.inject.Inject"]
            "#
            ));
            assert_eq!(
                results[0],
                [ValidationError::ConstructorNotVisible {
                    class: "test.Foo".into()
                }]
            );
            assert_eq!(
                results[0][0].to_string(),
                "@Inject constructors must be public in class test.Foo"
            );
        }
    }

    #[test]
    fn test_private_class() {
        let results = check(
            r#"
            [[class]]
            name = "test.Foo"
            visibility = "private"
            [[class.constructors]]
            annotations = ["javax.inject.Inject"]
        "#,
        );
        assert_eq!(
            results[0][0].to_string(),
            "@Inject constructors are not allowed in private class test.Foo"
        );
    }

    #[test]
    fn test_two_injected_constructors() {
        let results = check(
            r#"
            [[class]]
            name = "test.Foo"
            [[class.constructors]]
            annotations = ["javax.inject.Inject"]
            [[class.constructors]]
            annotations = ["javax.inject.Inject"]
            params = [{ name = "message", type = "kotlin.String" }]
        "#,
        );
        // one target per injected constructor, both rejected
        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(
                result[0].to_string(),
                "Class test.Foo cannot have more than one @Inject annotated constructor."
            );
        }
    }

    #[test]
    fn test_wrapper_on_generic_type() {
        let results = check(
            r#"
            [[class]]
            name = "test.Foo"
            [[class.constructors]]
            annotations = ["javax.inject.Inject"]
            params = [
                { name = "messages", type = "toothpick.Lazy<kotlin.collections.List<kotlin.String>>" },
                { name = "values", type = "javax.inject.Provider<kotlin.collections.List<kotlin.Int>>" },
                { name = "plain", type = "kotlin.collections.List<kotlin.String>" },
            ]
        "#,
        );
        assert_eq!(
            results[0],
            [
                ValidationError::WrapperOnGenericType {
                    class: "test.Foo".into(),
                    param: "messages".into()
                },
                ValidationError::WrapperOnGenericType {
                    class: "test.Foo".into(),
                    param: "values".into()
                },
            ]
        );
        assert_eq!(
            results[0][0].to_string(),
            "Lazy/Provider test.Foo.messages is not valid in <init>. Lazy/Provider cannot be used on generic types."
        );
    }

    #[test]
    fn test_validate_returns_first_violation_in_check_order() {
        let g = graph(
            r#"
            [[class]]
            name = "test.Foo"
            visibility = "private"
            [[class.constructors]]
            visibility = "private"
            annotations = ["javax.inject.Inject"]
        "#,
        );
        let targets = resolve_all(&g, &ready_constructors(&g));

        assert_eq!(violations(&g, &targets[0]).len(), 2);
        assert_eq!(
            validate(&g, &targets[0]),
            Err(ValidationError::ConstructorNotVisible {
                class: "test.Foo".into()
            })
        );
    }

    #[test]
    fn test_marker_compared_by_qualified_name() {
        let results = check(
            r#"
            [[class]]
            name = "test.Foo"
            [[class.constructors]]
            annotations = ["javax.inject.Inject"]
            [[class.constructors]]
            annotations = ["com.example.Inject"]
        "#,
        );
        assert_eq!(results, vec![vec![]]);
    }
}
