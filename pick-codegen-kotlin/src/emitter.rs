//! Kotlin factory rendering.

use pickgen_codegen::{
    FactoryEmitter,
    builder::{CodeBuilder, ImportCollector},
};
use pickgen_graph::Language;
use pickgen_ir::{ClassName, InjectionTarget, SourceArtifact};

use crate::naming::{self, class_literal};

/// Renders `Factory<T>` implementations as Kotlin source.
#[derive(Debug, Clone)]
pub struct KotlinFactoryEmitter {
    runtime_package: String,
}

impl KotlinFactoryEmitter {
    /// An emitter whose `Factory`, `Scope` and `MemberInjector` live in
    /// `runtime_package`.
    pub fn new(runtime_package: impl Into<String>) -> Self {
        Self {
            runtime_package: runtime_package.into(),
        }
    }

    fn runtime(&self, simple: &str) -> ClassName {
        ClassName::new(self.runtime_package.clone(), simple)
    }

    fn render_class(&self, target: &InjectionTarget, imports: &mut ImportCollector) -> String {
        let factory = target.factory_name();
        let owner = imports.name(&target.owner);
        let factory_type = imports.name(&self.runtime("Factory"));
        let scope = imports.name(&self.runtime("Scope"));
        let boolean = imports.name_explicit(&ClassName::new("kotlin", "Boolean"));

        let member_injector = target
            .member_injection_owner
            .as_ref()
            .zip(target.member_injector_name())
            .map(|(injected, injector)| {
                (
                    naming::generic(imports, &self.runtime("MemberInjector"), injected),
                    injector.qualified(),
                )
            });

        let bindings: Vec<String> = target
            .parameters
            .iter()
            .enumerate()
            .map(|(index, param)| {
                format!(
                    "val param{index} = scope.{}({})",
                    param.kind.scope_getter(),
                    class_literal(imports, &param.resolved_type)
                )
            })
            .collect();
        let arguments = (0..target.parameters.len())
            .map(|index| format!("param{index}"))
            .collect::<Vec<_>>()
            .join(", ");

        let target_scope = match &target.scope_marker {
            None => "scope".to_string(),
            Some(marker) if marker.root => "scope.rootScope".to_string(),
            Some(marker) => format!(
                "scope.getParentScope({}::class.java)",
                imports.name(&marker.name)
            ),
        };

        let accessors = [
            ("hasScopeAnnotation", target.has_scope_annotation()),
            ("hasSingletonAnnotation", target.singleton),
            ("hasReleasableAnnotation", target.releasable),
            (
                "hasProvidesSingletonAnnotation",
                target.provides_singleton_in_scope,
            ),
            ("hasProvidesReleasableAnnotation", target.provides_releasable),
        ];

        let mut code = CodeBuilder::jvm()
            .line(&format!(
                "public class {} : {factory_type}<{owner}> {{",
                factory.simple
            ))
            .indent();

        if let Some((field_type, injector)) = &member_injector {
            code = code
                .line(&format!("private val memberInjector: {field_type} ="))
                .continuation(&format!("{injector}()"))
                .blank();
        }

        code.block(
            &format!("public override fun createInstance(scope: {scope}): {owner} {{"),
            "}",
            |b| {
                b.each(&bindings, |b, binding| b.line(binding))
                    .line(&format!("val instance = {owner}({arguments})"))
                    .when(member_injector.is_some(), |b| {
                        b.line("memberInjector.inject(instance, scope)")
                    })
                    .line("return instance")
            },
        )
        .blank()
        .line(&format!(
            "public override fun getTargetScope(scope: {scope}): {scope} = {target_scope}"
        ))
        .blank()
        .separated(accessors, |b, (name, value)| {
            b.line(&format!("public override fun {name}(): {boolean} = {value}"))
        })
        .dedent()
        .line("}")
        .build()
    }
}

impl Default for KotlinFactoryEmitter {
    fn default() -> Self {
        Self::new("toothpick")
    }
}

impl FactoryEmitter for KotlinFactoryEmitter {
    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn emit(&self, target: &InjectionTarget) -> SourceArtifact {
        let factory = target.factory_name();
        let mut imports = naming::imports_for(&factory.package);
        imports.reserve(&factory);
        imports.shadow(&target.sibling_names);

        let class = self.render_class(target, &mut imports);
        let header = render_header(&factory.package, &imports);

        SourceArtifact {
            package_name: factory.package,
            file_name: factory.simple,
            extension: self.file_extension(),
            content: format!("{header}{class}"),
        }
    }
}

fn render_header(package: &str, imports: &ImportCollector) -> String {
    let imports = imports.imports();
    CodeBuilder::jvm()
        .when(!package.is_empty(), |b| {
            b.line(&format!("package {package}")).blank()
        })
        .when(!imports.is_empty(), |b| {
            b.each(&imports, |b, import| b.line(&format!("import {import}")))
                .blank()
        })
        .build()
}

#[cfg(test)]
mod tests {
    use pickgen_codegen::testing::single_target;

    use super::*;

    #[test]
    fn test_artifact_location() {
        let target = single_target(
            r#"
            [[class]]
            name = "com.example.Foo"
            [[class.constructors]]
            annotations = ["javax.inject.Inject"]
        "#,
        );

        let artifact = KotlinFactoryEmitter::default().emit(&target);

        assert_eq!(artifact.package_name, "com.example");
        assert_eq!(artifact.file_name, "Foo__Factory");
        assert_eq!(
            artifact.path(),
            std::path::PathBuf::from("com/example/Foo__Factory.kt")
        );
    }

    #[test]
    fn test_default_package_has_no_package_line() {
        let target = single_target(
            r#"
            [[class]]
            name = "Foo"
            [[class.constructors]]
            annotations = ["javax.inject.Inject"]
        "#,
        );

        let artifact = KotlinFactoryEmitter::default().emit(&target);

        assert!(artifact.content.starts_with("import kotlin.Boolean\n"));
        assert!(
            artifact
                .content
                .contains("public class Foo__Factory : Factory<Foo> {\n")
        );
    }

    #[test]
    fn test_custom_runtime_package() {
        let target = single_target(
            r#"
            [[class]]
            name = "test.Foo"
            [[class.constructors]]
            annotations = ["javax.inject.Inject"]
        "#,
        );

        let artifact = KotlinFactoryEmitter::new("com.acme.di").emit(&target);

        assert!(artifact.content.contains("import com.acme.di.Factory\n"));
        assert!(artifact.content.contains("import com.acme.di.Scope\n"));
    }
}
