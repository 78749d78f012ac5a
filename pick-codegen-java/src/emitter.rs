//! Java factory rendering.

use pickgen_codegen::{
    FactoryEmitter,
    builder::{CodeBuilder, ImportCollector},
};
use pickgen_graph::Language;
use pickgen_ir::{ClassName, InjectionTarget, SourceArtifact};

use crate::naming::{self, class_literal, instance_variable, type_name};

/// Renders `Factory<T>` implementations as Java source.
#[derive(Debug, Clone)]
pub struct JavaFactoryEmitter {
    runtime_package: String,
}

impl JavaFactoryEmitter {
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
        let override_annotation = imports.name(&java_lang("Override"));
        let instance = instance_variable(&target.owner);

        let member_injector = target
            .member_injection_owner
            .as_ref()
            .zip(target.member_injector_name())
            .map(|(injected, injector)| {
                let raw = imports.name(&self.runtime("MemberInjector"));
                let injected = imports.name(injected);
                (format!("{raw}<{injected}>"), injector.qualified())
            });

        let bindings: Vec<String> = target
            .parameters
            .iter()
            .enumerate()
            .map(|(index, param)| {
                format!(
                    "{} param{index} = scope.{}({});",
                    type_name(imports, &param.declared_type),
                    param.kind.scope_getter(),
                    class_literal(imports, &param.resolved_type)
                )
            })
            .collect();
        let arguments = (0..target.parameters.len())
            .map(|index| format!("param{index}"))
            .collect::<Vec<_>>()
            .join(", ");

        // Registered only when used so unused types stay out of the imports.
        let rethrow = target.throws_throwable.then(|| {
            (
                imports.name(&java_lang("Throwable")),
                imports.name(&java_lang("RuntimeException")),
            )
        });

        let target_scope = match &target.scope_marker {
            None => "scope".to_string(),
            Some(marker) if marker.root => "scope.getRootScope()".to_string(),
            Some(marker) => format!("scope.getParentScope({}.class)", marker.name.qualified()),
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
        let override_line = format!("@{override_annotation}");

        let mut code = CodeBuilder::jvm()
            .line(&format!(
                "public final class {} implements {factory_type}<{owner}> {{",
                factory.simple
            ))
            .indent();

        if let Some((field_type, injector)) = &member_injector {
            code = code
                .line(&format!(
                    "private {field_type} memberInjector = new {injector}();"
                ))
                .blank();
        }

        code.line(&override_line)
            .block(
                &format!("public {owner} createInstance({scope} scope) {{"),
                "}",
                |b| {
                    b.when(target.needs_target_scope(), |b| {
                        b.line("scope = getTargetScope(scope);")
                    })
                    .when(rethrow.is_some(), |b| b.line("try {").indent())
                    .each(&bindings, |b, binding| b.line(binding))
                    .line(&format!("{owner} {instance} = new {owner}({arguments});"))
                    .when(member_injector.is_some(), |b| {
                        b.line(&format!("memberInjector.inject({instance}, scope);"))
                    })
                    .line(&format!("return {instance};"))
                    .each(&rethrow, |b, (throwable, runtime_exception)| {
                        b.dedent()
                            .line(&format!("}} catch({throwable} ex) {{"))
                            .indent()
                            .line(&format!("throw new {runtime_exception}(ex);"))
                            .dedent()
                            .line("}")
                    })
                },
            )
            .blank()
            .line(&override_line)
            .block(
                &format!("public {scope} getTargetScope({scope} scope) {{"),
                "}",
                |b| b.line(&format!("return {target_scope};")),
            )
            .blank()
            .separated(accessors, |b, (name, value)| {
                b.line(&override_line).block(
                    &format!("public boolean {name}() {{"),
                    "}",
                    |b| b.line(&format!("return {value};")),
                )
            })
            .dedent()
            .line("}")
            .build()
    }
}

impl Default for JavaFactoryEmitter {
    fn default() -> Self {
        Self::new("toothpick")
    }
}

impl FactoryEmitter for JavaFactoryEmitter {
    fn language(&self) -> Language {
        Language::Java
    }

    fn file_extension(&self) -> &'static str {
        "java"
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

fn java_lang(simple: &str) -> ClassName {
    ClassName::new("java.lang", simple)
}

fn render_header(package: &str, imports: &ImportCollector) -> String {
    let imports = imports.imports();
    CodeBuilder::jvm()
        .when(!package.is_empty(), |b| {
            b.line(&format!("package {package};")).blank()
        })
        .when(!imports.is_empty(), |b| {
            b.each(&imports, |b, import| b.line(&format!("import {import};")))
                .blank()
        })
        .build()
}
