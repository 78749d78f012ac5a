//! Snapshot tests for Kotlin factory emission.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use pickgen_codegen::{BatchDriver, FactoryEmitter, testing::graph, testing::single_target};
use pickgen_codegen_kotlin::KotlinFactoryEmitter;

/// Emit the factory of the only injection target of a fixture.
fn emit(src: &str) -> String {
    KotlinFactoryEmitter::default()
        .emit(&single_target(src))
        .content
}

#[test]
fn test_empty_constructor() {
    let source = emit(
        r#"
        [[class]]
        name = "test.TestEmptyConstructor"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        "#,
    );

    insta::assert_snapshot!(source, @r"
    package test

    import kotlin.Boolean
    import toothpick.Factory
    import toothpick.Scope

    public class TestEmptyConstructor__Factory : Factory<TestEmptyConstructor> {
      public override fun createInstance(scope: Scope): TestEmptyConstructor {
        val instance = TestEmptyConstructor()
        return instance
      }

      public override fun getTargetScope(scope: Scope): Scope = scope

      public override fun hasScopeAnnotation(): Boolean = false

      public override fun hasSingletonAnnotation(): Boolean = false

      public override fun hasReleasableAnnotation(): Boolean = false

      public override fun hasProvidesSingletonAnnotation(): Boolean = false

      public override fun hasProvidesReleasableAnnotation(): Boolean = false
    }
    ");
}

#[test]
fn test_parameters_in_positional_order() {
    let source = emit(
        r#"
        [[class]]
        name = "test.TestNonEmptyConstructor"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [
            { name = "message", type = "kotlin.String" },
            { name = "value", type = "kotlin.Int" },
        ]
        "#,
    );

    assert!(source.contains(
        "  public override fun createInstance(scope: Scope): TestNonEmptyConstructor {\n\
         \x20   val param0 = scope.getInstance(String::class.java)\n\
         \x20   val param1 = scope.getInstance(Int::class.java)\n\
         \x20   val instance = TestNonEmptyConstructor(param0, param1)\n\
         \x20   return instance\n\
         \x20 }\n"
    ));
    assert!(!source.contains("import kotlin.String"));
}

#[test]
fn test_lazy_and_provider_parameters() {
    let source = emit(
        r#"
        [[class]]
        name = "test.Wrapped"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [
            { name = "message", type = "toothpick.Lazy<kotlin.String>" },
            { name = "value", type = "javax.inject.Provider<kotlin.String>" },
            { name = "count", type = "kotlin.Int" },
        ]
        "#,
    );

    assert!(source.contains("    val param0 = scope.getLazy(String::class.java)\n"));
    assert!(source.contains("    val param1 = scope.getProvider(String::class.java)\n"));
    assert!(source.contains("    val param2 = scope.getInstance(Int::class.java)\n"));
    assert!(!source.contains("import toothpick.Lazy"));
    assert!(!source.contains("import javax.inject.Provider"));
}

#[test]
fn test_generic_instance_parameter_is_erased() {
    let source = emit(
        r#"
        [[class]]
        name = "test.Generic"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [{ name = "messages", type = "kotlin.collections.List<kotlin.String>" }]
        "#,
    );

    assert!(source.contains("    val param0 = scope.getInstance(List::class.java)\n"));
}

#[test]
fn test_foreign_parameter_type_is_imported() {
    let source = emit(
        r#"
        [[class]]
        name = "com.example.Dep"

        [[class]]
        name = "test.Consumer"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [{ name = "dep", type = "com.example.Dep" }]
        "#,
    );

    insta::assert_snapshot!(source, @r"
    package test

    import com.example.Dep
    import kotlin.Boolean
    import toothpick.Factory
    import toothpick.Scope

    public class Consumer__Factory : Factory<Consumer> {
      public override fun createInstance(scope: Scope): Consumer {
        val param0 = scope.getInstance(Dep::class.java)
        val instance = Consumer(param0)
        return instance
      }

      public override fun getTargetScope(scope: Scope): Scope = scope

      public override fun hasScopeAnnotation(): Boolean = false

      public override fun hasSingletonAnnotation(): Boolean = false

      public override fun hasReleasableAnnotation(): Boolean = false

      public override fun hasProvidesSingletonAnnotation(): Boolean = false

      public override fun hasProvidesReleasableAnnotation(): Boolean = false
    }
    ");
}

#[test]
fn test_member_injection_on_the_class_itself() {
    let source = emit(
        r#"
        [[class]]
        name = "test.TestWithMemberInjection"
        fields = [{ name = "message", type = "kotlin.String", annotations = ["javax.inject.Inject"] }]
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        "#,
    );

    insta::assert_snapshot!(source, @r"
    package test

    import kotlin.Boolean
    import toothpick.Factory
    import toothpick.MemberInjector
    import toothpick.Scope

    public class TestWithMemberInjection__Factory : Factory<TestWithMemberInjection> {
      private val memberInjector: MemberInjector<TestWithMemberInjection> =
          test.TestWithMemberInjection__MemberInjector()

      public override fun createInstance(scope: Scope): TestWithMemberInjection {
        val instance = TestWithMemberInjection()
        memberInjector.inject(instance, scope)
        return instance
      }

      public override fun getTargetScope(scope: Scope): Scope = scope

      public override fun hasScopeAnnotation(): Boolean = false

      public override fun hasSingletonAnnotation(): Boolean = false

      public override fun hasReleasableAnnotation(): Boolean = false

      public override fun hasProvidesSingletonAnnotation(): Boolean = false

      public override fun hasProvidesReleasableAnnotation(): Boolean = false
    }
    ");
}

#[test]
fn test_member_injection_inherited_from_superclass() {
    let source = emit(
        r#"
        [[class]]
        name = "test.TestAClassThatNeedsInjection"
        supertypes = ["test.SuperClassThatNeedsInjection"]
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]

        [[class]]
        name = "test.SuperClassThatNeedsInjection"
        methods = [{ name = "countLetters", annotations = ["javax.inject.Inject"] }]
        "#,
    );

    assert!(source.contains(
        "  private val memberInjector: MemberInjector<SuperClassThatNeedsInjection> =\n\
         \x20     test.SuperClassThatNeedsInjection__MemberInjector()\n"
    ));
    assert!(source.contains("    memberInjector.inject(instance, scope)\n"));
}

#[test]
fn test_no_member_injection_without_injected_members() {
    let source = emit(
        r#"
        [[class]]
        name = "test.Plain"
        supertypes = ["test.Base"]
        fields = [{ name = "message", type = "kotlin.String" }]
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]

        [[class]]
        name = "test.Base"
        "#,
    );

    assert!(!source.contains("memberInjector"));
    assert!(!source.contains("MemberInjector"));
}

#[test]
fn test_root_scope() {
    let source = emit(
        r#"
        [[class]]
        name = "test.Root"
        annotations = ["javax.inject.Singleton"]
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        "#,
    );

    assert!(source.contains("  public override fun getTargetScope(scope: Scope): Scope = scope.rootScope\n"));
    assert!(source.contains("  public override fun hasScopeAnnotation(): Boolean = true\n"));
    assert!(source.contains("  public override fun hasSingletonAnnotation(): Boolean = true\n"));
}

#[test]
fn test_custom_scope() {
    let source = emit(
        r#"
        [[class]]
        name = "test.scopes.ActivityScope"
        kind = "annotation"
        annotations = ["javax.inject.Scope"]

        [[class]]
        name = "test.Scoped"
        annotations = ["test.scopes.ActivityScope"]
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        "#,
    );

    assert!(source.contains("import test.scopes.ActivityScope\n"));
    assert!(source.contains(
        "  public override fun getTargetScope(scope: Scope): Scope =\
         \x20scope.getParentScope(ActivityScope::class.java)\n"
    ));
    assert!(source.contains("  public override fun hasScopeAnnotation(): Boolean = true\n"));
    assert!(source.contains("  public override fun hasSingletonAnnotation(): Boolean = false\n"));
}

#[test]
fn test_lifecycle_flags_are_independent() {
    let source = emit(
        r#"
        [[class]]
        name = "test.Flags"
        annotations = ["toothpick.Releasable", "toothpick.ProvidesSingleton"]
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        "#,
    );

    assert!(source.contains("hasSingletonAnnotation(): Boolean = false\n"));
    assert!(source.contains("hasReleasableAnnotation(): Boolean = true\n"));
    assert!(source.contains("hasProvidesSingletonAnnotation(): Boolean = true\n"));
    assert!(source.contains("hasProvidesReleasableAnnotation(): Boolean = false\n"));
}

#[test]
fn test_owner_named_like_runtime_type_is_qualified() {
    let source = emit(
        r#"
        [[class]]
        name = "test.Scope"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        "#,
    );

    assert!(source.contains(
        "  public override fun createInstance(scope: toothpick.Scope): Scope {\n"
    ));
    assert!(!source.contains("import toothpick.Scope"));
}

#[test]
fn test_emission_is_idempotent() {
    let src = r#"
        [[class]]
        name = "test.Idem"
        annotations = ["javax.inject.Singleton"]
        fields = [{ name = "dep", type = "kotlin.String", annotations = ["javax.inject.Inject"] }]
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [{ name = "lazy", type = "toothpick.Lazy<kotlin.String>" }]
    "#;

    assert_eq!(emit(src), emit(src));
}

#[test]
fn test_round_with_violation_emits_nothing() {
    let g = graph(
        r#"
        [[class]]
        name = "test.Good"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]

        [[class]]
        name = "test.Bad"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [{ name = "messages", type = "toothpick.Lazy<kotlin.collections.List<kotlin.String>>" }]
        "#,
    );
    let emitter = KotlinFactoryEmitter::default();

    let outcome = BatchDriver::new(&emitter).run(&g).unwrap();

    assert!(outcome.emitted.is_empty());
    assert_eq!(
        outcome.failed().map(ToString::to_string).as_deref(),
        Some(
            "Lazy/Provider test.Bad.messages is not valid in <init>. \
             Lazy/Provider cannot be used on generic types."
        )
    );
}

#[test]
fn test_valid_round_emits_one_file_per_target() {
    let g = graph(
        r#"
        [[class]]
        name = "test.A"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]

        [[class]]
        name = "test.B"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [{ name = "a", type = "test.A" }]
        "#,
    );
    let emitter = KotlinFactoryEmitter::default();

    let outcome = BatchDriver::new(&emitter).run(&g).unwrap();

    let paths: Vec<_> = outcome.emitted.iter().map(|a| a.path()).collect();
    assert_eq!(
        paths,
        [
            std::path::PathBuf::from("test/A__Factory.kt"),
            std::path::PathBuf::from("test/B__Factory.kt"),
        ]
    );
    assert!(outcome.emitted[1].content.contains("scope.getInstance(A::class.java)"));
}

#[test]
fn test_package_class_hiding_default_import() {
    let source = emit(
        r#"
        [[class]]
        name = "test.String"

        [[class]]
        name = "test.TestShadowedParameter"
        [[class.constructors]]
        annotations = ["javax.inject.Inject"]
        params = [
            { name = "message", type = "kotlin.String" },
            { name = "value", type = "kotlin.Int" },
        ]
        "#,
    );

    assert!(source.contains("import kotlin.String\n"));
    assert!(!source.contains("import kotlin.Int"));
    assert!(source.contains("    val param0 = scope.getInstance(String::class.java)\n"));
    assert!(source.contains("    val param1 = scope.getInstance(Int::class.java)\n"));
}
