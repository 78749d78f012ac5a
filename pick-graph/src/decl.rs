//! Declarations as they appear in the graph file.

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// Declared visibility of a class or member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    /// Module-visible (Kotlin `internal`, Java package-private).
    #[serde(alias = "package")]
    Internal,
    Protected,
    Private,
}

impl Visibility {
    /// Public or module/package visible.
    pub fn is_module_visible(&self) -> bool {
        matches!(self, Visibility::Public | Visibility::Internal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// Kind of a class-like declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Annotation,
}

/// A class, interface or annotation class.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDecl {
    /// Fully-qualified name.
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub visibility: Visibility,
    /// Fully-qualified names of the annotations on the class.
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Direct supertypes, in declaration order.
    #[serde(default)]
    pub supertypes: Vec<TypeRef>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDecl>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn package(&self) -> &str {
        pickgen_core::package_of(&self.name)
    }

    pub fn simple_name(&self) -> &str {
        pickgen_core::simple_name_of(&self.name)
    }

    pub fn has_annotation(&self, qualified: &str) -> bool {
        has_annotation(&self.annotations, qualified)
    }

    /// Whether any field or non-constructor method carries `marker`.
    pub fn has_injected_members(&self, marker: &str) -> bool {
        self.fields.iter().any(|f| f.has_annotation(marker))
            || self.methods.iter().any(|m| m.has_annotation(marker))
    }
}

/// A constructor of a class.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    /// Declared thrown types.
    #[serde(default)]
    pub throws: Vec<TypeRef>,
}

impl ConstructorDecl {
    pub fn has_annotation(&self, qualified: &str) -> bool {
        has_annotation(&self.annotations, qualified)
    }
}

/// A field (Kotlin property) of a class.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl FieldDecl {
    pub fn has_annotation(&self, qualified: &str) -> bool {
        has_annotation(&self.annotations, qualified)
    }
}

/// A method of a class.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
}

impl MethodDecl {
    pub fn has_annotation(&self, qualified: &str) -> bool {
        has_annotation(&self.annotations, qualified)
    }
}

/// A formal parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

// Annotation identity is the fully-qualified name, never the short name.
fn has_annotation(annotations: &[String], qualified: &str) -> bool {
    annotations.iter().any(|a| a == qualified)
}
