//! Injection targets.
//!
//! One [`InjectionTarget`] is resolved per class with an injected constructor.
//! Targets are built once per round and never mutated afterwards.

use serde::Serialize;

use crate::{ClassName, TypeName};

/// Resolved description of how to build and wire one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectionTarget {
    /// The class being constructed.
    pub owner: ClassName,
    /// Index of the injected constructor among the owner's constructors.
    pub constructor: usize,
    /// Scope-restricting annotation found on the owner.
    pub scope_marker: Option<ScopeMarker>,
    pub singleton: bool,
    pub releasable: bool,
    pub provides_singleton_in_scope: bool,
    pub provides_releasable: bool,
    /// The injected constructor declares thrown types.
    pub throws_throwable: bool,
    /// Nearest class, starting at the owner, with injected fields or methods.
    pub member_injection_owner: Option<ClassName>,
    /// Constructor parameters, in positional order.
    pub parameters: Vec<ParamTarget>,
    /// Simple names of the other known classes in the owner's package.
    #[serde(skip)]
    pub sibling_names: Vec<String>,
}

impl InjectionTarget {
    /// Name of the generated factory class.
    pub fn factory_name(&self) -> ClassName {
        self.owner.with_suffix("__Factory")
    }

    /// Name of the companion member injector, if one is needed.
    pub fn member_injector_name(&self) -> Option<ClassName> {
        self.member_injection_owner
            .as_ref()
            .map(|owner| owner.with_suffix("__MemberInjector"))
    }

    pub fn has_scope_annotation(&self) -> bool {
        self.scope_marker.is_some()
    }

    /// Whether `createInstance` has to move to the target scope first.
    pub fn needs_target_scope(&self) -> bool {
        !self.parameters.is_empty() || self.member_injection_owner.is_some()
    }
}

/// The scope annotation of a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeMarker {
    pub name: ClassName,
    /// The marker designates the root scope.
    pub root: bool,
}

/// One constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamTarget {
    pub name: String,
    pub declared_type: TypeName,
    /// The type looked up in the scope: the wrapped type for `Lazy`/`Provider`.
    pub resolved_type: TypeName,
    pub kind: ParamKind,
    /// Named binding discriminator. Never populated yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier_name: Option<String>,
}

/// How a parameter is obtained from the scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Instance,
    Lazy,
    Provider,
}

impl ParamKind {
    /// The `Scope` method that resolves this kind.
    pub fn scope_getter(&self) -> &'static str {
        match self {
            ParamKind::Instance => "getInstance",
            ParamKind::Lazy => "getLazy",
            ParamKind::Provider => "getProvider",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Instance => "instance",
            ParamKind::Lazy => "lazy",
            ParamKind::Provider => "provider",
        }
    }

    pub fn is_wrapper(&self) -> bool {
        !matches!(self, ParamKind::Instance)
    }
}
