//! Injection target resolution.
//!
//! Resolution is a pure function of the graph: every ready constructor carrying
//! the injection marker yields one [`ResolvedTarget`], in query order.

use pickgen_graph::{
    ClassId, ClassKind, DeclRef, DeclarationGraph, MAX_ANCESTOR_DEPTH, Markers, ParamDecl,
    TypeRef,
};
use pickgen_ir::{ClassName, InjectionTarget, ParamKind, ParamTarget, ScopeMarker, TypeName};
use serde::Serialize;
use tracing::{debug, warn};

/// An injection target together with the constructor it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    pub decl: DeclRef,
    pub class: ClassId,
    #[serde(flatten)]
    pub target: InjectionTarget,
}

/// Resolve every ready declaration. Non-constructor declarations are skipped.
pub fn resolve_all(graph: &DeclarationGraph, ready: &[DeclRef]) -> Vec<ResolvedTarget> {
    ready
        .iter()
        .filter_map(|&decl| resolve(graph, decl))
        .collect()
}

/// Resolve one declaration. Returns `None` unless it is a constructor.
pub fn resolve(graph: &DeclarationGraph, decl: DeclRef) -> Option<ResolvedTarget> {
    let DeclRef::Constructor { class, index } = decl else {
        return None;
    };
    let markers = graph.markers();
    let owner = graph.class(class);
    let constructor = graph.constructor(class, index)?;

    let target = InjectionTarget {
        owner: ClassName::from_qualified(&owner.name),
        constructor: index,
        scope_marker: scope_marker(graph, &owner.annotations),
        singleton: owner.has_annotation(&markers.singleton),
        releasable: owner.has_annotation(&markers.releasable),
        provides_singleton_in_scope: owner.has_annotation(&markers.provides_singleton),
        provides_releasable: owner.has_annotation(&markers.provides_releasable),
        throws_throwable: !constructor.throws.is_empty(),
        member_injection_owner: member_injection_owner(graph, class)
            .map(|id| ClassName::from_qualified(&graph.class(id).name)),
        parameters: constructor
            .params
            .iter()
            .map(|param| param_target(param, markers))
            .collect(),
        sibling_names: sibling_names(graph, class),
    };

    debug!(
        class = %owner.name,
        parameters = target.parameters.len(),
        member_injection = target.member_injection_owner.is_some(),
        "resolved injection target"
    );

    Some(ResolvedTarget {
        decl,
        class,
        target,
    })
}

/// Simple names of the classes sharing a package with `class`, sorted.
fn sibling_names(graph: &DeclarationGraph, class: ClassId) -> Vec<String> {
    let owner = &graph.class(class).name;
    let package = pickgen_core::package_of(owner);
    let mut names: Vec<String> = graph
        .classes()
        .filter(|(id, decl)| *id != class && pickgen_core::package_of(&decl.name) == package)
        .map(|(_, decl)| pickgen_core::simple_name_of(&decl.name).to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Classify a constructor parameter by its declared wrapper type.
pub fn param_target(param: &ParamDecl, markers: &Markers) -> ParamTarget {
    let declared_type = type_name(&param.ty);
    let kind = if param.ty.name() == markers.lazy {
        ParamKind::Lazy
    } else if param.ty.name() == markers.provider {
        ParamKind::Provider
    } else {
        ParamKind::Instance
    };
    let resolved_type = match kind {
        ParamKind::Instance => declared_type.clone(),
        ParamKind::Lazy | ParamKind::Provider => param
            .ty
            .arguments()
            .first()
            .map(type_name)
            .unwrap_or_else(|| declared_type.clone()),
    };

    ParamTarget {
        name: param.name.clone(),
        declared_type,
        resolved_type,
        kind,
        qualifier_name: None,
    }
}

fn type_name(ty: &TypeRef) -> TypeName {
    TypeName::generic(ty.name(), ty.arguments().iter().map(type_name))
}

/// First class annotation that is the root scope marker or an annotation class
/// carrying the scope meta-annotation.
fn scope_marker(graph: &DeclarationGraph, annotations: &[String]) -> Option<ScopeMarker> {
    let markers = graph.markers();
    annotations.iter().find_map(|annotation| {
        let root = *annotation == markers.root_scope;
        let is_scope = root
            || graph.find(annotation).is_some_and(|id| {
                let decl = graph.class(id);
                decl.kind == ClassKind::Annotation && decl.has_annotation(&markers.scope)
            });
        is_scope.then(|| ScopeMarker {
            name: ClassName::from_qualified(annotation),
            root,
        })
    })
}

/// Walk from `start` up the superclass chain to the first class declaring
/// injected fields or methods.
pub fn member_injection_owner(graph: &DeclarationGraph, start: ClassId) -> Option<ClassId> {
    let marker = &graph.markers().inject;
    let mut current = start;
    for _ in 0..MAX_ANCESTOR_DEPTH {
        if graph.class(current).has_injected_members(marker) {
            return Some(current);
        }
        current = graph.superclass(current)?;
    }

    warn!(
        class = %graph.class(start).name,
        depth = MAX_ANCESTOR_DEPTH,
        "superclass chain too deep, assuming a cycle and skipping member injection"
    );
    None
}
