//! The declaration graph and its queries.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    ClassDecl, ClassKind, ConstructorDecl, FieldDecl, GraphOptions, Markers, MethodDecl, TypeRef,
};

/// Upper bound on superclass hops, in case the input is cyclic.
pub const MAX_ANCESTOR_DEPTH: usize = 256;

/// Opaque handle to a class of a [`DeclarationGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClassId(usize);

/// Handle to an annotated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclRef {
    Class(ClassId),
    Constructor { class: ClassId, index: usize },
    Field { class: ClassId, index: usize },
    Method { class: ClassId, index: usize },
}

impl DeclRef {
    /// The class that owns (or is) this declaration.
    pub fn enclosing_class(&self) -> ClassId {
        match *self {
            DeclRef::Class(class)
            | DeclRef::Constructor { class, .. }
            | DeclRef::Field { class, .. }
            | DeclRef::Method { class, .. } => class,
        }
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self, DeclRef::Constructor { .. })
    }
}

/// Read-only model of the declarations of one compilation round.
#[derive(Debug, Clone)]
pub struct DeclarationGraph {
    options: GraphOptions,
    markers: Markers,
    classes: IndexMap<String, ClassDecl>,
}

impl DeclarationGraph {
    /// Build a graph from already validated declarations.
    pub(crate) fn new(options: GraphOptions, markers: Markers, classes: Vec<ClassDecl>) -> Self {
        let classes = classes
            .into_iter()
            .map(|class| (class.name.clone(), class))
            .collect();
        Self {
            options,
            markers,
            classes,
        }
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All classes in file order.
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassDecl)> {
        self.classes
            .values()
            .enumerate()
            .map(|(i, class)| (ClassId(i), class))
    }

    pub fn class(&self, id: ClassId) -> &ClassDecl {
        &self.classes[id.0]
    }

    /// Look up a class by fully-qualified name.
    pub fn find(&self, name: &str) -> Option<ClassId> {
        self.classes.get_index_of(name).map(ClassId)
    }

    /// Constructor behind a [`DeclRef::Constructor`] handle.
    pub fn constructor(&self, class: ClassId, index: usize) -> Option<&ConstructorDecl> {
        self.class(class).constructors.get(index)
    }

    /// Every declaration carrying `annotation`, in file order: the class itself,
    /// then its constructors, fields and methods.
    pub fn symbols_with_annotation(&self, annotation: &str) -> Vec<DeclRef> {
        let mut out = Vec::new();
        for (class_id, class) in self.classes() {
            if class.has_annotation(annotation) {
                out.push(DeclRef::Class(class_id));
            }
            out.extend(
                indices(&class.constructors, |c: &ConstructorDecl| c.has_annotation(annotation))
                    .map(|index| DeclRef::Constructor {
                        class: class_id,
                        index,
                    }),
            );
            out.extend(
                indices(&class.fields, |f: &FieldDecl| f.has_annotation(annotation))
                    .map(|index| DeclRef::Field {
                        class: class_id,
                        index,
                    }),
            );
            out.extend(
                indices(&class.methods, |m: &MethodDecl| m.has_annotation(annotation))
                    .map(|index| DeclRef::Method {
                        class: class_id,
                        index,
                    }),
            );
        }
        out
    }

    /// Whether a type name is known: declared in the graph or on the classpath.
    pub fn is_resolved(&self, name: &str) -> bool {
        self.classes.contains_key(name)
            || self
                .options
                .classpath
                .iter()
                .any(|package| pickgen_core::is_in_package(name, package))
    }

    /// True iff every type the declaration refers to is resolved.
    ///
    /// Declarations failing this are not errors; the host retries them in a
    /// later round.
    pub fn validate(&self, decl: DeclRef) -> bool {
        let class = self.class(decl.enclosing_class());
        let supertypes_ok = class.supertypes.iter().all(|t| self.is_type_resolved(t));

        let own_types_ok = match decl {
            DeclRef::Class(_) => true,
            DeclRef::Constructor { index, .. } => class.constructors.get(index).is_some_and(|c| {
                c.params
                    .iter()
                    .map(|p| &p.ty)
                    .chain(&c.throws)
                    .all(|t| self.is_type_resolved(t))
            }),
            DeclRef::Field { index, .. } => class
                .fields
                .get(index)
                .is_some_and(|f| self.is_type_resolved(&f.ty)),
            DeclRef::Method { index, .. } => class
                .methods
                .get(index)
                .is_some_and(|m| m.params.iter().all(|p| self.is_type_resolved(&p.ty))),
        };

        supertypes_ok && own_types_ok
    }

    fn is_type_resolved(&self, ty: &TypeRef) -> bool {
        ty.walk().into_iter().all(|t| self.is_resolved(t.name()))
    }

    /// The direct superclass: the first supertype declared in the graph as a
    /// class (interfaces are skipped).
    pub fn superclass(&self, id: ClassId) -> Option<ClassId> {
        self.class(id).supertypes.iter().find_map(|ty| {
            self.find(ty.name())
                .filter(|&candidate| self.class(candidate).kind == ClassKind::Class)
        })
    }

    /// Human-readable location of a declaration (`test.Foo.<init>#0`).
    pub fn describe(&self, decl: DeclRef) -> String {
        let class = self.class(decl.enclosing_class());
        match decl {
            DeclRef::Class(_) => class.name.clone(),
            DeclRef::Constructor { index, .. } => format!("{}.<init>#{}", class.name, index),
            DeclRef::Field { index, .. } => {
                format!("{}.{}", class.name, class.fields[index].name)
            }
            DeclRef::Method { index, .. } => {
                format!("{}.{}()", class.name, class.methods[index].name)
            }
        }
    }
}

fn indices<'a, T>(
    items: &'a [T],
    predicate: impl Fn(&T) -> bool + 'a,
) -> impl Iterator<Item = usize> + 'a {
    items
        .iter()
        .enumerate()
        .filter(move |(_, item)| predicate(*item))
        .map(|(index, _)| index)
}
