//! Import collection for JVM source files.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use pickgen_ir::ClassName;

/// Tracks the classes a generated file refers to and decides how each one is
/// written: by simple name (imported or implicitly visible) or fully qualified
/// when its simple name is already taken by another class.
///
/// # Example
///
/// ```
/// use pickgen_codegen::builder::ImportCollector;
/// use pickgen_ir::ClassName;
///
/// let mut imports = ImportCollector::new("test").implicit("kotlin");
/// assert_eq!(imports.name(&ClassName::new("toothpick", "Scope")), "Scope");
/// assert_eq!(imports.name(&ClassName::new("kotlin", "String")), "String");
/// assert_eq!(imports.name(&ClassName::new("other", "Scope")), "other.Scope");
/// assert_eq!(imports.imports(), ["toothpick.Scope"]);
/// ```
#[derive(Debug, Clone)]
pub struct ImportCollector {
    package: String,
    implicit: Vec<String>,
    explicit: BTreeSet<String>,
    /// Simple names declared in `package` itself
    shadowed: BTreeSet<String>,
    /// Simple name -> class that owns it in this file
    names: IndexMap<String, ClassName>,
}

impl ImportCollector {
    /// A collector for a file in `package`.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            implicit: Vec::new(),
            explicit: BTreeSet::new(),
            shadowed: BTreeSet::new(),
            names: IndexMap::new(),
        }
    }

    /// Treat a package as visible without imports.
    pub fn implicit(mut self, package: impl Into<String>) -> Self {
        self.implicit.push(package.into());
        self
    }

    /// Reserve a simple name without importing anything (the generated class).
    pub fn reserve(&mut self, class: &ClassName) {
        self.names
            .entry(class.simple.clone())
            .or_insert_with(|| class.clone());
    }

    /// Declare classes of the file's own package. They hide same-named classes
    /// of implicit packages, which then need an explicit import.
    pub fn shadow<I, S>(&mut self, simple_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shadowed.extend(simple_names.into_iter().map(Into::into));
    }

    /// Register `class` and return how to spell it in the file.
    pub fn name(&mut self, class: &ClassName) -> String {
        match self.names.get(&class.simple) {
            Some(owner) if owner == class => class.simple.clone(),
            Some(_) => class.qualified(),
            None => {
                if class.package != self.package && self.shadowed.contains(&class.simple) {
                    self.explicit.insert(class.qualified());
                }
                self.names.insert(class.simple.clone(), class.clone());
                class.simple.clone()
            }
        }
    }

    /// Register a class that is imported even when its package is implicit.
    pub fn name_explicit(&mut self, class: &ClassName) -> String {
        let name = self.name(class);
        if name == class.simple {
            self.explicit.insert(class.qualified());
        }
        name
    }

    /// Fully-qualified names to import, sorted.
    pub fn imports(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .names
            .values()
            .filter(|class| self.needs_import(class))
            .map(ClassName::qualified)
            .collect();
        out.sort();
        out
    }

    fn needs_import(&self, class: &ClassName) -> bool {
        if class.package.is_empty() || class.package == self.package {
            return false;
        }
        self.explicit.contains(&class.qualified())
            || !self.implicit.iter().any(|p| p == &class.package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_package_not_imported() {
        let mut imports = ImportCollector::new("test");
        assert_eq!(imports.name(&ClassName::new("test", "Foo")), "Foo");
        assert!(imports.imports().is_empty());
    }

    #[test]
    fn test_imports_are_sorted() {
        let mut imports = ImportCollector::new("test");
        imports.name(&ClassName::new("toothpick", "Scope"));
        imports.name(&ClassName::new("toothpick", "Factory"));
        imports.name(&ClassName::new("kotlin", "Boolean"));
        assert_eq!(
            imports.imports(),
            ["kotlin.Boolean", "toothpick.Factory", "toothpick.Scope"]
        );
    }

    #[test]
    fn test_conflicting_simple_name_is_qualified() {
        let mut imports = ImportCollector::new("test");
        let own = ClassName::new("test", "Scope");
        imports.reserve(&own);
        assert_eq!(
            imports.name(&ClassName::new("toothpick", "Scope")),
            "toothpick.Scope"
        );
        assert_eq!(imports.name(&own), "Scope");
        assert!(imports.imports().is_empty());
    }

    #[test]
    fn test_explicit_import_from_implicit_package() {
        let mut imports = ImportCollector::new("test").implicit("kotlin");
        assert_eq!(
            imports.name_explicit(&ClassName::new("kotlin", "Boolean")),
            "Boolean"
        );
        assert_eq!(imports.name(&ClassName::new("kotlin", "Int")), "Int");
        assert_eq!(imports.imports(), ["kotlin.Boolean"]);
    }

    #[test]
    fn test_package_class_hides_implicit_class() {
        let mut imports = ImportCollector::new("test").implicit("kotlin");
        imports.shadow(["String", "Bar"]);
        assert_eq!(imports.name(&ClassName::new("kotlin", "String")), "String");
        assert_eq!(imports.name(&ClassName::new("kotlin", "Int")), "Int");
        assert_eq!(imports.name(&ClassName::new("test", "Bar")), "Bar");
        assert_eq!(imports.imports(), ["kotlin.String"]);
    }

    #[test]
    fn test_package_class_used_next_to_implicit_class() {
        let mut imports = ImportCollector::new("test").implicit("kotlin");
        imports.shadow(["String"]);
        assert_eq!(imports.name(&ClassName::new("test", "String")), "String");
        assert_eq!(
            imports.name(&ClassName::new("kotlin", "String")),
            "kotlin.String"
        );
        assert!(imports.imports().is_empty());
    }
}
