//! Class and type names.

use std::fmt;

use serde::Serialize;

/// A class name split into package and simple name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClassName {
    /// Package (empty for the default package).
    pub package: String,
    /// Simple name.
    pub simple: String,
}

impl ClassName {
    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple: simple.into(),
        }
    }

    /// Split a fully-qualified name at its last dot.
    pub fn from_qualified(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((package, simple)) => Self::new(package, simple),
            None => Self::new("", qualified),
        }
    }

    /// Fully-qualified name.
    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.simple.clone()
        } else {
            format!("{}.{}", self.package, self.simple)
        }
    }

    /// A class in the same package whose simple name is this one plus `suffix`.
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self::new(self.package.clone(), format!("{}{}", self.simple, suffix))
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}.", self.package)?;
        }
        f.write_str(&self.simple)
    }
}

/// A type as seen by the emitters: a class with optional type arguments.
///
/// Nullability is dropped; lookups happen by class literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeName {
    pub class: ClassName,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeName>,
}

impl TypeName {
    pub fn new(qualified: &str) -> Self {
        Self {
            class: ClassName::from_qualified(qualified),
            arguments: Vec::new(),
        }
    }

    pub fn generic(qualified: &str, arguments: impl IntoIterator<Item = TypeName>) -> Self {
        Self {
            class: ClassName::from_qualified(qualified),
            arguments: arguments.into_iter().collect(),
        }
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Every class mentioned by this type, outermost first.
    pub fn classes(&self) -> Vec<&ClassName> {
        let mut out = vec![&self.class];
        for argument in &self.arguments {
            out.extend(argument.classes());
        }
        out
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class)?;
        if !self.arguments.is_empty() {
            f.write_str("<")?;
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{argument}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}
