//! Type references.
//!
//! Types are written as strings in the graph file, e.g.
//! `toothpick.Lazy<kotlin.collections.List<kotlin.String>>` or `kotlin.String?`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A nominal type reference with optional type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    name: String,
    arguments: Vec<TypeRef>,
    nullable: bool,
}

impl TypeRef {
    /// A type without arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// A parameterized type.
    pub fn generic(name: impl Into<String>, arguments: impl IntoIterator<Item = TypeRef>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into_iter().collect(),
            nullable: false,
        }
    }

    /// Mark the type as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Fully-qualified name without arguments.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[TypeRef] {
        &self.arguments
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Package part of the name.
    pub fn package(&self) -> &str {
        pickgen_core::package_of(&self.name)
    }

    /// Last segment of the name.
    pub fn simple_name(&self) -> &str {
        pickgen_core::simple_name_of(&self.name)
    }

    /// This type followed by every nested type argument, depth first.
    pub fn walk(&self) -> Vec<&TypeRef> {
        let mut out = vec![self];
        for argument in &self.arguments {
            out.extend(argument.walk());
        }
        out
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
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
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// Error produced when a type reference string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeRefError {
    #[error("type reference is empty")]
    Empty,

    #[error("expected a type name at offset {0}")]
    ExpectedName(usize),

    #[error("unexpected '{found}' at offset {offset}")]
    Unexpected { found: char, offset: usize },

    #[error("unclosed type argument list")]
    Unclosed,

    #[error("type arguments nested deeper than {MAX_TYPE_DEPTH} levels")]
    TooDeep,
}

/// Deepest accepted nesting of type argument lists.
pub const MAX_TYPE_DEPTH: usize = 64;

impl FromStr for TypeRef {
    type Err = TypeRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(TypeRefError::Empty);
        }
        let mut parser = Parser {
            src: s,
            pos: 0,
            depth: 0,
        };
        let ty = parser.type_ref()?;
        parser.skip_whitespace();
        match parser.peek() {
            None => Ok(ty),
            Some(found) => Err(TypeRefError::Unexpected {
                found,
                offset: parser.pos,
            }),
        }
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn type_ref(&mut self) -> Result<TypeRef, TypeRefError> {
        self.skip_whitespace();
        let name = self.qualified_name()?;
        let mut ty = TypeRef::new(name);

        self.skip_whitespace();
        if self.peek() == Some('<') {
            self.bump();
            self.depth += 1;
            if self.depth > MAX_TYPE_DEPTH {
                return Err(TypeRefError::TooDeep);
            }
            loop {
                ty.arguments.push(self.type_ref()?);
                self.skip_whitespace();
                match self.peek() {
                    Some(',') => self.bump(),
                    Some('>') => {
                        self.bump();
                        break;
                    }
                    Some(found) => {
                        return Err(TypeRefError::Unexpected {
                            found,
                            offset: self.pos,
                        });
                    }
                    None => return Err(TypeRefError::Unclosed),
                }
            }
            self.depth -= 1;
            self.skip_whitespace();
        }

        if self.peek() == Some('?') {
            self.bump();
            ty.nullable = true;
        }
        Ok(ty)
    }

    fn qualified_name(&mut self) -> Result<String, TypeRefError> {
        let start = self.pos;
        loop {
            let segment_start = self.pos;
            match self.peek() {
                Some(c) if is_identifier_start(c) => self.bump(),
                _ => return Err(TypeRefError::ExpectedName(segment_start)),
            }
            while self.peek().is_some_and(is_identifier_continue) {
                self.bump();
            }
            if self.peek() != Some('.') {
                break;
            }
            self.bump();
        }
        Ok(self.src[start..self.pos].to_string())
    }
}

pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

pub(crate) fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid type '{text}': {e}")))
    }
}

impl Serialize for TypeRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
