//! Graph parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use miette::SourceSpan;
use serde::Deserialize;

use crate::{
    ClassDecl, DeclarationGraph, Error, GraphOptions, Markers, Result,
    error::SourceContext,
    types::{is_identifier_continue, is_identifier_start},
};

/// Root of a graph file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphDocument {
    #[serde(default)]
    options: GraphOptions,
    #[serde(default)]
    markers: Markers,
    #[serde(default, rename = "class")]
    classes: Vec<ClassDecl>,
}

impl FromStr for DeclarationGraph {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_graph(s, "pick.toml")
    }
}

impl DeclarationGraph {
    /// Parse a graph file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_graph(&content, &path.display().to_string())
    }

    /// Parse a graph from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_graph(content, filename)
    }
}

pub(crate) fn parse_graph(content: &str, filename: &str) -> Result<DeclarationGraph> {
    let source = SourceContext::new(content, filename);
    let document: GraphDocument = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_document(&document, &source)?;
    Ok(DeclarationGraph::new(
        document.options,
        document.markers,
        document.classes,
    ))
}

fn validate_document(document: &GraphDocument, source: &SourceContext) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for class in &document.classes {
        check_qualified(source, &class.name, "class")?;
        for annotation in &class.annotations {
            check_qualified(source, annotation, "annotation")?;
        }
        for field in &class.fields {
            check_simple(source, &field.name, "field")?;
        }
        for method in &class.methods {
            check_simple(source, &method.name, "method")?;
        }
        let params = class
            .constructors
            .iter()
            .flat_map(|c| &c.params)
            .chain(class.methods.iter().flat_map(|m| &m.params));
        for param in params {
            check_simple(source, &param.name, "parameter")?;
        }

        let count = seen.entry(class.name.as_str()).or_insert(0);
        *count += 1;
        if *count > 1 {
            return Err(source.duplicate_class_error(
                &class.name,
                find_quoted_span(source.src(), &class.name, 0),
                find_quoted_span(source.src(), &class.name, *count - 1),
            ));
        }
    }
    Ok(())
}

fn check_qualified(source: &SourceContext, name: &str, context: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name cannot be empty".to_string())
    } else {
        name.split('.').find_map(identifier_problem)
    };
    match reason {
        Some(reason) => Err(source.invalid_name_error(
            name,
            context,
            reason,
            find_quoted_span(source.src(), name, 0),
        )),
        None => Ok(()),
    }
}

fn check_simple(source: &SourceContext, name: &str, context: &str) -> Result<()> {
    match identifier_problem(name) {
        Some(reason) => Err(source.invalid_name_error(
            name,
            context,
            reason,
            find_quoted_span(source.src(), name, 0),
        )),
        None => Ok(()),
    }
}

fn identifier_problem(segment: &str) -> Option<String> {
    let mut chars = segment.chars();
    match chars.next() {
        None => Some("name contains an empty segment".to_string()),
        Some(c) if !is_identifier_start(c) => Some(format!("'{}' cannot start a name", c)),
        Some(_) => chars
            .find(|c| !is_identifier_continue(*c))
            .map(|c| format!("'{}' is not allowed in a name", c)),
    }
}

/// Span of the `occurrence`-th quoted `"text"` in the source (the quotes excluded).
fn find_quoted_span(src: &str, text: &str, occurrence: usize) -> Option<SourceSpan> {
    let needle = format!("\"{}\"", text);
    src.match_indices(&needle)
        .nth(occurrence)
        .map(|(offset, _)| SourceSpan::from((offset + 1, text.len())))
}
