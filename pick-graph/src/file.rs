use std::path::{Path, PathBuf};

use crate::{DeclarationGraph, Error, Result, parse::parse_graph};

/// A graph file on disk, keeping the raw text next to the parsed graph.
#[derive(Debug)]
pub struct GraphFile {
    path: PathBuf,
    content: String,
    graph: DeclarationGraph,
}

impl GraphFile {
    /// Open and parse a graph file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let graph = parse_graph(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            graph,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn graph(&self) -> &DeclarationGraph {
        &self.graph
    }

    /// Directory the graph file lives in, used to resolve relative output paths.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file() {
        let err = GraphFile::open("/definitely/not/here/pick.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
