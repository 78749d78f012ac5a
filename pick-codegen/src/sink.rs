//! Output sinks for emitted artifacts.

use std::path::PathBuf;

use eyre::{Result, WrapErr};
use pickgen_core::{File, WriteResult};
use pickgen_ir::SourceArtifact;
use tracing::debug;

/// Destination of emitted artifacts.
pub trait OutputSink {
    /// Write one artifact, returning where it went and what happened.
    fn write(&self, artifact: &SourceArtifact) -> Result<(PathBuf, WriteResult)>;
}

/// Writes each artifact below a root directory, one file per artifact,
/// mirroring the package structure.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
    header: Option<&'static str>,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            header: None,
        }
    }

    /// Prepend a comment line to every file.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}

impl OutputSink for DirectorySink {
    fn write(&self, artifact: &SourceArtifact) -> Result<(PathBuf, WriteResult)> {
        let path = self.root.join(artifact.path());
        let result = File::new(&path, artifact.content.as_str())
            .with_header(self.header)
            .write()
            .wrap_err_with(|| format!("failed to write {}", artifact.qualified_name()))?;
        debug!(path = %path.display(), ?result, "wrote artifact");
        Ok((path, result))
    }
}
