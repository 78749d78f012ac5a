use std::path::PathBuf;

use serde::Serialize;

/// Rendered source of one generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceArtifact {
    pub package_name: String,
    /// File name without extension (`Foo__Factory`).
    pub file_name: String,
    /// Extension without the dot (`kt`, `java`).
    pub extension: &'static str,
    pub content: String,
}

impl SourceArtifact {
    /// Path relative to an output root: `<package dirs>/<file name>.<extension>`.
    pub fn path(&self) -> PathBuf {
        let mut path: PathBuf = self
            .package_name
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(format!("{}.{}", self.file_name, self.extension));
        path
    }

    /// Fully-qualified name of the generated type.
    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.file_name.clone()
        } else {
            format!("{}.{}", self.package_name, self.file_name)
        }
    }
}
