use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the exact content and was left untouched
    Unchanged,
}

/// A generated file, always overwritten unless its content is identical.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    header: Option<&'static str>,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            header: None,
        }
    }

    /// Comment line written before the content.
    pub fn with_header(mut self, header: Option<&'static str>) -> Self {
        self.header = header;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Content as written, header included.
    pub fn rendered(&self) -> String {
        match self.header {
            Some(header) => format!("{header}\n{}", self.content),
            None => self.content.clone(),
        }
    }

    pub fn write(&self) -> Result<WriteResult> {
        let content = self.rendered();

        // Identical output keeps its timestamp so incremental builds stay quiet.
        if fs::read_to_string(&self.path).is_ok_and(|existing| existing == content) {
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &content)?;
        Ok(WriteResult::Written)
    }
}

/// The handle is opened, written, flushed and dropped within this call.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    let handle = fs::File::create(path)
        .wrap_err_with(|| format!("failed to create '{}'", path.display()))?;
    let mut writer = BufWriter::new(handle);
    writer.write_all(content.as_bytes())?;
    writer
        .flush()
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_same_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let file = File::new(&path, "same");
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_file_write_prepends_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("with_header.kt");

        let file = File::new(&path, "class A\n").with_header(Some("// generated"));
        file.write().unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "// generated\nclass A\n"
        );
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }
}
