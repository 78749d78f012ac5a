//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from graph validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the graph file.
    pub config_path: PathBuf,
    /// Number of resolved injection targets.
    pub target_count: usize,
    /// Number of declarations left for a later round.
    pub deferred_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.key_value_indented("Targets", &self.target_count.to_string());
            out.key_value_indented("Deferred", &self.deferred_count.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            config_path: PathBuf::from("pick.toml"),
            target_count: 3,
            deferred_count: 1,
            errors: vec![],
            warnings: vec![],
            infos: vec![],
        };
        let mut out = BufferOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            ["✓ pick.toml is valid", "  Targets: 3", "  Deferred: 1"]
        );
    }

    #[test]
    fn test_render_errors_without_summary() {
        let report = CheckReport {
            config_path: PathBuf::from("pick.toml"),
            target_count: 1,
            deferred_count: 0,
            errors: vec!["bad".into()],
            warnings: vec![],
            infos: vec![],
        };
        let mut out = BufferOutput::default();

        report.render(&mut out);

        assert_eq!(out.lines, ["error: bad", ""]);
    }
}
