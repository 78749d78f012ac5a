//! Generate command report data structures.

use std::path::PathBuf;

use miette::Diagnostic;
use pickgen_codegen::ValidationError;
use pickgen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from one generation round.
#[derive(Debug)]
pub struct GenerateReport {
    /// Display name of the target language.
    pub language: &'static str,
    /// Number of resolved injection targets.
    pub target_count: usize,
    /// Declarations left for a later round.
    pub deferred: Vec<String>,
    pub result: GenerationResult,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        !matches!(self.result, GenerationResult::Rejected(_))
    }
}

/// Result of factory generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
    /// Validation failed; nothing was emitted.
    Rejected(Vec<ValidationError>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub files: Vec<WrittenFile>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.deferred.is_empty() {
            out.section(&format!("Deferred ({})", self.deferred.len()));
            for decl in &self.deferred {
                out.list_item(decl);
            }
            out.newline();
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
            GenerationResult::Rejected(failures) => self.render_rejected(out, failures),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        let changed: Vec<_> = written
            .files
            .iter()
            .filter(|file| file.result == WriteResult::Written)
            .collect();

        out.section(&format!("{} factories ({})", self.language, self.target_count));
        for file in &changed {
            let path = file.path.strip_prefix(&written.output_dir).unwrap_or(&file.path);
            out.added_item(&path.display().to_string());
        }
        let unchanged = written.files.len() - changed.len();
        if unchanged > 0 {
            out.list_item(&format!("{unchanged} unchanged"));
        }
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }

    fn render_rejected(&self, out: &mut dyn Output, failures: &[ValidationError]) {
        for failure in failures {
            out.error(&failure.to_string());
            if let Some(help) = failure.help() {
                out.key_value_indented("help", &help.to_string());
            }
        }
        out.newline();
        out.preformatted(&format!(
            "{} of {} targets failed validation; no factories were generated",
            failures.len(),
            self.target_count
        ));
    }
}
