//! Multi-source translation.
//!
//! Each source is recognized on its own (the globals state never carries
//! over) and its declarations are appended to one library in the order the
//! sources were added.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use jass2ts_core::Library;

use crate::diagnostics::Diagnostics;
use crate::parser::recognize;
use crate::typegen::typescript::{self, Config};
use crate::{Error, Result};

/// Diagnostics of one source, kept with the text they point into.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub path: PathBuf,
    pub source: String,
    pub diagnostics: Diagnostics,
}

impl SourceReport {
    pub fn render(&self, colored: bool) -> String {
        let path = self.path.to_string_lossy();
        self.diagnostics
            .printer(&self.source)
            .path(&path)
            .colored(colored)
            .render()
    }
}

/// Sources recognized so far and the library they add up to.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    library: Library,
    reports: Vec<SourceReport>,
}

impl Translation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and add every file in order.
    pub fn from_files<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut translation = Self::new();
        for path in paths {
            translation.add_file(path.as_ref())?;
        }
        Ok(translation)
    }

    pub fn add_file(&mut self, path: &Path) -> Result<()> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.add_source(path, source);
        Ok(())
    }

    /// Recognize `source` and append its declarations.
    pub fn add_source(&mut self, path: impl Into<PathBuf>, source: impl Into<String>) {
        let path = path.into();
        let source = source.into();
        let recognized = recognize(&source);

        debug!(
            path = %path.display(),
            types = recognized.library.types.len(),
            natives = recognized.library.natives.len(),
            globals = recognized.library.globals.len(),
            functions = recognized.library.functions.len(),
            warnings = recognized.diagnostics.warning_count(),
            "recognized source"
        );

        self.library.merge(recognized.library);
        if !recognized.diagnostics.is_empty() {
            self.reports.push(SourceReport {
                path,
                source,
                diagnostics: recognized.diagnostics,
            });
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Sources that produced at least one diagnostic.
    pub fn reports(&self) -> &[SourceReport] {
        &self.reports
    }

    /// Escalate all diagnostics to errors and fail if there are any.
    pub fn check_strict(&mut self) -> Result<()> {
        for report in &mut self.reports {
            report.diagnostics.deny_warnings();
        }
        if !self.reports.iter().any(|r| r.diagnostics.has_errors()) {
            return Ok(());
        }
        let count = self
            .reports
            .iter()
            .map(|r| r.diagnostics.error_count())
            .sum();
        Err(Error::Strict { count })
    }

    /// Render all diagnostics, one source after another.
    pub fn render_diagnostics(&self, colored: bool) -> String {
        self.reports
            .iter()
            .map(|report| report.render(colored))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn emit(&self, config: Config) -> String {
        info!(declarations = self.library.len(), "emitting typescript");
        typescript::emit_with_config(&self.library, config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.library)?)
    }
}
