//! jass2ts: TypeScript declarations from JASS declaration files.
//!
//! Recognizes `type`, `native`, `function` and `globals` declarations line by
//! line, collects them into a [`Library`](jass2ts_core::Library), and renders
//! the library as an ambient `.d.ts` file.
//!
//! # Example
//!
//! ```
//! use jass2ts_lib::Translation;
//! use jass2ts_lib::typegen::typescript::Config;
//!
//! let mut translation = Translation::new();
//! translation.add_source("common.j", "native GetUnitX takes unit whichUnit returns real");
//!
//! let output = translation.emit(Config::new());
//! assert!(output.contains("declare function GetUnitX(whichUnit: unit): number"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::{Path, PathBuf};

pub mod diagnostics;
pub mod parser;
pub mod translation;
pub mod typegen;


pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use translation::{SourceReport, Translation};

/// Errors that can occur while translating declaration files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid overrides file '{}': {source}", path.display())]
    Overrides {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize declarations: {0}")]
    Json(#[from] serde_json::Error),

    #[error("strict mode: {count} diagnostic(s) reported")]
    Strict { count: usize },
}

impl Error {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, Error>;
