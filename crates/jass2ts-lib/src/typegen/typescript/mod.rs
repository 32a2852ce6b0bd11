//! TypeScript declaration emitter.
//!
//! Renders a [`Library`] as an ambient `.d.ts` file: one line per declaration,
//! grouped as types, natives, globals, functions.

mod config;
mod convert;
mod emitter;
mod overrides;
mod render;

#[cfg(test)]
mod convert_tests;
#[cfg(test)]
mod emit_tests;
#[cfg(test)]
mod overrides_tests;

pub use config::{Config, OptionalStyle};
pub use convert::{Position, map_type};
pub use emitter::Emitter;
pub use overrides::Overrides;

use jass2ts_core::Library;

/// File-scope pragma placed at the top of every emitted file.
pub const HEADER: &str = "/** @noSelfInFile **/";

/// Emit TypeScript from a library.
pub fn emit(library: &Library) -> String {
    Emitter::new(library, Config::default()).emit()
}

/// Emit TypeScript from a library with custom config.
pub fn emit_with_config(library: &Library, config: Config) -> String {
    Emitter::new(library, config).emit()
}
