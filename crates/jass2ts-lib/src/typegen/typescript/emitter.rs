//! Core emitter struct and main emit logic.

use jass2ts_core::{Colors, Library};

use super::{Config, HEADER};

/// TypeScript emitter from a recognized library.
pub struct Emitter<'a> {
    pub(super) library: &'a Library,
    pub(super) config: Config,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(library: &'a Library, config: Config) -> Self {
        Self {
            library,
            config,
            output: String::new(),
        }
    }

    pub(super) fn c(&self) -> Colors {
        self.config.colors
    }

    /// Emit the whole file. Groups come in fixed order, each followed by a
    /// blank line; declarations keep source order inside a group.
    pub fn emit(mut self) -> String {
        if self.config.header {
            let c = self.c();
            self.output.push_str(&format!("{}{}{}\n\n", c.dim, HEADER, c.reset));
        }

        let library = self.library;

        for decl in &library.types {
            self.emit_type(decl);
        }
        self.output.push('\n');

        for decl in &library.natives {
            self.emit_native(decl);
        }
        self.output.push('\n');

        for decl in &library.globals {
            self.emit_global(decl);
        }
        self.output.push('\n');

        for decl in &library.functions {
            self.emit_function(decl);
        }
        self.output.push('\n');

        self.output
    }
}
