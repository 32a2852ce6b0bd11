//! Per-declaration rendering methods.

use jass2ts_core::{FunctionDecl, GlobalDecl, NativeDecl, Prototype, TypeDecl};

use super::Emitter;
use super::convert::{Position, array_of, map_type};

impl Emitter<'_> {
    pub(super) fn emit_type(&mut self, decl: &TypeDecl) {
        let c = self.c();
        self.output.push_str(&format!(
            "{}declare abstract class{} {}{}{} {}extends{} {}{}{} {}{{ private __{}: never }}{}\n",
            c.dim,
            c.reset,
            c.blue,
            decl.name,
            c.reset,
            c.dim,
            c.reset,
            c.green,
            decl.parent,
            c.reset,
            c.dim,
            decl.name,
            c.reset,
        ));
    }

    pub(super) fn emit_native(&mut self, decl: &NativeDecl) {
        self.emit_prototype(&decl.prototype, true);
    }

    pub(super) fn emit_function(&mut self, decl: &FunctionDecl) {
        self.emit_prototype(&decl.prototype, false);
    }

    /// `declare function Name(arg: type, ...): ret`
    fn emit_prototype(&mut self, prototype: &Prototype, overridable: bool) {
        let c = self.c();
        let arguments: Vec<String> = prototype
            .arguments
            .iter()
            .enumerate()
            .map(|(index, argument)| {
                let forced = if overridable {
                    self.config.overrides.argument(&prototype.name, index)
                } else {
                    None
                };
                let ty = match forced {
                    Some(ty) => ty.to_string(),
                    None => self.ts_type(&argument.ty, Position::Argument),
                };
                format!(
                    "{}{}:{} {}{}{}",
                    argument.name, c.dim, c.reset, c.green, ty, c.reset
                )
            })
            .collect();

        self.output.push_str(&format!(
            "{}declare function{} {}{}{}{}({}{}{}):{} {}{}{}\n",
            c.dim,
            c.reset,
            c.blue,
            prototype.name,
            c.reset,
            c.dim,
            c.reset,
            arguments.join(", "),
            c.dim,
            c.reset,
            c.green,
            self.ts_type(&prototype.return_type, Position::Return),
            c.reset,
        ));
    }

    /// `declare const name: type` or `declare var name: type`
    pub(super) fn emit_global(&mut self, decl: &GlobalDecl) {
        let c = self.c();
        let keyword = if decl.is_constant { "const" } else { "var" };
        let mut ty = self.ts_type(&decl.ty, Position::Global);
        if decl.is_array {
            ty = array_of(&ty);
        }
        self.output.push_str(&format!(
            "{}declare {}{} {}{}{}{}:{} {}{}{}\n",
            c.dim, keyword, c.reset, c.blue, decl.name, c.reset, c.dim, c.reset, c.green, ty, c.reset,
        ));
    }

    fn ts_type(&self, ty: &str, position: Position) -> String {
        map_type(ty, position, self.config.optional_style)
    }
}
