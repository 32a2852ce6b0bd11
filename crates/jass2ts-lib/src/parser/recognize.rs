//! Line-oriented declaration recognizer.
//!
//! One pass over one source. Each line is normalized, lexed, and matched
//! against a handful of token shapes; the first shape that fits produces a
//! record. Lines that fit nothing are skipped without a diagnostic: JASS
//! sources are mostly executable code the recognizer does not care about.
//!
//! The only state carried between lines is whether a `globals` block is open.
//! It starts closed for every source and must be closed by the end of it.

use rowan::{TextRange, TextSize};
use tracing::trace;

use jass2ts_core::{Argument, FunctionDecl, GlobalDecl, Library, NativeDecl, Prototype, TypeDecl};

use super::lexer::{Token, TokenKind, lex_significant, text_after, token_text};
use super::normalize::{is_comment_only, normalize};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Declarations and diagnostics recognized from one source.
#[derive(Debug, Clone, Default)]
pub struct Recognized {
    pub library: Library,
    pub diagnostics: Diagnostics,
}

/// Recognize every declaration in `source`.
pub fn recognize(source: &str) -> Recognized {
    let mut recognizer = Recognizer::new();
    for (line, range) in lines_with_ranges(source) {
        recognizer.feed_line(line, range);
    }
    recognizer.finish(TextSize::of(source))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    TopLevel,
    /// Inside `globals`; remembers the opener for the unclosed-block diagnostic.
    Globals { opened_at: TextRange },
}

/// Line-at-a-time recognizer state machine.
#[derive(Debug)]
pub struct Recognizer {
    state: State,
    library: Library,
    diagnostics: Diagnostics,
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer {
    pub fn new() -> Self {
        Self {
            state: State::TopLevel,
            library: Library::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn in_globals(&self) -> bool {
        matches!(self.state, State::Globals { .. })
    }

    /// Feed one raw line. `range` locates the line in its source for diagnostics.
    pub fn feed_line(&mut self, raw: &str, range: TextRange) {
        if is_comment_only(raw) {
            return;
        }

        let line = normalize(raw);
        if line.is_empty() {
            return;
        }

        let tokens = lex_significant(&line);
        let has = |kind: TokenKind| tokens.iter().any(|t| t.kind == kind);

        match self.state {
            State::Globals { .. } => {
                if has(TokenKind::KwEndGlobals) {
                    self.state = State::TopLevel;
                    return;
                }
                if let Some(global) = match_global(&line, &tokens) {
                    trace!(name = %global.name, "global");
                    self.library.globals.push(global);
                }
            }
            State::TopLevel => {
                if has(TokenKind::KwGlobals) {
                    self.state = State::Globals { opened_at: range };
                    return;
                }
                if has(TokenKind::KwEndGlobals) {
                    self.diagnostics
                        .report(DiagnosticKind::StrayEndGlobals, range)
                        .emit();
                    return;
                }
                self.match_declaration(&line, &tokens, range);
            }
        }
    }

    /// Close the source. `end` is the source length, used to point at where an open block ends.
    pub fn finish(mut self, end: TextSize) -> Recognized {
        if let State::Globals { opened_at } = self.state {
            self.diagnostics
                .report(DiagnosticKind::UnclosedGlobals, opened_at)
                .related_to("source ends here", TextRange::empty(end))
                .emit();
        }

        Recognized {
            library: self.library,
            diagnostics: self.diagnostics,
        }
    }

    /// First match wins: type definition, then native, then function.
    fn match_declaration(&mut self, line: &str, tokens: &[Token], range: TextRange) {
        use TokenKind::*;

        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        match kinds.as_slice() {
            [KwType, Id, KwExtends, Id, ..] => {
                let decl = TypeDecl::new(token_text(line, &tokens[1]), token_text(line, &tokens[3]));
                trace!(name = %decl.name, parent = %decl.parent, "type");
                self.library.types.push(decl);
            }
            [KwNative, Id, KwTakes, ..] => {
                let proto = self.match_prototype(line, &tokens[1], &tokens[2..], range);
                trace!(name = %proto.name, "native");
                self.library.natives.push(NativeDecl::new(proto));
            }
            [KwConstant, KwNative, Id, KwTakes, ..] => {
                let proto = self.match_prototype(line, &tokens[2], &tokens[3..], range);
                trace!(name = %proto.name, "constant native");
                self.library
                    .natives
                    .push(NativeDecl::new(proto).constant(true));
            }
            [KwFunction, Id, KwTakes, ..] => {
                let proto = self.match_prototype(line, &tokens[1], &tokens[2..], range);
                trace!(name = %proto.name, "function");
                self.library.functions.push(FunctionDecl::new(proto));
            }
            [KwConstant, KwFunction, Id, KwTakes, ..] => {
                let proto = self.match_prototype(line, &tokens[2], &tokens[3..], range);
                trace!(name = %proto.name, "constant function");
                self.library.functions.push(FunctionDecl::new(proto));
            }
            _ => {}
        }
    }

    /// `signature` starts at the `takes` keyword.
    fn match_prototype(
        &mut self,
        line: &str,
        name: &Token,
        signature: &[Token],
        range: TextRange,
    ) -> Prototype {
        let name = token_text(line, name);
        let returns = signature.iter().position(|t| t.kind == TokenKind::KwReturns);

        let (params, return_type) = match returns {
            Some(i) => (&signature[1..i], normalize(text_after(line, &signature[i]))),
            None => {
                self.diagnostics
                    .report(DiagnosticKind::MissingReturns, range)
                    .message(name)
                    .emit();
                (&signature[1..], String::new())
            }
        };

        let arguments = split_arguments(line, params);
        for arg in arguments.iter().filter(|a| !a.is_complete()) {
            let builder = self
                .diagnostics
                .report(DiagnosticKind::MissingArgumentName, range);
            if arg.ty.is_empty() {
                builder.emit();
            } else {
                builder.message(arg.ty.as_str()).emit();
            }
        }

        Prototype::new(name, arguments, return_type)
    }
}

/// Split a parameter clause into positional arguments.
///
/// A lone `nothing` means no arguments. Otherwise every comma-separated
/// piece becomes one argument from its first two words; a missing word is
/// left empty rather than rejected, so an empty clause yields one argument
/// with neither type nor name.
fn split_arguments(line: &str, params: &[Token]) -> Vec<Argument> {
    match params {
        [only] if only.kind == TokenKind::KwNothing => Vec::new(),
        _ => params
            .split(|t| t.kind == TokenKind::Comma)
            .map(|piece| {
                let text = piece_text(line, piece);
                let mut words = text.split(' ');
                let ty = words.next().unwrap_or_default();
                let name = words.next().unwrap_or_default();
                Argument::new(ty, name)
            })
            .collect(),
    }
}

fn piece_text<'l>(line: &'l str, piece: &[Token]) -> &'l str {
    match (piece.first(), piece.last()) {
        (Some(first), Some(last)) => {
            &line[usize::from(first.span.start())..usize::from(last.span.end())]
        }
        _ => "",
    }
}

/// `[constant] <type> [array] <name> [= <initializer>]`
fn match_global(line: &str, tokens: &[Token]) -> Option<GlobalDecl> {
    use TokenKind::*;

    let (decl, value) = match tokens.iter().position(|t| t.kind == Equals) {
        Some(i) => (&tokens[..i], Some(text_after(line, &tokens[i]))),
        None => (tokens, None),
    };

    let (is_constant, shape) = match decl {
        [first, rest @ ..] if first.kind == KwConstant => (true, rest),
        _ => (false, decl),
    };

    let (ty, is_array, name) = match shape {
        [ty, name] if ty.kind == Id && name.kind == Id => (ty, false, name),
        [ty, array, name] if ty.kind == Id && array.kind == KwArray && name.kind == Id => {
            (ty, true, name)
        }
        _ => return None,
    };

    Some(GlobalDecl {
        is_constant,
        ty: token_text(line, ty).to_string(),
        is_array,
        name: token_text(line, name).to_string(),
        value: value.filter(|v| !v.is_empty()).map(str::to_string),
    })
}

/// Split a source into lines, each with the range of its trimmed content.
pub(crate) fn lines_with_ranges(source: &str) -> impl Iterator<Item = (&str, TextRange)> {
    let mut offset = 0usize;
    source.split_inclusive('\n').map(move |chunk| {
        let start = offset;
        offset += chunk.len();

        let line = chunk.trim_end_matches(['\n', '\r']);
        let leading = line.len() - line.trim_start().len();
        let content_start = start + leading;
        let content_end = start + line.trim_end().len();
        let range = TextRange::new(
            (content_start as u32).into(),
            (content_end.max(content_start) as u32).into(),
        );
        (line, range)
    })
}
