//! Lexer for a single normalized JASS line.
//!
//! Produces span-based tokens without storing text - text is sliced from the line only when needed.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. Initializer expressions (`3.14`, `"text"`, `'hpea'`)
//! therefore show up as a few `Garbage` tokens, which the recognizer never inspects.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

/// Token kinds of a declaration line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    #[token("type")]
    KwType,

    #[token("extends")]
    KwExtends,

    #[token("native")]
    KwNative,

    #[token("function")]
    KwFunction,

    #[token("constant")]
    KwConstant,

    #[token("takes")]
    KwTakes,

    #[token("returns")]
    KwReturns,

    #[token("nothing")]
    KwNothing,

    #[token("array")]
    KwArray,

    #[token("globals")]
    KwGlobals,

    #[token("endglobals")]
    KwEndGlobals,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    /// Identifier. Keywords win over this pattern on equal-length matches.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Id,

    #[regex(r"[ \t\r]+")]
    Whitespace,

    /// Coalesced unrecognized characters
    Garbage,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        self == TokenKind::Whitespace
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes a line into span-based tokens, trivia included.
///
/// Consecutive lexer errors are coalesced into single `Garbage` tokens.
pub fn lex(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(line);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }
                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        range_to_text_range(start..line.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Tokenizes a line and drops trivia.
pub fn lex_significant(line: &str) -> Vec<Token> {
    lex(line)
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .collect()
}

/// Retrieves the text slice for a token. O(1) slice into the line.
#[inline]
pub fn token_text<'l>(line: &'l str, token: &Token) -> &'l str {
    &line[Range::<usize>::from(token.span)]
}

/// Text from the end of `token` to the end of the line, trimmed.
#[inline]
pub fn text_after<'l>(line: &'l str, token: &Token) -> &'l str {
    line[usize::from(token.span.end())..].trim()
}
