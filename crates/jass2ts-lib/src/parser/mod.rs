//! Declaration recognition for JASS sources.
//!
//! # Architecture
//!
//! This is not a grammar parser. Each source line goes through three steps:
//!
//! - `normalize`: comments stripped, whitespace collapsed
//! - `lexer`: the normalized line becomes span-based tokens (Logos)
//! - `recognize`: the token shape is matched against a short, priority-ordered
//!   list of declaration forms
//!
//! Statements, expressions and function bodies never match a declaration form
//! and are skipped. Nothing here rejects input; suspicious structure is
//! reported through [`crate::Diagnostics`] instead.

pub mod lexer;
pub mod normalize;
pub mod recognize;


pub use normalize::{is_comment_only, normalize};
pub use recognize::{Recognized, Recognizer, recognize};
