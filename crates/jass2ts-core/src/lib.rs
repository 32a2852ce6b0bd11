#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for jass2ts.
//!
//! Two layers:
//! - **Declaration model** (`model`): plain records recognized from JASS source
//!   and the `Library` aggregate that collects them
//! - **Presentation** (`colors`): ANSI palette shared by the emitter and CLI

pub mod colors;
pub mod model;


pub use colors::Colors;
pub use model::{
    Argument, FunctionDecl, GlobalDecl, Library, NativeDecl, Prototype, TypeDecl,
};
