//! Type declaration generation from a recognized [`Library`](jass2ts_core::Library).
//!
//! Currently supports TypeScript `.d.ts` generation.
//!
//! # Example
//!
//! ```
//! use jass2ts_lib::parser::recognize;
//! use jass2ts_lib::typegen::typescript;
//!
//! let recognized = recognize("type unit extends handle");
//! let output = typescript::emit(&recognized.library);
//! assert!(output.contains("declare abstract class unit extends handle"));
//! ```

pub mod typescript;
