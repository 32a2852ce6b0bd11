//! JASS type to TypeScript type conversion.

use super::config::OptionalStyle;

/// Where a type occurs. Arguments may be omitted by callers; return values
/// and globals always hold a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Argument,
    Return,
    Global,
}

/// Map a JASS type name to a TypeScript type expression.
///
/// Total: names without a rule pass through unchanged, so handle types
/// (`unit`, `trigger`, ...) keep their names.
pub fn map_type(ty: &str, position: Position, optional: OptionalStyle) -> String {
    match ty {
        "integer" | "real" => "number".to_string(),
        "nothing" | "" => "void".to_string(),
        "code" => "() => void".to_string(),
        "boolexpr" if position == Position::Argument => {
            format!("boolexpr | {}", optional.as_ts())
        }
        other => other.to_string(),
    }
}

/// `T[]`, parenthesizing function and union types.
pub(super) fn array_of(ts_type: &str) -> String {
    if ts_type.contains("=>") || ts_type.contains('|') {
        format!("({})[]", ts_type)
    } else {
        format!("{}[]", ts_type)
    }
}
