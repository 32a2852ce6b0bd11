use super::OptionalStyle;
use super::convert::{Position, array_of, map_type};

fn arg(ty: &str) -> String {
    map_type(ty, Position::Argument, OptionalStyle::Null)
}

fn ret(ty: &str) -> String {
    map_type(ty, Position::Return, OptionalStyle::Null)
}

#[test]
fn numeric_types() {
    assert_eq!(arg("integer"), "number");
    assert_eq!(arg("real"), "number");
    assert_eq!(ret("integer"), "number");
    assert_eq!(map_type("real", Position::Global, OptionalStyle::Null), "number");
}

#[test]
fn nothing_and_empty_are_void() {
    assert_eq!(ret("nothing"), "void");
    assert_eq!(ret(""), "void");
}

#[test]
fn code_is_callback() {
    assert_eq!(arg("code"), "() => void");
    assert_eq!(ret("code"), "() => void");
}

#[test]
fn boolexpr_depends_on_position() {
    assert_eq!(arg("boolexpr"), "boolexpr | null");
    assert_eq!(
        map_type("boolexpr", Position::Argument, OptionalStyle::Undefined),
        "boolexpr | undefined"
    );
    assert_eq!(ret("boolexpr"), "boolexpr");
    assert_eq!(
        map_type("boolexpr", Position::Global, OptionalStyle::Undefined),
        "boolexpr"
    );
}

#[test]
fn unknown_names_pass_through() {
    for name in ["unit", "handle", "boolean", "string", "Integer", "real2"] {
        assert_eq!(arg(name), name);
        assert_eq!(ret(name), name);
    }
}

#[test]
fn array_suffix() {
    assert_eq!(array_of("number"), "number[]");
    assert_eq!(array_of("() => void"), "(() => void)[]");
    assert_eq!(array_of("boolexpr | null"), "(boolexpr | null)[]");
}
