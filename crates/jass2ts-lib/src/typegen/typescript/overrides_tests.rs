use std::io::Write;

use indoc::indoc;

use super::Overrides;
use crate::Error;

#[test]
fn builtin_table() {
    let overrides = Overrides::builtin();

    assert_eq!(overrides.len(), 2);
    assert_eq!(overrides.argument("Condition", 0), Some("() => boolean"));
    assert_eq!(overrides.argument("Filter", 0), Some("() => boolean"));
    assert_eq!(overrides.argument("Condition", 1), None);
    assert_eq!(overrides.argument("And", 0), None);
}

#[test]
fn insert_extends_existing_native() {
    let mut overrides = Overrides::new();
    overrides.insert("ForForce", 1, "() => void");
    overrides.insert("ForForce", 0, "force");

    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides.argument("ForForce", 0), Some("force"));
    assert_eq!(overrides.argument("ForForce", 1), Some("() => void"));
}

#[test]
fn from_json() {
    let json = indoc! {r#"
        {
            "Condition": { "0": "() => boolean" },
            "TimerStart": { "3": "(this: void) => void" }
        }
    "#};

    let overrides = Overrides::from_json(json).unwrap();

    assert_eq!(overrides.argument("Condition", 0), Some("() => boolean"));
    assert_eq!(overrides.argument("TimerStart", 3), Some("(this: void) => void"));
    assert!(!overrides.is_empty());
}

#[test]
fn from_json_rejects_non_index_keys() {
    let result = Overrides::from_json(r#"{"Condition": {"first": "x"}}"#);

    assert!(result.is_err());
}

#[test]
fn to_json() {
    let json = serde_json::to_string(&Overrides::builtin()).unwrap();

    assert_eq!(
        json,
        r#"{"Condition":{"0":"() => boolean"},"Filter":{"0":"() => boolean"}}"#
    );
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"Filter": {{"0": "() => boolean"}}}}"#).unwrap();

    let overrides = Overrides::load(file.path()).unwrap();

    assert_eq!(overrides, Overrides::new().with("Filter", 0, "() => boolean"));
}

#[test]
fn load_reports_bad_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = Overrides::load(file.path()).unwrap_err();

    assert!(matches!(err, Error::Overrides { .. }));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = Overrides::load(&path).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}
