//! Per-native argument type overrides.
//!
//! Some natives take an argument whose JASS type says less than its use does:
//! `Condition(boolexpr func)` really wants a callback returning `boolean`.
//! The table maps a native name to argument positions and the TypeScript type
//! to print there, bypassing the generic type map.

use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Callback type forced onto the filter argument of `Condition` and `Filter`.
const BOOLEAN_CALLBACK: &str = "() => boolean";

/// Native name → argument index → TypeScript type.
///
/// Serialized as `{"Condition": {"0": "() => boolean"}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides(IndexMap<String, BTreeMap<usize, String>>);

impl Overrides {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table applied when none is configured.
    pub fn builtin() -> Self {
        Self::new()
            .with("Condition", 0, BOOLEAN_CALLBACK)
            .with("Filter", 0, BOOLEAN_CALLBACK)
    }

    pub fn with(mut self, native: impl Into<String>, index: usize, ty: impl Into<String>) -> Self {
        self.insert(native, index, ty);
        self
    }

    pub fn insert(&mut self, native: impl Into<String>, index: usize, ty: impl Into<String>) {
        self.0
            .entry(native.into())
            .or_default()
            .insert(index, ty.into());
    }

    /// Override for argument `index` of `native`, if any.
    pub fn argument(&self, native: &str, index: usize) -> Option<&str> {
        self.0
            .get(native)
            .and_then(|args| args.get(&index))
            .map(String::as_str)
    }

    /// Number of natives with at least one override.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&text).map_err(|source| Error::Overrides {
            path: path.to_path_buf(),
            source,
        })
    }
}
