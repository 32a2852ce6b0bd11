//! Configuration types for TypeScript emission.

use jass2ts_core::Colors;

use super::Overrides;

/// How to spell "no value" in optional argument positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OptionalStyle {
    /// `null` - what JASS passes for an absent handle
    #[default]
    Null,
    /// `undefined` - the absence of a value
    Undefined,
}

impl OptionalStyle {
    pub fn as_ts(self) -> &'static str {
        match self {
            OptionalStyle::Null => "null",
            OptionalStyle::Undefined => "undefined",
        }
    }
}

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to emit the file-scope pragma line
    pub(crate) header: bool,
    /// How to represent absent optional arguments
    pub(crate) optional_style: OptionalStyle,
    /// Per-native argument type overrides
    pub(crate) overrides: Overrides,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: true,
            optional_style: OptionalStyle::default(),
            overrides: Overrides::builtin(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the pragma header.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    /// Set the absent-value spelling for optional arguments.
    pub fn optional_style(mut self, value: OptionalStyle) -> Self {
        self.optional_style = value;
        self
    }

    /// Replace the override table.
    pub fn overrides(mut self, value: Overrides) -> Self {
        self.overrides = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
