//! Declaration records recognized from JASS source.
//!
//! Records are plain data: they are created once by the recognizer, never
//! mutated afterwards, and consumed by the emitter. Every sequence keeps
//! source-encounter order, which the emitter relies on.

use serde::{Deserialize, Serialize};

/// `type <name> extends <parent>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub parent: String,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
        }
    }
}

/// One positional parameter of a prototype.
///
/// Either field may be empty when the source parameter clause was malformed
/// (e.g. `takes integer` without a name). Such arguments are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

impl Argument {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Both the type and the name are present.
    pub fn is_complete(&self) -> bool {
        !self.ty.is_empty() && !self.name.is_empty()
    }
}

/// Shape shared by natives and functions: `<name> takes <args> returns <ret>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prototype {
    pub name: String,
    pub arguments: Vec<Argument>,
    /// Empty when the source line had no `returns` clause.
    pub return_type: String,
}

impl Prototype {
    pub fn new(
        name: impl Into<String>,
        arguments: Vec<Argument>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arguments,
            return_type: return_type.into(),
        }
    }
}

/// Host-implemented prototype: `[constant] native <name> takes ... returns ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeDecl {
    /// Declared with the `constant` prefix. Not reflected in emitted output.
    #[serde(default)]
    pub is_constant: bool,
    #[serde(flatten)]
    pub prototype: Prototype,
}

impl NativeDecl {
    pub fn new(prototype: Prototype) -> Self {
        Self {
            is_constant: false,
            prototype,
        }
    }

    pub fn constant(mut self, value: bool) -> Self {
        self.is_constant = value;
        self
    }

    pub fn name(&self) -> &str {
        &self.prototype.name
    }
}

/// User function prototype: `function <name> takes ... returns ...`.
///
/// Only the header line is recognized; the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    #[serde(flatten)]
    pub prototype: Prototype,
}

impl FunctionDecl {
    pub fn new(prototype: Prototype) -> Self {
        Self { prototype }
    }

    pub fn name(&self) -> &str {
        &self.prototype.name
    }
}

/// Entry of a `globals ... endglobals` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalDecl {
    pub is_constant: bool,
    #[serde(rename = "type")]
    pub ty: String,
    pub is_array: bool,
    pub name: String,
    /// Raw initializer text after `=`. Opaque: never parsed or emitted.
    pub value: Option<String>,
}

/// All declarations recognized from one or more sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub types: Vec<TypeDecl>,
    pub natives: Vec<NativeDecl>,
    pub globals: Vec<GlobalDecl>,
    pub functions: Vec<FunctionDecl>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every category of `other` after the entries already present.
    pub fn merge(&mut self, other: Library) {
        self.types.extend(other.types);
        self.natives.extend(other.natives);
        self.globals.extend(other.globals);
        self.functions.extend(other.functions);
    }

    /// Total number of declarations across all categories.
    pub fn len(&self) -> usize {
        self.types.len() + self.natives.len() + self.globals.len() + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Library> for Library {
    fn from_iter<I: IntoIterator<Item = Library>>(iter: I) -> Self {
        let mut merged = Library::new();
        for lib in iter {
            merged.merge(lib);
        }
        merged
    }
}
