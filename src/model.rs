//! Data model for parsed docstrings: format-agnostic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Compatibility notes keyed by tag. A repeated tag keeps the last body seen.
pub type CompatibilityNotes = BTreeMap<String, String>;

/// Complete parse result for a single symbol's docstring.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DocstringInfo {
    /// First line of the docstring
    pub brief: String,
    /// Remaining body, in source order
    pub blocks: Vec<Block>,
    pub compatibility: CompatibilityNotes,
}

/// One segment of a docstring body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Free markdown, emitted verbatim.
    Prose { text: String },
    /// A section such as `Args:` or `Raises:`.
    Title(TitleBlock),
}

/// A section introduced by a short capitalized title and a colon.
///
/// ```text
/// Title:
///   Freeform text
///   arg1: value1
///   arg2: value2
/// ```
///
/// Either `text` or `items` may be empty; with both empty the block only
/// upgrades the title to a heading.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct TitleBlock {
    /// Title line without the colon
    pub title: String,
    /// Anything between the title and the first item
    pub text: String,
    /// (name, description) pairs in source order
    pub items: Vec<(String, String)>,
}

/// A tagged side-note lifted out of the docstring body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityNote {
    pub tag: String,
    pub body: String,
}

/// Classification of a documented symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjType {
    #[default]
    Callable,
    Type,
    Module,
    Property,
    TypeAlias,
    Other,
}

/// What the introspection layer knows about one symbol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Symbol {
    /// Dotted public name, e.g. `tf.nn.relu`
    pub full_name: String,
    /// Stable identity handle, used for `extra_docs` lookups
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub kind: ObjType,
    /// The symbol's own docstring (for `Other` values: only when set on the instance)
    #[serde(default)]
    pub doc: Option<String>,
    /// Docstring of the aliased type (type aliases only)
    #[serde(default)]
    pub origin_doc: Option<String>,
    /// Value summary (`Other` symbols only)
    #[serde(default)]
    pub value: Option<Value>,
}

/// Printable summary of a non-docstring value.
///
/// All strings are already `repr`-style renderings supplied by the
/// introspection layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Value {
    Mapping { entries: Vec<(String, String)> },
    Set { items: Vec<String> },
    /// Singletons, lists, tuples and enum members
    Literal { repr: String },
    Property,
    Instance {
        type_handle: String,
        #[serde(default)]
        module: Option<String>,
        class_name: String,
    },
}

/// A batch of symbols exported by the introspection layer, with the side
/// tables the parser needs for values that have no docstring.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    pub symbols: Vec<Symbol>,
    /// Symbol handle → extra description
    #[serde(default)]
    pub extra_docs: HashMap<String, String>,
    /// Type handle → public full name
    #[serde(default)]
    pub reverse_index: HashMap<String, String>,
}
