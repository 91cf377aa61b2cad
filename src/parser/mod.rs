//! Docstring parsing pipeline.
//!
//! Raw text comes from the introspection layer ([`Symbol`]), goes through
//! reference rewriting, compatibility-note extraction and normalization, and
//! ends up as a [`DocstringInfo`]: a one-line brief plus prose and title
//! blocks. Every stage is total; malformed input degrades to prose.

pub mod compat;
pub mod items;
pub mod normalize;
pub mod other;
pub mod segment;

use crate::model::{DocstringInfo, ObjType, Symbol};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Docstrings containing this phrase were written by a code generator and
/// are dropped entirely.
pub const GENERATED_SENTINEL: &str = "Generated by: tensorflow/tools/api/generator";

// Bookkeeping lines such as `@@tf.nn.relu`
static RE_GENERATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *@@[a-zA-Z_.0-9]+ *$").unwrap());

/// Rewrites backtick-quoted symbol mentions into links.
pub trait ReferenceResolver {
    fn replace_references(&self, text: &str, full_name: &str) -> String;
}

/// Resolver that leaves text untouched.
pub struct NoReferences;

impl ReferenceResolver for NoReferences {
    fn replace_references(&self, text: &str, _full_name: &str) -> String {
        text.to_string()
    }
}

/// Read-only lookups shared by every parse call.
pub struct ParserContext<'a> {
    pub reference_resolver: &'a dyn ReferenceResolver,
    /// Type handle → public full name, for "Instance of" notes
    pub reverse_index: HashMap<String, String>,
    /// Symbol handle → extra description for values without a docstring
    pub extra_docs: HashMap<String, String>,
    pub generated_sentinel: String,
}

impl<'a> ParserContext<'a> {
    pub fn new(reference_resolver: &'a dyn ReferenceResolver) -> Self {
        Self {
            reference_resolver,
            reverse_index: HashMap::new(),
            extra_docs: HashMap::new(),
            generated_sentinel: GENERATED_SENTINEL.to_string(),
        }
    }
}

/// Parse a symbol's documentation into brief, blocks and compatibility notes.
pub fn parse_docstring(symbol: &Symbol, ctx: &ParserContext) -> DocstringInfo {
    let raw = raw_docstring(symbol, ctx);
    let raw = ctx
        .reference_resolver
        .replace_references(&raw, &symbol.full_name);
    let raw = strip_generation_markers(&raw);

    if !ctx.generated_sentinel.is_empty() && raw.contains(&ctx.generated_sentinel) {
        tracing::debug!(symbol = %symbol.full_name, "skipping generated docstring");
        return DocstringInfo::default();
    }

    let (docstring, compatibility) = compat::extract(&raw);

    let (brief, body) = docstring
        .split_once('\n')
        .unwrap_or((docstring.as_str(), ""));
    let blocks = segment::split_blocks(&normalize::format_body(body));

    DocstringInfo {
        brief: brief.to_string(),
        blocks,
        compatibility,
    }
}

/// Parse a bare docstring as if it belonged to a callable named `full_name`.
pub fn parse_text(text: &str, full_name: &str, ctx: &ParserContext) -> DocstringInfo {
    let symbol = Symbol {
        full_name: full_name.to_string(),
        kind: ObjType::Callable,
        doc: Some(text.to_string()),
        ..Default::default()
    };
    parse_docstring(&symbol, ctx)
}

/// The symbol's documentation text before any rewriting.
///
/// Type aliases only count their own doc when it differs from the aliased
/// type's. Values without a docstring get a synthesized description.
pub fn raw_docstring(symbol: &Symbol, ctx: &ParserContext) -> String {
    let doc = match symbol.kind {
        ObjType::Other => return other::describe_other(symbol, ctx),
        ObjType::TypeAlias if symbol.doc == symbol.origin_doc => String::new(),
        _ => symbol.doc.clone().unwrap_or_default(),
    };
    normalize::strip_annotations(&doc)
}

fn strip_generation_markers(text: &str) -> String {
    text.split('\n')
        .filter(|line| !RE_GENERATION_MARKER.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}
