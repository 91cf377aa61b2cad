//! docblock: turn free-form API docstrings into structured blocks and
//! render them as markdown lists or the documentation site's HTML tables.
//!
//! The pipeline is pure: [`parser::parse_docstring`] takes a [`model::Symbol`]
//! and a read-only [`parser::ParserContext`] and returns a
//! [`model::DocstringInfo`]. Rendering happens later, per block, through the
//! [`render`] module.

pub mod config;
pub mod model;
pub mod parser;
pub mod render;
pub mod text;

pub use model::{Block, DocstringInfo, Symbol, TitleBlock};
pub use parser::{parse_docstring, parse_text, NoReferences, ParserContext, ReferenceResolver};
