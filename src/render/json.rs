//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the parsed docstring directly, so custom page builders can
//! consume blocks without re-parsing markdown.

use crate::model::{Block, CompatibilityNotes, DocstringInfo};
use crate::render::Renderer;
use anyhow::{Context, Result};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct Page<'a> {
    name: &'a str,
    brief: &'a str,
    blocks: &'a [Block],
    compatibility: &'a CompatibilityNotes,
}

impl Renderer for JsonRenderer {
    fn render(&self, name: &str, info: &DocstringInfo) -> Result<String> {
        let page = Page {
            name,
            brief: &info.brief,
            blocks: &info.blocks,
            compatibility: &info.compatibility,
        };
        let mut out = serde_json::to_string_pretty(&page)
            .with_context(|| format!("failed to serialize {}", name))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
