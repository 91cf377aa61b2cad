//! Markdown renderer: title blocks as a level-4 heading plus a bullet list.

use crate::model::{DocstringInfo, TitleBlock};
use crate::render::{render_page, Renderer};
use crate::text::dedent;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, name: &str, info: &DocstringInfo) -> Result<String> {
        Ok(render_page(name, info, list_view))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a title block as a heading, its leading text, and one bullet per item.
///
/// ```text
/// #### Args:
///
/// * <b>`x`</b>: The input.
/// * <b>`name`</b>
/// ```
pub fn list_view(block: &TitleBlock) -> String {
    let mut out = format!("\n\n#### {}:\n", block.title);
    out.push_str(&dedent(&block.text));
    out.push('\n');

    for (name, description) in &block.items {
        let description = description.trim();
        if description.is_empty() {
            out.push_str(&format!("* <b>`{}`</b>\n", name));
        } else {
            out.push_str(&format!("* <b>`{}`</b>: {}\n", name, description));
        }
    }

    out
}
