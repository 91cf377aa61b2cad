//! Renderer module: trait-based format dispatch.
//!
//! Every renderer lays out the same page: the symbol name as heading, the
//! brief, each block in order, then compatibility notes. They differ in how
//! title blocks are drawn.

pub mod html;
pub mod json;
pub mod markdown;

use crate::config::Config;
use crate::model::{Block, DocstringInfo, TitleBlock};
use anyhow::{anyhow, Result};

/// Trait for rendering a parsed docstring into a specific output format.
pub trait Renderer {
    fn render(&self, name: &str, info: &DocstringInfo) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, config: &Config) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "table" | "html" => Ok(Box::new(html::TableRenderer {
            config: config.render.clone(),
        })),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, table, or json",
            format
        )),
    }
}

/// Render a single block; prose is emitted verbatim.
pub fn render_block(block: &Block, title_block: impl Fn(&TitleBlock) -> String) -> String {
    match block {
        Block::Prose { text } => text.clone(),
        Block::Title(tb) => title_block(tb),
    }
}

/// Assemble a markdown page around blocks drawn by `title_block`.
pub(crate) fn render_page(
    name: &str,
    info: &DocstringInfo,
    title_block: impl Fn(&TitleBlock) -> String,
) -> String {
    let mut out = format!("# {}\n\n", name);

    if !info.brief.is_empty() {
        out.push_str(&info.brief);
        out.push_str("\n\n");
    }

    for block in &info.blocks {
        out.push_str(&render_block(block, &title_block));
        out.push_str("\n\n");
    }

    for (tag, body) in &info.compatibility {
        out.push_str(&format!("#### {} Compatibility\n\n", tag));
        out.push_str(body.trim());
        out.push_str("\n\n");
    }

    let mut out = out.trim_end().to_string();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        let config = Config::default();
        assert_eq!(create_renderer("md", &config).unwrap().file_extension(), "md");
        assert_eq!(create_renderer("markdown", &config).unwrap().file_extension(), "md");
        assert_eq!(create_renderer("table", &config).unwrap().file_extension(), "md");
        assert_eq!(create_renderer("json", &config).unwrap().file_extension(), "json");
    }

    #[test]
    fn unknown_format_fails() {
        let err = create_renderer("xml", &Config::default()).err().unwrap();
        assert!(err.to_string().contains("unknown format"));
    }

    #[test]
    fn prose_is_verbatim() {
        let block = Block::Prose {
            text: "Some *markdown*\n\n  kept".to_string(),
        };
        assert_eq!(render_block(&block, |_| unreachable!()), "Some *markdown*\n\n  kept");
    }

    #[test]
    fn page_layout() {
        let mut info = DocstringInfo {
            brief: "Adds things.".to_string(),
            blocks: vec![Block::Prose {
                text: "Details.".to_string(),
            }],
            ..Default::default()
        };
        info.compatibility
            .insert("eager".to_string(), "\nNot in graphs.\n".to_string());
        assert_eq!(
            render_page("lib.add", &info, |_| String::new()),
            "# lib.add\n\nAdds things.\n\nDetails.\n\n#### eager Compatibility\n\nNot in graphs.\n"
        );
    }
}
