//! Table renderer: title blocks as the site's two-column HTML table.
//!
//! The markup (classes, `colgroup` widths, row layout) is matched by the
//! documentation site's stylesheet and must stay byte-for-byte stable. The
//! first column is fixed at 214px.

use crate::config::{RenderConfig, TITLE_PLACEHOLDER};
use crate::model::{DocstringInfo, TitleBlock};
use crate::render::markdown::list_view;
use crate::render::{render_page, Renderer};
use crate::text::dedent_after_first_line;
use anyhow::Result;

/// Renders configured titles as tables and everything else as lists.
pub struct TableRenderer {
    pub config: RenderConfig,
}

impl Renderer for TableRenderer {
    fn render(&self, name: &str, info: &DocstringInfo) -> Result<String> {
        Ok(render_page(name, info, |block| {
            if self.config.uses_table(&block.title) {
                table_view(block, self.config.title_template.as_deref())
            } else {
                list_view(block)
            }
        }))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a title block as a two-column table.
///
/// `title_template` may wrap the header title; its `{title}` placeholder is
/// replaced by the block title.
pub fn table_view(block: &TitleBlock, title_template: Option<&str>) -> String {
    let title = match title_template {
        Some(template) => template.replace(TITLE_PLACEHOLDER, &block.title),
        None => block.title.clone(),
    };

    let text = block.text.trim();
    let text = if text.is_empty() {
        String::new()
    } else {
        text_row(&dedent_after_first_line(text))
    };

    let items: String = block
        .items
        .iter()
        .map(|(name, description)| {
            let description = dedent_after_first_line(description.trim_matches('\n'));
            item_row(&format!("`{}`", name), &description)
        })
        .collect();

    format!(
        concat!(
            "\n\n",
            "<!-- Tabular view -->\n",
            " <table class=\"responsive fixed orange\">\n",
            "<colgroup><col width=\"214px\"><col></colgroup>\n",
            "<tr><th colspan=\"2\">{title}</th></tr>\n",
            "{text}\n",
            "{items}\n",
            "</table>\n",
            "\n"
        ),
        title = title,
        text = text,
        items = items
    )
}

fn text_row(text: &str) -> String {
    format!("<tr class=\"alt\">\n<td colspan=\"2\">\n{}\n</td>\n</tr>", text)
}

fn item_row(name: &str, description: &str) -> String {
    format!(
        "<tr>\n<td>\n{}\n</td>\n<td>\n{}\n</td>\n</tr>",
        name, description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;
    use pretty_assertions::assert_eq;

    fn args(text: &str, items: &[(&str, &str)]) -> TitleBlock {
        TitleBlock {
            title: "Args".to_string(),
            text: text.to_string(),
            items: items
                .iter()
                .map(|(n, d)| (n.to_string(), d.to_string()))
                .collect(),
        }
    }

    #[test]
    fn table_markup() {
        let tb = args("", &[("x", "input value."), ("y", "")]);
        let expected = concat!(
            "\n\n<!-- Tabular view -->\n",
            " <table class=\"responsive fixed orange\">\n",
            "<colgroup><col width=\"214px\"><col></colgroup>\n",
            "<tr><th colspan=\"2\">Args</th></tr>\n",
            "\n",
            "<tr>\n<td>\n`x`\n</td>\n<td>\ninput value.\n</td>\n</tr>",
            "<tr>\n<td>\n`y`\n</td>\n<td>\n\n</td>\n</tr>\n",
            "</table>\n\n"
        );
        assert_eq!(table_view(&tb, None), expected);
    }

    #[test]
    fn leading_text_row() {
        let tb = args("  Inputs to the op.\n", &[]);
        let out = table_view(&tb, None);
        assert!(out.contains(
            "<tr class=\"alt\">\n<td colspan=\"2\">\nInputs to the op.\n</td>\n</tr>\n\n</table>"
        ));
    }

    #[test]
    fn multi_line_description_is_dedented() {
        let tb = args("", &[("features", "A `Tensor`.\n    Must be float.")]);
        let out = table_view(&tb, None);
        assert!(out.contains("<td>\nA `Tensor`.\nMust be float.\n</td>"));
    }

    #[test]
    fn title_template_is_applied() {
        let tb = args("", &[]);
        let out = table_view(&tb, Some("<h2 class=\"add-link\">{title}</h2>"));
        assert!(out.contains("<tr><th colspan=\"2\"><h2 class=\"add-link\">Args</h2></th></tr>"));
    }

    #[test]
    fn unlisted_titles_fall_back_to_lists() {
        let renderer = TableRenderer {
            config: RenderConfig {
                table_titles: vec!["Args".to_string()],
                title_template: None,
            },
        };
        let info = DocstringInfo {
            brief: "Brief.".to_string(),
            blocks: vec![
                Block::Title(args("", &[("x", "value")])),
                Block::Title(TitleBlock {
                    title: "Note".to_string(),
                    text: "Careful.\n".to_string(),
                    items: vec![],
                }),
            ],
            ..Default::default()
        };
        let page = renderer.render("lib.f", &info).unwrap();
        assert!(page.contains("<colgroup><col width=\"214px\"><col></colgroup>"));
        assert!(page.contains("#### Note:\nCareful."));
        assert!(!page.contains("#### Args:"));
    }
}
