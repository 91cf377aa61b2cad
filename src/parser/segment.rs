//! Split a docstring body into prose and title blocks.
//!
//! A title line is a short sentence-case phrase followed by a colon:
//!
//! ```text
//! Computes `max(features, 0)`.
//!
//! Args:
//!   features: A `Tensor`.
//!   name: A name for the operation (optional).
//!
//! More freeform markdown text.
//! ```
//!
//! It must sit at the scan start or right after a blank line. Its content is
//! every following line up to the next line that starts in column 0 with
//! non-whitespace, so blocks need no terminator. Scanning resumes at that line,
//! which is why a series of blocks needs a blank line only before the first.
//! Any title phrase qualifies, not just the well-known keywords.

use super::items::parse_items;
use crate::model::{Block, TitleBlock};
use crate::text::{dedent, is_blank};

/// Longest title phrase, first letter included.
pub const MAX_TITLE_LEN: usize = 21;

/// Segment `docstring` into blocks, in source order.
pub fn split_blocks(docstring: &str) -> Vec<Block> {
    let lines: Vec<&str> = docstring.split('\n').collect();
    let mut blocks = Vec::new();

    let mut scan_start = 0;
    let mut i = 0;
    while i < lines.len() {
        let at_boundary = i == scan_start || is_blank(lines[i - 1]);
        let Some(title) = at_boundary.then(|| match_title(lines[i])).flatten() else {
            i += 1;
            continue;
        };

        push_prose(&mut blocks, &lines[scan_start..i]);

        let end = lines[i + 1..]
            .iter()
            .position(|l| starts_unindented(l))
            .map_or(lines.len(), |offset| i + 1 + offset);
        let content = dedent(&lines[i + 1..end].join("\n"));
        let (text, items) = parse_items(&content);
        blocks.push(Block::Title(TitleBlock { title, text, items }));

        scan_start = end;
        i = end;
    }
    push_prose(&mut blocks, &lines[scan_start..]);

    tracing::debug!(blocks = blocks.len(), "segmented docstring");
    blocks
}

/// Recognize `Title:` and return the title without the colon.
///
/// Leading indentation and trailing spaces are allowed; nothing else may
/// follow the colon.
pub fn match_title(line: &str) -> Option<String> {
    let phrase = line.trim_start_matches([' ', '\t']);
    let first = phrase.chars().next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }

    let end = phrase
        .char_indices()
        .take(MAX_TITLE_LEN)
        .take_while(|&(_, c)| c.is_alphanumeric() || matches!(c, '_' | ' ' | '\t'))
        .last()
        .map_or(0, |(idx, c)| idx + c.len_utf8());

    let rest = phrase[end..].trim_start_matches([' ', '\t']);
    let after_colon = rest.strip_prefix(':')?;
    if !is_blank(after_colon) {
        return None;
    }

    Some(phrase[..end].trim_end().to_string())
}

fn starts_unindented(line: &str) -> bool {
    line.chars().next().is_some_and(|c| !c.is_whitespace())
}

/// Lines are kept verbatim minus surrounding blank lines.
fn push_prose(blocks: &mut Vec<Block>, lines: &[&str]) {
    let Some(start) = lines.iter().position(|l| !is_blank(l)) else {
        return;
    };
    blocks.push(Block::Prose {
        text: lines[start..].join("\n").trim_end().to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn prose(text: &str) -> Block {
        Block::Prose {
            text: text.to_string(),
        }
    }

    fn title(title: &str, text: &str, items: &[(&str, &str)]) -> Block {
        Block::Title(TitleBlock {
            title: title.to_string(),
            text: text.to_string(),
            items: items
                .iter()
                .map(|(n, d)| (n.to_string(), d.to_string()))
                .collect(),
        })
    }

    #[test]
    fn title_lines() {
        assert_eq!(match_title("Args:").as_deref(), Some("Args"));
        assert_eq!(match_title("  Returns :  ").as_deref(), Some("Returns"));
        assert_eq!(match_title("Shape of output:").as_deref(), Some("Shape of output"));
        assert_eq!(match_title("args:"), None);
        assert_eq!(match_title("Note: inline text"), None);
        assert_eq!(match_title("Args"), None);
        assert_eq!(match_title(""), None);
    }

    #[test]
    fn title_length_bound() {
        // 21 characters including the first letter
        assert_eq!(
            match_title("Abcdefghijklmnopqrstu:").as_deref(),
            Some("Abcdefghijklmnopqrstu")
        );
        assert_eq!(match_title("Abcdefghijklmnopqrstuv:"), None);
        assert_eq!(
            match_title("Abcdefghijklmnopqrstu   :").as_deref(),
            Some("Abcdefghijklmnopqrstu")
        );
    }

    #[test]
    fn args_block_between_prose() {
        let body = "\nArgs:\n  x: input value.\n  y: another.\n\nDone.";
        assert_eq!(
            split_blocks(body),
            vec![
                title("Args", "", &[("x", "input value."), ("y", "another.")]),
                prose("Done."),
            ]
        );
    }

    #[test]
    fn prose_before_block_drops_separator() {
        let body = "Intro paragraph.\n\nReturns:\n  A value.\n";
        assert_eq!(
            split_blocks(body),
            vec![prose("Intro paragraph."), title("Returns", "A value.\n", &[])]
        );
    }

    #[test]
    fn text_without_titles_is_one_prose_block() {
        let body = "Just text.\nMore: with colon.\n\n  indented\n";
        assert_eq!(split_blocks(body), vec![prose(body.trim_end())]);
    }

    #[test]
    fn title_free_inputs_stay_one_prose_block() {
        let cases = [
            "  indented line\n    deeper still",
            "Note that x: y holds.",
            "Ratio 3:4 matters",
            "x: lowercase item\ny: another",
            "First paragraph.\n\n  indented: value\n\nlast: one",
            "A very long sentence that ends:",
            "Trailing text: after the colon",
            "```python\nprint(1)\n```",
            "Intro.\n\n```\n>>> f()\n```",
        ];
        for body in cases {
            assert_eq!(split_blocks(body), vec![prose(body)], "input: {body:?}");
        }
    }

    #[test]
    fn title_needs_blank_line_before() {
        let body = "Some text\nArgs:\n  x: y\n";
        assert_eq!(split_blocks(body), vec![prose(body.trim_end())]);
    }

    #[test]
    fn consecutive_blocks_need_one_blank_line() {
        let body = "\nArgs:\n  x: first\nReturns:\n  Something.\nRaises:\n  ValueError: bad.";
        assert_eq!(
            split_blocks(body),
            vec![
                title("Args", "", &[("x", "first")]),
                title("Returns", "Something.", &[]),
                title("Raises", "", &[("ValueError", "bad.")]),
            ]
        );
    }

    #[test]
    fn title_without_content() {
        assert_eq!(split_blocks("Examples:"), vec![title("Examples", "", &[])]);
        assert_eq!(
            split_blocks("\nSee also:\nafter"),
            vec![title("See also", "", &[]), prose("after")]
        );
    }

    #[test]
    fn leading_text_and_multiline_items() {
        let body = "\nArgs:\n  The inputs.\n\n  a: first line\n    second line\n  b: last\n";
        assert_eq!(
            split_blocks(body),
            vec![title(
                "Args",
                "The inputs.\n\n",
                &[("a", "first line\n  second line"), ("b", "last")]
            )]
        );
    }

    #[test]
    fn unknown_titles_are_still_blocks() {
        let body = "\nCustom section:\n  k: v\n";
        assert_eq!(
            split_blocks(body),
            vec![title("Custom section", "", &[("k", "v")])]
        );
    }

    #[test]
    fn empty_input() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n  \n").is_empty());
    }
}
