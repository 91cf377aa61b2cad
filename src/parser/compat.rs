//! Compatibility notes: `@compatibility(tag) ... @end_compatibility` blocks.
//!
//! Each block is cut out of the docstring and its body is kept under its tag.
//! A tag seen twice keeps the body of the later block.

use crate::model::{CompatibilityNote, CompatibilityNotes};
use regex::Regex;
use std::sync::LazyLock;

// Tag on the marker line; the body starts after the line break
static RE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*@compatibility\(([^\n]+?)\)\s*\n").unwrap());

static RE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*@end_compatibility").unwrap());

/// Strip every compatibility block from `text`.
///
/// Returns the remaining text and the notes keyed by tag. An open marker
/// without a matching close is left in place.
pub fn extract(text: &str) -> (String, CompatibilityNotes) {
    let mut notes = CompatibilityNotes::new();
    let mut current = text.to_string();

    // Removing an inner block can pair up an outer one; repeat until stable.
    loop {
        let (stripped, found) = extract_once(&current);
        if found.is_empty() {
            break;
        }
        for note in found {
            tracing::debug!(tag = %note.tag, "extracted compatibility note");
            notes.insert(note.tag, note.body);
        }
        current = stripped;
    }

    (current, notes)
}

/// Single left-to-right pass. Blocks whose body holds another open marker
/// are skipped in favour of the inner one.
fn extract_once(text: &str) -> (String, Vec<CompatibilityNote>) {
    let mut out = String::with_capacity(text.len());
    let mut notes = Vec::new();
    let mut copied = 0;
    let mut search = 0;

    while let Some(open) = RE_OPEN.captures_at(text, search) {
        let (Some(span), Some(tag)) = (open.get(0), open.get(1)) else {
            break;
        };
        let body_start = span.end();
        let Some(close) = RE_CLOSE.find_at(text, body_start) else {
            break;
        };

        if let Some(nested) = RE_OPEN.find_at(text, body_start) {
            if nested.start() < close.start() {
                search = nested.start();
                continue;
            }
        }

        out.push_str(&text[copied..span.start()]);
        notes.push(CompatibilityNote {
            tag: tag.as_str().to_string(),
            body: text[body_start..close.start()].to_string(),
        });
        copied = close.end();
        search = close.end();
    }

    out.push_str(&text[copied..]);
    (out, notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_and_removes_block() {
        let input = "Adds.\n\n@compatibility(eager)\nNot supported.\n@end_compatibility\nTail.";
        let (text, notes) = extract(input);
        assert_eq!(text, "Adds.\n\n\nTail.");
        assert_eq!(notes.get("eager").map(String::as_str), Some("Not supported.\n"));
    }

    #[test]
    fn indented_markers_are_removed_with_their_indent() {
        let input = "A\n  @compatibility(TF2)\n  body\n  @end_compatibility\nB";
        let (text, notes) = extract(input);
        assert_eq!(text, "A\n\nB");
        assert_eq!(notes["TF2"], "  body\n");
    }

    #[test]
    fn duplicate_tags_keep_the_last_body() {
        let input = concat!(
            "@compatibility(TensorFlow)\nfirst\n@end_compatibility\n",
            "@compatibility(TensorFlow)\nsecond\n@end_compatibility\n"
        );
        let (_, notes) = extract(input);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes["TensorFlow"], "second\n");
    }

    #[test]
    fn dangling_open_marker_is_untouched() {
        let input = "Doc\n@compatibility(eager)\nno close here\n";
        let (text, notes) = extract(input);
        assert_eq!(text, input);
        assert!(notes.is_empty());
    }

    #[test]
    fn dangling_open_before_a_complete_block() {
        let input = "@compatibility(a)\nlost\n@compatibility(b)\nkept\n@end_compatibility\n";
        let (text, notes) = extract(input);
        assert_eq!(text, "@compatibility(a)\nlost\n\n");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes["b"], "kept\n");
    }

    #[test]
    fn bodies_never_contain_markers() {
        let input = "@compatibility(outer)\nx\n@compatibility(inner)\ny\n@end_compatibility\nz\n@end_compatibility\n";
        let (_, notes) = extract(input);
        for body in notes.values() {
            assert!(!body.contains("@compatibility("));
            assert!(!body.contains("@end_compatibility"));
        }
        assert_eq!(notes["inner"], "y\n");
    }

    #[test]
    fn extraction_is_idempotent() {
        let inputs = [
            "Doc\n@compatibility(eager)\nbody\n@end_compatibility\nrest\n",
            "@compatibility(outer)\nx\n@compatibility(inner)\ny\n@end_compatibility\nz\n@end_compatibility\n",
            "@compatibility(a)\nno close\n",
        ];
        for input in inputs {
            let (once, _) = extract(input);
            let (twice, notes) = extract(&once);
            assert_eq!(twice, once);
            assert!(notes.is_empty());
        }
    }
}
