//! Text cleanup passes applied to raw docstrings before segmentation.
//!
//! Order matters: maintenance markers and tooling directives are stripped
//! first, then interactive examples are fenced, and only then are `# Keyword`
//! headings rewritten, so the rewrite can see the fences.

use crate::text::is_blank;
use regex::Regex;
use std::sync::LazyLock;

static RE_TODO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#? *TODO.*").unwrap());

static RE_TOOL_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)# *?(?:pylint|pyformat):.*").unwrap());

// `# Returns`, `  #Args:` ... as a whole line
static RE_KEYWORD_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<indent>\s*)#\s*",
        r"(?P<keyword>Args|Arguments|Returns|Raises|Yields|Examples?|Notes?)",
        r"\s*:?\s*$"
    ))
    .unwrap()
});

const FENCE: &str = "```";
const PROMPT: &str = ">>>";

/// Passes 1–2: drop maintenance markers and tooling directives.
pub fn strip_annotations(text: &str) -> String {
    strip_tool_directives(&strip_todos(text))
}

/// Passes 3–4: fence interactive examples, then canonicalize headings.
pub fn format_body(text: &str) -> String {
    downgrade_heading_keywords(&add_doctest_fences(text))
}

/// Remove everything from a `TODO` marker (optionally `#`-prefixed) to end of line.
pub fn strip_todos(text: &str) -> String {
    RE_TODO.replace_all(text, "").into_owned()
}

/// Remove `# pylint: ...` and `# pyformat: ...` directives, case-insensitive.
pub fn strip_tool_directives(text: &str) -> String {
    RE_TOOL_DIRECTIVE.replace_all(text, "").into_owned()
}

/// Wrap unfenced `>>>` example runs in code fences.
///
/// A run starts on a line whose first non-space text is `>>>` and whose
/// previous line is blank, and continues until the next blank line or the end
/// of the text. Fence lines reuse the run's indentation. An already fenced
/// run is preceded by its opening fence rather than a blank line, so it is
/// left alone.
pub fn add_doctest_fences(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let body = line.trim_start_matches(' ');
        let opens_run = i > 0 && is_blank(lines[i - 1]) && body.starts_with(PROMPT);
        if !opens_run {
            out.push(line.to_string());
            i += 1;
            continue;
        }

        let indent = &line[..line.len() - body.len()];
        let end = lines[i..]
            .iter()
            .position(|l| is_blank(l))
            .map_or(lines.len(), |offset| i + offset);

        out.push(format!("{indent}{FENCE}"));
        out.extend(lines[i..end].iter().map(|l| l.to_string()));
        out.push(format!("{indent}{FENCE}"));
        i = end;
    }

    out.join("\n")
}

/// Rewrite `# Keyword` heading lines to `Keyword:` outside of code fences.
///
/// Only the fixed keyword set is rewritten; the line's indentation is kept.
pub fn downgrade_heading_keywords(text: &str) -> String {
    let mut in_code = false;
    text.split('\n')
        .map(|line| {
            if line.trim().starts_with(FENCE) {
                in_code = !in_code;
                line.to_string()
            } else if in_code {
                line.to_string()
            } else {
                RE_KEYWORD_HEADING
                    .replace(line, "${indent}${keyword}:")
                    .into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
