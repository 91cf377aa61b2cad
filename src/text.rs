//! Indentation helpers shared by the parser and the renderers.

/// Remove common leading indentation from a multi-line string.
///
/// Whitespace-only lines are emptied and ignored when computing the margin.
/// Line breaks, including a trailing one, are kept.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| if l.trim().is_empty() { "" } else { l })
        .collect();

    let margin = lines
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| leading_whitespace(l))
        .reduce(common_prefix)
        .unwrap_or("");

    if margin.is_empty() {
        return lines.join("\n");
    }

    lines
        .iter()
        .map(|l| l.strip_prefix(margin).unwrap_or(l))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep the first line as-is and dedent the rest.
///
/// Descriptions start right after `name: `, so only their continuation lines
/// carry the block's indentation.
pub fn dedent_after_first_line(text: &str) -> String {
    match text.split_once('\n') {
        Some((first, rest)) => format!("{}\n{}", first, dedent(rest)),
        None => text.to_string(),
    }
}

/// Leading spaces and tabs of a line.
pub fn leading_whitespace(line: &str) -> &str {
    let end = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..end]
}

/// True for empty and whitespace-only lines.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}
