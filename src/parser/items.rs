//! Name/description item lists inside a title block.
//!
//! An item starts at column 0 of the dedented block content:
//!
//! ```text
//! **kwargs: passed through.
//! name: A name for the operation,
//!   continued on the next line.
//! ```
//!
//! The name may carry `*`, `**` or a leading quote, and may contain dots and
//! quotes after its first word character. A description runs until the next
//! item or the end of the content and may be empty.

/// Where one item boundary sits in the content.
#[derive(Debug, PartialEq, Eq)]
struct Boundary {
    /// Line start, also the start of the name
    start: usize,
    name_end: usize,
    /// First byte of the description
    end: usize,
}

/// Split dedented content into leading text and `(name, description)` items.
///
/// Without any boundary the whole content is leading text.
pub fn parse_items(content: &str) -> (String, Vec<(String, String)>) {
    let boundaries = find_boundaries(content);

    // text, name, description, name, description, ...
    let mut split: Vec<&str> = Vec::with_capacity(1 + boundaries.len() * 2);
    let first = boundaries.first().map_or(content.len(), |b| b.start);
    split.push(&content[..first]);
    for (i, b) in boundaries.iter().enumerate() {
        let next = boundaries.get(i + 1).map_or(content.len(), |n| n.start);
        split.push(&content[b.start..b.name_end]);
        split.push(&content[b.end..next]);
    }

    let text = split.remove(0).to_string();
    (text, pairs(&split))
}

/// `[a, b, a, b, ...]` into `[(a, b), (a, b), ...]`.
///
/// Descriptions lose their trailing whitespace.
fn pairs(values: &[&str]) -> Vec<(String, String)> {
    debug_assert!(values.len() % 2 == 0, "item values must pair up");
    values
        .chunks_exact(2)
        .map(|pair| (pair[0].to_string(), pair[1].trim_end().to_string()))
        .collect()
}

fn find_boundaries(content: &str) -> Vec<Boundary> {
    let line_starts = std::iter::once(0).chain(
        content
            .char_indices()
            .filter(|&(_, c)| c == '\n')
            .map(|(i, _)| i + 1),
    );

    let mut found: Vec<Boundary> = Vec::new();
    for start in line_starts {
        if found.last().is_some_and(|b| start < b.end) {
            continue;
        }
        if let Some(b) = match_boundary(content, start) {
            found.push(b);
        }
    }
    found
}

/// Match `[*][*]['][\"]name[ ]*:<whitespace>` at `start`.
fn match_boundary(content: &str, start: usize) -> Option<Boundary> {
    let rest = &content[start..];
    let mut pos = 0;

    for marker in ['*', '*', '\'', '"'] {
        if rest[pos..].starts_with(marker) {
            pos += 1;
        }
    }

    let first = rest[pos..].chars().next()?;
    if !is_word_char(first) {
        return None;
    }
    pos += first.len_utf8();

    pos += rest[pos..]
        .chars()
        .take_while(|&c| is_word_char(c) || matches!(c, '.' | '\'' | '"'))
        .map(char::len_utf8)
        .sum::<usize>();
    let name_end = pos;

    pos += rest[pos..].len() - rest[pos..].trim_start_matches([' ', '\t']).len();
    let after_colon = rest[pos..].strip_prefix(':')?;
    pos += 1;

    match after_colon.chars().next() {
        Some(c) if c.is_whitespace() => pos += c.len_utf8(),
        Some(_) => return None,
        None => {}
    }

    Some(Boundary {
        start,
        name_end: start + name_end,
        end: start + pos,
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
