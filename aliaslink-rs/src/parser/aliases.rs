//! Alternate-name extraction from a note's header.
//!
//! Only two textual forms of the `aliases` field are understood:
//!
//! ```text
//! aliases:
//!   - "a"
//!   - AA
//! ```
//!
//! and the inline form `aliases: [a, "AA"]` (brackets optional). Anything
//! else yields no aliases rather than an error.

use crate::parser::frontmatter::split_header;

/// The field name, matched at the start of a line.
pub const ALIASES_FIELD: &str = "aliases:";

/// Prefix of one block-list item line.
pub const LIST_ITEM_PREFIX: &str = "  - ";

/// Extract the alternate names of a note.
///
/// When the text has a `---` header, only the header is searched.
/// Otherwise the whole text is searched for the field. Never fails: an
/// absent or unparsable field produces an empty list.
pub fn extract_aliases(content: &str) -> Vec<String> {
    let doc = split_header(content);
    let region = if doc.has_header() { doc.header } else { content };

    let mut lines = region.lines();
    while let Some(line) = lines.next() {
        let Some(rest) = line.strip_prefix(ALIASES_FIELD) else {
            continue;
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return parse_block_list(lines);
        }
        return parse_inline_list(rest);
    }

    Vec::new()
}

/// Collect the contiguous `  - item` lines following the field.
fn parse_block_list<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map_while(|line| line.strip_prefix(LIST_ITEM_PREFIX))
        .map(unquote)
        .filter(|alias| !alias.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated list, optionally wrapped in `[` `]`.
fn parse_inline_list(rest: &str) -> Vec<String> {
    let inner = rest.strip_prefix('[').unwrap_or(rest);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner
        .split(',')
        .map(unquote)
        .filter(|alias| !alias.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim whitespace and strip one surrounding quote character at each end.
fn unquote(item: &str) -> &str {
    let item = item.trim();
    let item = item.strip_prefix(['"', '\'']).unwrap_or(item);
    let item = item.strip_suffix(['"', '\'']).unwrap_or(item);
    item.trim()
}
