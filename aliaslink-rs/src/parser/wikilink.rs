//! Wikilink detection and formatting.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

// Wikilink pattern: [[target]] or [[target|display]]
// Neither part may contain brackets or a line break, so a link never
// spans another link's markup.
// \[\[                 - Opening [[
// ([^\[\]|\n]+)        - Target (group 1)
// (?:\|([^\[\]\n]*))?  - Display text (group 2)
// \]\]                 - Closing ]]
static WIKILINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\[\]|\n]+)(?:\|([^\[\]\n]*))?\]\]").unwrap()
});

/// Characters that cannot appear in a link target or generated display text.
pub const MARKUP_CHARS: &[char] = &['[', ']', '|', '\n', '\r'];

/// An existing wikilink found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    /// Byte range of the whole markup, `[[` through `]]`.
    pub range: Range<usize>,

    /// The link target.
    pub target: String,

    /// The display text after `|`, if any.
    pub display: Option<String>,
}

/// Find every existing wikilink in `text`, in order of appearance.
///
/// Embeds (`![[...]]`) are found too; the leading `!` is left outside the
/// span.
pub fn find_link_spans(text: &str) -> Vec<LinkSpan> {
    WIKILINK
        .captures_iter(text)
        .filter_map(|cap| {
            let full = cap.get(0)?;
            Some(LinkSpan {
                range: full.range(),
                target: cap.get(1)?.as_str().to_string(),
                display: cap.get(2).map(|m| m.as_str().to_string()),
            })
        })
        .collect()
}

/// Whether `text` can be written inside link markup without changing how
/// the markup parses.
pub fn is_linkable(text: &str) -> bool {
    !text.is_empty() && !text.contains(MARKUP_CHARS)
}

/// Format link markup for `owner` as matched by `text`.
///
/// Yields `[[owner]]` when the text is the canonical name and
/// `[[owner|text]]` otherwise.
pub fn format_link(owner: &str, text: &str) -> String {
    let mut result = String::with_capacity(owner.len() + text.len() + 5);
    result.push_str("[[");
    result.push_str(owner);
    if text != owner {
        result.push('|');
        result.push_str(text);
    }
    result.push_str("]]");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_link() {
        let spans = find_link_spans("See [[My Note]] for details.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range, 4..15);
        assert_eq!(spans[0].target, "My Note");
        assert!(spans[0].display.is_none());
    }

    #[test]
    fn test_link_with_display() {
        let spans = find_link_spans("See [[My Note|the note]] for details.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].target, "My Note");
        assert_eq!(spans[0].display.as_deref(), Some("the note"));
    }

    #[test]
    fn test_multiple_links() {
        let text = "[[A]] and [[B|b]] and ![[image.png]]";
        let spans = find_link_spans(text);
        assert_eq!(spans.len(), 3);
        assert_eq!(&text[spans[2].range.clone()], "[[image.png]]");
    }

    #[test]
    fn test_unclosed_link_is_not_a_span() {
        assert!(find_link_spans("[[open only").is_empty());
        assert!(find_link_spans("[[across\nlines]]").is_empty());
    }

    #[test]
    fn test_extra_brackets() {
        let text = "[[[ABCD]]]";
        let spans = find_link_spans(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range, 1..9);
        assert_eq!(spans[0].target, "ABCD");
    }

    #[test]
    fn test_link_never_spans_generated_markup() {
        let text = "[[foo [[ABCD]]";
        let spans = find_link_spans(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].range.clone()], "[[ABCD]]");
    }

    #[test]
    fn test_format_link() {
        assert_eq!(format_link("ABCD", "ABCD"), "[[ABCD]]");
        assert_eq!(format_link("ABCD", "AA"), "[[ABCD|AA]]");
    }

    #[test]
    fn test_formatted_link_parses_back() {
        let markup = format_link("Project Plan", "the plan");
        let spans = find_link_spans(&markup);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range, 0..markup.len());
        assert_eq!(spans[0].target, "Project Plan");
        assert_eq!(spans[0].display.as_deref(), Some("the plan"));
    }

    #[test]
    fn test_is_linkable() {
        assert!(is_linkable("ABCD"));
        assert!(is_linkable("C++ (lang)"));
        assert!(!is_linkable(""));
        assert!(!is_linkable("a|b"));
        assert!(!is_linkable("[x]"));
        assert!(!is_linkable("two\nlines"));
    }
}
