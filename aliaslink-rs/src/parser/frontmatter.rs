//! Header (frontmatter) detection.
//!
//! The header is a leading block opened and closed by lines consisting
//! solely of `---`. It is returned verbatim so that reassembly after a
//! body rewrite is a plain concatenation.

use crate::types::Document;

/// The header delimiter line.
pub const DELIMITER: &str = "---";

/// Split raw note text into header and body.
///
/// The header includes both delimiter lines, everything between them and
/// the line break that ends the closing delimiter. Without a header block
/// at the very start of the text, the header is empty and the body is the
/// whole text.
pub fn split_header(content: &str) -> Document<'_> {
    let no_header = Document {
        header: "",
        body: content,
    };

    let mut lines = LineSpans::new(content);

    // Frontmatter must start at the very beginning with a bare ---
    match lines.next() {
        Some((line, _)) if line == DELIMITER => {}
        _ => return no_header,
    }

    for (line, end) in lines {
        if line == DELIMITER {
            return Document {
                header: &content[..end],
                body: &content[end..],
            };
        }
    }

    // No closing delimiter found
    no_header
}

/// Reassemble a header and a (possibly rewritten) body.
pub fn reassemble(header: &str, body: &str) -> String {
    let mut content = String::with_capacity(header.len() + body.len());
    content.push_str(header);
    content.push_str(body);
    content
}

/// Iterator over lines yielding the line text (without its terminator,
/// `\r\n` tolerated) and the byte offset just past the terminator.
struct LineSpans<'a> {
    content: &'a str,
    pos: usize,
}

impl<'a> LineSpans<'a> {
    fn new(content: &'a str) -> Self {
        Self { content, pos: 0 }
    }
}

impl<'a> Iterator for LineSpans<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.content.len() {
            return None;
        }

        let rest = &self.content[self.pos..];
        let (line, consumed) = match rest.find('\n') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;

        let line = line.strip_suffix('\r').unwrap_or(line);
        Some((line, self.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_no_frontmatter() {
        let content = "Just some content";
        let doc = split_header(content);
        assert_eq!(doc.header, "");
        assert_eq!(doc.body, "Just some content");
        assert!(!doc.has_header());
    }

    #[test]
    fn test_split_with_frontmatter() {
        let content = "---\ntitle: Test\naliases: [a, b]\n---\n\nContent here";
        let doc = split_header(content);
        assert_eq!(doc.header, "---\ntitle: Test\naliases: [a, b]\n---\n");
        assert_eq!(doc.body, "\nContent here");
    }

    #[test]
    fn test_split_frontmatter_at_eof() {
        let content = "---\ntitle: Test\n---";
        let doc = split_header(content);
        assert_eq!(doc.header, content);
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_split_empty_frontmatter() {
        let content = "---\n---\nBody";
        let doc = split_header(content);
        assert_eq!(doc.header, "---\n---\n");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_split_crlf() {
        let content = "---\r\ntitle: Test\r\n---\r\nBody";
        let doc = split_header(content);
        assert_eq!(doc.header, "---\r\ntitle: Test\r\n---\r\n");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_no_closing_delimiter() {
        let content = "---\ntitle: Test\n\nContent without closing";
        let doc = split_header(content);
        assert_eq!(doc.header, "");
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_delimiter_must_be_first_line() {
        let content = "\n---\ntitle: Test\n---\nBody";
        let doc = split_header(content);
        assert_eq!(doc.header, "");
    }

    #[test]
    fn test_delimiter_must_be_alone_on_line() {
        let content = "--- \ntitle: Test\n---\nBody";
        assert_eq!(split_header(content).header, "");

        let content = "---\ntitle: Test\n----\nBody";
        assert_eq!(split_header(content).header, "");
    }

    #[test]
    fn test_triple_dash_in_content() {
        let content = "---\ntitle: Test\n---\n\n---\n\nThis has triple dashes in content";
        let doc = split_header(content);
        assert_eq!(doc.header, "---\ntitle: Test\n---\n");
        assert!(doc.body.contains("---"));
    }

    #[test]
    fn test_reassemble_round_trip() {
        for content in [
            "---\naliases: [a]\n---\nBody ABCD",
            "No header at all",
            "---\nunterminated",
            "",
        ] {
            let doc = split_header(content);
            assert_eq!(reassemble(doc.header, doc.body), content);
        }
    }
}
