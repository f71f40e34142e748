//! Body rewriting against an alias index.
//!
//! The body is held as a sequence of segments. Existing wikilinks become
//! protected segments up front. Each index entry then splits the remaining
//! plain-text segments around its occurrences, replacing every accepted
//! occurrence with a placeholder that refers to a pending substitution.
//! Placeholders are not text, so no later (shorter) entry can match inside
//! or across them. Finally every placeholder is resolved to its markup,
//! once.

use crate::index::AliasIndex;
use crate::parser::wikilink::{find_link_spans, format_link};
use crate::types::{AliasEntry, Substitution};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Matching options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteOptions {
    /// Reject occurrences that sit inside a larger word. Off by default:
    /// plain substring matching is the standard behavior.
    #[serde(default)]
    pub word_boundaries: bool,
}

/// The result of rewriting a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rewrite {
    /// The rewritten body.
    pub body: String,

    /// Substitutions in the order they were made (index order, then
    /// left to right within one entry).
    pub substitutions: Vec<Substitution>,
}

impl Rewrite {
    pub fn is_unchanged(&self) -> bool {
        self.substitutions.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    /// Plain text still open to matching.
    Text(&'a str),
    /// An existing link, emitted verbatim.
    Protected(&'a str),
    /// A consumed occurrence; the value indexes the substitution list.
    Placeholder(usize),
}

/// Rewrite `body` with default options, returning only the new text.
pub fn rewrite_body(body: &str, index: &AliasIndex) -> String {
    rewrite_body_with(body, index, &RewriteOptions::default()).body
}

/// Rewrite `body`, reporting every substitution made.
///
/// Idempotent for a fixed index and options: everything this produces is
/// link markup, which a second pass treats as protected.
pub fn rewrite_body_with(body: &str, index: &AliasIndex, options: &RewriteOptions) -> Rewrite {
    let mut segments = protect_links(body);
    let mut substitutions: Vec<Substitution> = Vec::new();

    for entry in index {
        segments = substitute(segments, entry, options, &mut substitutions);
    }

    debug!(count = substitutions.len(), "rewrite complete");

    let body = resolve(&segments, &substitutions);
    Rewrite {
        body,
        substitutions,
    }
}

/// Phase 1: split the body into plain text and existing links.
fn protect_links(body: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for span in find_link_spans(body) {
        if span.range.start > last {
            segments.push(Segment::Text(&body[last..span.range.start]));
        }
        segments.push(Segment::Protected(&body[span.range.clone()]));
        last = span.range.end;
    }

    if last < body.len() {
        segments.push(Segment::Text(&body[last..]));
    }

    segments
}

/// Phase 2: replace every accepted occurrence of one entry's text.
fn substitute<'a>(
    segments: Vec<Segment<'a>>,
    entry: &AliasEntry,
    options: &RewriteOptions,
    substitutions: &mut Vec<Substitution>,
) -> Vec<Segment<'a>> {
    let needle = entry.text.as_str();
    if needle.is_empty() {
        return segments;
    }

    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        let Segment::Text(text) = segment else {
            out.push(segment);
            continue;
        };

        let mut last = 0;
        let mut pos = 0;

        while let Some(found) = text[pos..].find(needle) {
            let start = pos + found;
            let end = start + needle.len();

            if options.word_boundaries && !at_word_boundaries(text, start, end) {
                // Retry from the next character; a later overlapping
                // occurrence may still qualify.
                pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
                continue;
            }

            if start > last {
                out.push(Segment::Text(&text[last..start]));
            }
            out.push(Segment::Placeholder(substitutions.len()));
            substitutions.push(Substitution {
                owner: entry.owner.clone(),
                text: entry.text.clone(),
                markup: format_link(&entry.owner, &entry.text),
            });

            last = end;
            pos = end;
        }

        if last < text.len() {
            out.push(Segment::Text(&text[last..]));
        }
    }

    out
}

/// Phase 3: emit text, protected links and resolved placeholders.
fn resolve(segments: &[Segment<'_>], substitutions: &[Substitution]) -> String {
    let mut body = String::new();
    for segment in segments {
        match *segment {
            Segment::Text(text) | Segment::Protected(text) => body.push_str(text),
            Segment::Placeholder(i) => body.push_str(&substitutions[i].markup),
        }
    }
    body
}

/// Whether `text[start..end]` is not glued to a word character on either
/// side. Edges of the segment count as boundaries.
fn at_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];

    let starts_with_word = matched.chars().next().is_some_and(is_word_char);
    let before = text[..start].chars().next_back();
    if starts_with_word && before.is_some_and(is_word_char) {
        return false;
    }

    let ends_with_word = matched.chars().next_back().is_some_and(is_word_char);
    let after = text[end..].chars().next();
    if ends_with_word && after.is_some_and(is_word_char) {
        return false;
    }

    true
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
