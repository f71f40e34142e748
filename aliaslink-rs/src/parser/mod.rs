//! Parsers for the note syntax the linker reads and writes.

pub mod aliases;
pub mod frontmatter;
pub mod wikilink;

pub use aliases::extract_aliases;
pub use frontmatter::{reassemble, split_header};
pub use wikilink::{find_link_spans, format_link, is_linkable, LinkSpan};
