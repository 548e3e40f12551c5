//! Wikitext parsing module.
//!
//! Takes raw MediaWiki markup and produces structured, renderable data: an
//! infobox key/value table, a one-line description, and prose paragraphs
//! broken into styled text runs. The whole module is pure and never fails on
//! malformed input; absent constructs come back as empty values.

pub mod article;
pub mod document;
pub mod infobox;
pub mod paragraphs;
pub mod runs;

// Re-export commonly used items for ergonomic access.
pub use article::Article;
pub use document::{ParsedDocument, parse_article};
pub use infobox::{extract_description, extract_infobox};
pub use paragraphs::{Paragraph, segment_paragraphs};
pub use runs::{RunKind, TextRun, tokenize};
