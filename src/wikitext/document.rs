//! The parser's output type and the top-level parse entry point.

use serde::Serialize;
use std::collections::HashMap;

use crate::wikitext::infobox::{extract_description, extract_infobox};
use crate::wikitext::paragraphs::{Paragraph, segment_paragraphs};

/// Everything the renderer needs from one article: the infobox key/value
/// table, the one-line description (empty when the article has none), and the
/// prose paragraphs in reading order.
///
/// This is a pure value. Parsing the same markup twice produces structurally
/// equal documents, and nothing mutates a document after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub infobox: HashMap<String, String>,
    pub description: String,
    pub paragraphs: Vec<Paragraph>,
}

/// Parse raw MediaWiki markup into a [`ParsedDocument`].
///
/// The extractors and the segmenter each scan the same raw input; there is no
/// pre-removal step between them. Malformed input degrades to empty fields,
/// it never fails.
pub fn parse_article(markup: &str) -> ParsedDocument {
    ParsedDocument {
        infobox: extract_infobox(markup),
        description: extract_description(markup),
        paragraphs: segment_paragraphs(markup),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wikitext::runs::RunKind;

    const SAMPLE: &str = "{{Short description|A text editor}}\n\n{{Infobox software\n|name = Edita\n|developer = [[Jane Doe|Jane]]\n}}\n\n'''Edita''' is an editor.<ref>{{cite web|url=x}}</ref>\n\nIt supports ''many'' [[File format|formats]].";

    #[test]
    fn full_article_parses_into_all_three_parts() {
        let doc = parse_article(SAMPLE);
        assert_eq!(doc.description, "A text editor");
        assert_eq!(doc.infobox.get("name").map(String::as_str), Some("Edita"));
        assert_eq!(
            doc.infobox.get("developer").map(String::as_str),
            Some("Jane")
        );
        assert_eq!(doc.paragraphs.len(), 2);
        assert_eq!(doc.paragraphs[0].runs[0].kind, RunKind::Bold);
        assert_eq!(doc.paragraphs[0].runs[0].content, "Edita");
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(parse_article(SAMPLE), parse_article(SAMPLE));
    }

    #[test]
    fn input_without_braces_degrades_to_prose_only() {
        let markup = "Just a paragraph.\n\nAnd another one.";
        let doc = parse_article(markup);
        assert!(doc.infobox.is_empty());
        assert_eq!(doc.description, "");
        assert_eq!(doc.paragraphs.len(), 2);
    }

    #[test]
    fn empty_input_is_an_empty_document() {
        assert_eq!(parse_article(""), ParsedDocument::default());
    }

    #[test]
    fn document_serializes_with_lowercase_kinds() {
        let doc = parse_article("Some '''bold''' text.");
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains(r#""kind":"bold""#));
        assert!(json.contains(r#""kind":"plain""#));
    }
}
