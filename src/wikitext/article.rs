//! Wrapper tying a fetched markup string to its parsed form.

use std::cell::{Ref, RefCell};

use crate::wikitext::document::{ParsedDocument, parse_article};

/// An article as it came off the wire: the raw markup, the resolved page
/// title (when known), and a lazily-built [`ParsedDocument`]. Parsing happens
/// on first access and is cached; it cannot fail, so the accessors hand back
/// plain references.
#[derive(Debug, Clone)]
pub struct Article {
    text: String,
    title: Option<String>,
    parsed: RefCell<Option<ParsedDocument>>,
}

impl Article {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            title: None,
            parsed: RefCell::new(None),
        }
    }

    /// Shared getter, parsing on first call and caching the result.
    pub fn parsed(&self) -> Ref<'_, ParsedDocument> {
        if self.parsed.borrow().is_none() {
            *self.parsed.borrow_mut() = Some(parse_article(&self.text));
        }
        Ref::map(self.parsed.borrow(), |slot| slot.as_ref().unwrap())
    }

    /// Consume self and return the owned document, reusing the cache when the
    /// article was already parsed.
    pub fn into_parsed(self) -> ParsedDocument {
        match self.parsed.into_inner() {
            Some(parsed) => parsed,
            None => parse_article(&self.text),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title<S: Into<String>>(&mut self, title: Option<S>) {
        self.title = title.map(|t| t.into());
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_parse_and_cache() {
        let article = Article::new("Plain text with '''bold''' in it.");
        assert!(article.title().is_none());
        let doc = article.parsed();
        assert_eq!(doc.paragraphs.len(), 1);
        drop(doc);
        // second access reuses the cache
        let again = article.parsed();
        assert_eq!(again.paragraphs.len(), 1);
    }

    #[test]
    fn title_setter_getter() {
        let mut article = Article::new("dummy");
        assert!(article.title().is_none());
        article.set_title(Some("Test Page"));
        assert_eq!(article.title(), Some("Test Page"));
        article.set_title::<&str>(None);
        assert!(article.title().is_none());
    }

    #[test]
    fn into_parsed_matches_fresh_parse() {
        let article = Article::new("Some prose.");
        assert_eq!(article.text(), "Some prose.");
        let eager = article.parsed().clone();
        assert_eq!(article.into_parsed(), eager);
    }
}
