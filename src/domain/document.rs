//! Parsed HTML document
//!
//! A `Document` owns the node arena produced by html5ever and never changes
//! after construction. Selections borrow from it, so a `NodeSet` can never
//! outlive the document it was selected from.

use scraper::Html;

use crate::domain::node_set::NodeSet;
use crate::infrastructure::config::ParseMode;
use crate::infrastructure::parsing::{DocumentParser, Scope, selector};
use crate::infrastructure::parsing_error::DominoResult;

pub struct Document {
    html: Html,
    mode: ParseMode,
}

impl Document {
    /// Parse a full HTML document. Never fails: malformed markup is repaired
    /// the way browsers do it.
    pub fn parse(markup: &str) -> Self {
        DocumentParser::new().parse(markup)
    }

    /// Parse markup as a body fragment
    pub fn parse_fragment(markup: &str) -> Self {
        DocumentParser::with_mode(ParseMode::Fragment).parse(markup)
    }

    /// Parse raw bytes. Fails only if the bytes are not UTF-8.
    pub fn from_utf8(bytes: &[u8]) -> DominoResult<Self> {
        DocumentParser::new().parse_bytes(bytes)
    }

    pub(crate) const fn from_html(html: Html, mode: ParseMode) -> Self {
        Self { html, mode }
    }

    pub const fn html(&self) -> &Html {
        &self.html
    }

    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Recoverable errors reported by the tree builder while parsing
    pub fn parse_errors(&self) -> impl Iterator<Item = &str> {
        self.html.errors.iter().map(AsRef::as_ref)
    }

    /// The single-element selection holding the root `<html>` element
    pub fn root(&self) -> NodeSet<'_> {
        NodeSet::from_nodes(vec![self.html.root_element()])
    }

    /// Select every element matching `selector`, in document order
    pub fn select(&self, selector: &str) -> DominoResult<NodeSet<'_>> {
        selector::select(Scope::Document(self), selector)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("mode", &self.mode)
            .field("parse_errors", &self.html.errors.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::parsing_error::DominoError;

    #[test]
    fn test_parse_inserts_implied_structure() {
        let doc = Document::parse("<p>hello");
        assert_eq!(doc.select("html").unwrap().len(), 1);
        assert_eq!(doc.select("head").unwrap().len(), 1);
        assert_eq!(doc.select("body > p").unwrap().len(), 1);
    }

    #[test]
    fn test_parse_auto_closes_unclosed_tags() {
        let doc = Document::parse("<ul><li>one<li>two<li>three</ul>");
        let items = doc.select("ul > li").unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items.text(), "onetwothree");
    }

    #[test]
    fn test_parse_empty_string() {
        let doc = Document::parse("");
        assert_eq!(doc.select("body").unwrap().len(), 1);
        assert_eq!(doc.select("p").unwrap().len(), 0);
    }

    #[test]
    fn test_fragment_mode_has_no_head() {
        let doc = Document::parse_fragment("<td>cell</td><span>x</span>");
        assert_eq!(doc.mode(), ParseMode::Fragment);
        assert_eq!(doc.select("head").unwrap().len(), 0);
        assert_eq!(doc.select("span").unwrap().text(), "x");
    }

    #[test]
    fn test_from_utf8_rejects_invalid_bytes() {
        let err = Document::from_utf8(&[0x3c, 0x70, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, DominoError::ParseFailure { .. }));
    }

    #[test]
    fn test_from_utf8_accepts_valid_bytes() {
        let doc = Document::from_utf8("<b>café</b>".as_bytes()).unwrap();
        assert_eq!(doc.select("b").unwrap().text(), "café");
    }

    #[test]
    fn test_root_is_html_element() {
        let doc = Document::parse("<title>t</title><p>body text</p>");
        let root = doc.root();
        assert_eq!(root.len(), 1);
        assert_eq!(root.text(), "tbody text");
    }
}
