//! CSS selector compilation and evaluation
//!
//! A malformed selector is an error, never an empty result, so callers can
//! tell "zero matches" apart from "bad query".

use std::collections::HashSet;
use std::str::FromStr;

use scraper::{ElementRef, Selector};
use tracing::{debug, warn};

use crate::domain::document::Document;
use crate::domain::node_set::NodeSet;
use crate::infrastructure::parsing_error::{DominoError, DominoResult};

/// A compiled CSS selector together with its source text
#[derive(Debug, Clone)]
pub struct CssSelector {
    source: String,
    compiled: Selector,
}

impl CssSelector {
    /// Compile a selector string
    pub fn parse(selector: &str) -> DominoResult<Self> {
        match Selector::parse(selector) {
            Ok(compiled) => Ok(Self {
                source: selector.to_string(),
                compiled,
            }),
            Err(e) => {
                warn!("Failed to compile selector '{}': {}", selector, e);
                Err(DominoError::invalid_selector(selector, e.to_string()))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Test a single element against this selector, in its document context
    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        self.compiled.matches(element)
    }
}

impl FromStr for CssSelector {
    type Err = DominoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Where a selector is evaluated: the whole document or the descendants of
/// every node in a prior selection
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a, 'doc>
where
    'doc: 'a,
{
    Document(&'doc Document),
    Nodes(&'a NodeSet<'doc>),
}

impl<'doc> From<&'doc Document> for Scope<'_, 'doc> {
    fn from(document: &'doc Document) -> Self {
        Self::Document(document)
    }
}

impl<'a, 'doc> From<&'a NodeSet<'doc>> for Scope<'a, 'doc> {
    fn from(nodes: &'a NodeSet<'doc>) -> Self {
        Self::Nodes(nodes)
    }
}

/// Compile `selector` and evaluate it against `scope`
pub fn select<'a, 'doc>(
    scope: impl Into<Scope<'a, 'doc>>,
    selector: &str,
) -> DominoResult<NodeSet<'doc>>
where
    'doc: 'a,
{
    let compiled = CssSelector::parse(selector)?;
    Ok(evaluate(scope.into(), &compiled))
}

/// Evaluate a compiled selector. Results are in document order with
/// duplicates collapsed by node identity.
pub fn evaluate<'doc>(scope: Scope<'_, 'doc>, selector: &CssSelector) -> NodeSet<'doc> {
    let nodes: Vec<ElementRef<'doc>> = match scope {
        Scope::Document(document) => document.html().select(&selector.compiled).collect(),
        Scope::Nodes(set) if set.len() <= 1 => set
            .first()
            .map(|node| node.select(&selector.compiled).collect())
            .unwrap_or_default(),
        Scope::Nodes(set) => select_from_many(set, selector),
    };

    debug!(
        selector = selector.as_str(),
        matches = nodes.len(),
        "Evaluated selector"
    );

    NodeSet::from_nodes(nodes)
}

/// Nested scoping nodes can yield the same element more than once and
/// out of order, so merge and restore document order.
fn select_from_many<'doc>(set: &NodeSet<'doc>, selector: &CssSelector) -> Vec<ElementRef<'doc>> {
    let mut seen = HashSet::new();
    let mut matched = Vec::new();

    for scope_node in set.iter() {
        for element in scope_node.select(&selector.compiled) {
            if seen.insert(element.id()) {
                matched.push(element);
            }
        }
    }

    let Some(first) = matched.first().copied() else {
        return matched;
    };
    if matched.len() == 1 {
        return matched;
    }

    let root = first.ancestors().last().unwrap_or(*first);
    root.descendants()
        .filter(|node| seen.contains(&node.id()))
        .filter_map(ElementRef::wrap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PAGE: &str = r#"
        <div id="x">
            <p>hi</p>
            <p class="a">bye</p>
        </div>
        <section>
            <h2 title="">Heading</h2>
            <ul>
                <li data-n="1">one</li>
                <li data-n="2" class="a b">two</li>
                <li data-n="3">three</li>
            </ul>
        </section>
    "#;

    #[rstest]
    #[case("p", 2)]
    #[case("#x", 1)]
    #[case(".a", 2)]
    #[case("li.a.b", 1)]
    #[case("[data-n]", 3)]
    #[case("[data-n='2']", 1)]
    #[case("[data-n^='1']", 1)]
    #[case("[title]", 1)]
    #[case("div p", 2)]
    #[case("div > p", 2)]
    #[case("h2 + ul", 1)]
    #[case("p ~ p", 1)]
    #[case("li:first-child", 1)]
    #[case("li:nth-child(2)", 1)]
    #[case("li:not(.a)", 2)]
    #[case("p, li", 5)]
    #[case("span", 0)]
    fn test_selector_match_counts(#[case] selector: &str, #[case] expected: usize) {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.select(selector).unwrap().len(), expected, "{selector}");
    }

    #[rstest]
    #[case(">>invalid<<")]
    #[case("")]
    #[case("p[")]
    #[case("div >")]
    #[case(":no-such-pseudo")]
    fn test_invalid_selectors_are_errors(#[case] selector: &str) {
        let doc = Document::parse(PAGE);
        let err = doc.select(selector).unwrap_err();
        assert!(
            matches!(err, DominoError::InvalidSelector { selector: ref s, .. } if s == selector),
            "{selector}: {err}"
        );
    }

    #[test]
    fn test_results_in_document_order() {
        let doc = Document::parse(PAGE);
        let set = doc.select("li, p, h2").unwrap();
        let texts: Vec<String> = set.iter().map(|el| el.text().collect()).collect();
        assert_eq!(texts, ["hi", "bye", "Heading", "one", "two", "three"]);
    }

    #[test]
    fn test_scoped_select_matches_descendants_only() {
        let doc = Document::parse(PAGE);
        let section = doc.select("section").unwrap();
        assert_eq!(section.select("li").unwrap().len(), 3);
        assert_eq!(section.select("p").unwrap().len(), 0);
        // the scoping node itself is not part of its own results
        assert_eq!(section.select("section").unwrap().len(), 0);
    }

    #[test]
    fn test_scoped_select_collapses_nested_duplicates() {
        let doc = Document::parse("<div><div><span>a</span></div><span>b</span></div>");
        let divs = doc.select("div").unwrap();
        assert_eq!(divs.len(), 2);

        let spans = divs.select("span").unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans.text(), "ab");
    }

    #[test]
    fn test_scoped_select_restores_document_order() {
        let doc = Document::parse(
            "<div class='outer'><b>1</b><div class='inner'><b>2</b></div><b>3</b></div>",
        );
        // inner comes after outer in document order, but outer's results
        // already cover inner's
        let scopes = doc.select(".outer, .inner").unwrap();
        let bold = scopes.select("b").unwrap();
        assert_eq!(bold.text(), "123");
    }

    #[test]
    fn test_scoped_select_on_empty_set() {
        let doc = Document::parse(PAGE);
        let none = doc.select("table").unwrap();
        assert!(none.select("td").unwrap().is_empty());
        // selector is still validated on an empty scope
        assert!(none.select(">>").is_err());
    }

    #[test]
    fn test_combinators_see_context_outside_scope() {
        let doc = Document::parse(PAGE);
        let list = doc.select("ul").unwrap();
        assert_eq!(list.select("section li").unwrap().len(), 3);
    }

    #[test]
    fn test_compiled_selector_matches_results() {
        let doc = Document::parse(PAGE);
        let selector = CssSelector::parse("li:not(.a)").unwrap();
        let set = evaluate(Scope::from(&doc), &selector);
        assert_eq!(selector.as_str(), "li:not(.a)");
        assert!(set.iter().all(|el| selector.matches(&el)));
    }

    #[test]
    fn test_from_str() {
        let selector: CssSelector = "div > p".parse().unwrap();
        assert_eq!(selector.as_str(), "div > p");
        assert!("][".parse::<CssSelector>().is_err());
    }
}
