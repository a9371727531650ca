//! Text and attribute extraction from a selection
//!
//! `attr` and `attrs` read the FIRST node only. Absence is `None`; an
//! attribute present with an empty value is `Some("")`.

use std::collections::HashMap;

use scraper::ElementRef;

use crate::domain::node_set::NodeSet;

impl<'doc> NodeSet<'doc> {
    /// Concatenated descendant text of every node, without separators
    pub fn text(&self) -> String {
        self.iter().flat_map(|element| element.text()).collect()
    }

    /// Value of attribute `name` on the first node
    pub fn attr(&self, name: &str) -> Option<&'doc str> {
        attribute(self.first()?, name)
    }

    /// All attributes of the first node
    pub fn attrs(&self) -> Option<HashMap<String, String>> {
        let element = self.first()?;
        Some(
            qualified_attrs(element)
                .map(|(name, value)| (name, value.to_string()))
                .collect(),
        )
    }
}

/// Attributes keyed by their qualified name, so `xlink:href` and `href`
/// stay distinct
fn qualified_attrs<'doc>(element: ElementRef<'doc>) -> impl Iterator<Item = (String, &'doc str)> {
    element
        .value()
        .attrs
        .iter()
        .map(|(name, value)| (qualified_name(name.prefix.as_deref(), &name.local), &**value))
}

fn qualified_name(prefix: Option<&str>, local: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_string(),
    }
}

/// HTML attribute names are stored lowercased, but foreign content (SVG,
/// MathML) keeps its camelCase names, so try an exact match first.
fn attribute<'doc>(element: ElementRef<'doc>, name: &str) -> Option<&'doc str> {
    qualified_attrs(element)
        .find(|(key, _)| key.as_str() == name)
        .or_else(|| qualified_attrs(element).find(|(key, _)| key.eq_ignore_ascii_case(name)))
        .map(|(_, value)| value)
}
