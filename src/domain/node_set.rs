//! Ordered selection of element nodes
//!
//! Nodes are `Copy` handles into the owning document's arena. Cloning a
//! `NodeSet` copies handles, never subtrees.

use scraper::ElementRef;

use crate::infrastructure::parsing::{Scope, selector};
use crate::infrastructure::parsing_error::DominoResult;

/// Elements in document order, without duplicates. Empty when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet<'doc> {
    nodes: Vec<ElementRef<'doc>>,
}

impl<'doc> NodeSet<'doc> {
    pub(crate) const fn from_nodes(nodes: Vec<ElementRef<'doc>>) -> Self {
        Self { nodes }
    }

    pub const fn empty() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes in the set
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<ElementRef<'doc>> {
        self.nodes.first().copied()
    }

    pub fn get(&self, index: usize) -> Option<ElementRef<'doc>> {
        self.nodes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementRef<'doc>> + '_ {
        self.nodes.iter().copied()
    }

    /// Select matching descendants of every node in this set
    pub fn select(&self, selector: &str) -> DominoResult<NodeSet<'doc>> {
        selector::select(Scope::Nodes(self), selector)
    }
}

impl<'doc> IntoIterator for NodeSet<'doc> {
    type Item = ElementRef<'doc>;
    type IntoIter = std::vec::IntoIter<ElementRef<'doc>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, 'doc> IntoIterator for &'a NodeSet<'doc> {
    type Item = ElementRef<'doc>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ElementRef<'doc>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}
