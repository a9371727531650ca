//! Host-facing query operations
//!
//! Flat functions over documents and selections, one per operation a caller
//! needs: parse, select, and the four accessors. Only `select` (and file
//! loading) can fail.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::domain::{Document, NodeSet};
use crate::infrastructure::config::DominoConfig;
use crate::infrastructure::file_loader::FileLoader;
use crate::infrastructure::parsing::{DocumentParser, Scope, selector};
use crate::infrastructure::parsing_error::DominoResult;

/// Parse markup into a document
pub fn from_string(markup: &str) -> Document {
    Document::parse(markup)
}

/// Evaluate `selector` against a document or a prior selection
pub fn select<'a, 'doc>(
    scope: impl Into<Scope<'a, 'doc>>,
    selector: &str,
) -> DominoResult<NodeSet<'doc>>
where
    'doc: 'a,
{
    selector::select(scope, selector)
}

pub fn text(nodes: &NodeSet<'_>) -> String {
    nodes.text()
}

pub fn attr<'doc>(nodes: &NodeSet<'doc>, name: &str) -> Option<&'doc str> {
    nodes.attr(name)
}

pub fn attrs(nodes: &NodeSet<'_>) -> Option<HashMap<String, String>> {
    nodes.attrs()
}

pub fn length(nodes: &NodeSet<'_>) -> usize {
    nodes.len()
}

/// Read and parse a file using the configured size cap and parse mode
pub fn load_file(path: impl AsRef<Path>, config: &DominoConfig) -> DominoResult<Document> {
    let path = path.as_ref();
    let bytes = FileLoader::new(&config.files).read(path)?;
    let document = DocumentParser::with_config(&config.parsing).parse_bytes(&bytes)?;
    info!("Loaded document from {:?} ({} bytes)", path, bytes.len());
    Ok(document)
}
