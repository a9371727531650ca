//! HTML parsing and CSS selector query infrastructure
//!
//! Parsing and selector matching are delegated to `scraper` (html5ever and
//! servo's `selectors`). This module adds the document/selection handles,
//! selector compilation errors and the text/attribute accessors on top.

pub mod accessor;
pub mod document_parser;
pub mod selector;

pub use document_parser::DocumentParser;
pub use selector::{CssSelector, Scope};
