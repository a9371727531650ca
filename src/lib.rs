//! Domino - CSS selector queries over parsed HTML documents
//!
//! Parse markup into an immutable [`Document`], select element subsets with
//! CSS selectors, and extract text and attributes from the selection.
//!
//! ```
//! use domino::Document;
//!
//! let doc = Document::parse("<div id='x'><p>hi</p><p class='a'>bye</p></div>");
//! let paragraphs = doc.select("p")?;
//! assert_eq!(paragraphs.len(), 2);
//! assert_eq!(paragraphs.text(), "hibye");
//! assert_eq!(doc.select("p.a")?.attr("class"), Some("a"));
//! assert!(doc.select(">>invalid<<").is_err());
//! # Ok::<(), domino::DominoError>(())
//! ```

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the core API for easier access
pub use application::boundary::{attempt, fail, rescue};
pub use application::query::{attr, attrs, from_string, length, load_file, select, text};
pub use domain::{Document, NodeSet};
pub use infrastructure::{
    CssSelector, DocumentParser, DominoConfig, DominoError, DominoResult, FileReadFailure,
    ParseMode, Scope, read_file,
};
