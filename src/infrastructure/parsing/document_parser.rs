//! Markup to `Document` parser
//!
//! Parsing is total over strings: html5ever's tree builder recovers from any
//! malformed input and records what it repaired in `Html::errors`.

use scraper::Html;
use tracing::debug;

use crate::domain::document::Document;
use crate::infrastructure::config::{ParseMode, ParsingConfig};
use crate::infrastructure::parsing_error::{DominoError, DominoResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentParser {
    mode: ParseMode,
}

impl DocumentParser {
    /// Create a parser for full documents
    pub const fn new() -> Self {
        Self::with_mode(ParseMode::Document)
    }

    pub const fn with_mode(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Create parser from parsing configuration
    pub const fn with_config(config: &ParsingConfig) -> Self {
        Self::with_mode(config.mode)
    }

    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse markup into an immutable document
    pub fn parse(&self, markup: &str) -> Document {
        let html = match self.mode {
            ParseMode::Document => Html::parse_document(markup),
            ParseMode::Fragment => Html::parse_fragment(markup),
        };

        debug!(
            mode = ?self.mode,
            input_len = markup.len(),
            parse_errors = html.errors.len(),
            "Parsed markup"
        );

        Document::from_html(html, self.mode)
    }

    /// Parse raw bytes, which must be UTF-8
    pub fn parse_bytes(&self, bytes: &[u8]) -> DominoResult<Document> {
        let markup = std::str::from_utf8(bytes).map_err(|e| {
            debug!("Rejected non UTF-8 input: {}", e);
            DominoError::parse_failure(format!("input is not valid UTF-8: {e}"))
        })?;

        Ok(self.parse(markup))
    }
}
