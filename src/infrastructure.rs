//! Infrastructure layer for HTML parsing, selector queries, file loading,
//! configuration and logging

pub mod config; // Configuration loading and defaults
pub mod file_loader;
pub mod logging; // Logging infrastructure
pub mod parsing;
pub mod parsing_error;

// Re-export commonly used items
pub use config::{DominoConfig, FileConfig, LoggingConfig, ParseMode, ParsingConfig};
pub use file_loader::{FileLoader, read_file};
pub use logging::{get_log_directory, init_logging, init_logging_with_config};
pub use parsing::{CssSelector, DocumentParser, Scope};
pub use parsing_error::{DominoError, DominoResult, FileReadFailure};
