//! Error types for document parsing, selector compilation and the result boundary
//!
//! "No data" outcomes (empty selections, missing attributes) are never errors;
//! they surface as empty `NodeSet`s or `None`.

use thiserror::Error;

/// Failure reported by the file loader. Carries no detail about the cause.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("File could not be read")]
pub struct FileReadFailure;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DominoError {
    #[error("Document parsing failed: {message}")]
    ParseFailure { message: String },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error(transparent)]
    FileRead(#[from] FileReadFailure),

    #[error("{message}")]
    Rescued { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl DominoError {
    /// Create a parse failure error
    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::ParseFailure {
            message: message.into(),
        }
    }

    /// Create an invalid selector error with the compiler's reason
    pub fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an error carrying the message of a rescued failure
    pub fn rescued(message: impl Into<String>) -> Self {
        Self::Rescued {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if the caller can recover by changing its input
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidSelector { .. } | Self::ParseFailure { .. } | Self::FileRead(_) => true,
            Self::Rescued { .. } | Self::Config { .. } => false,
        }
    }
}

impl From<config::ConfigError> for DominoError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

pub type DominoResult<T> = Result<T, DominoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_message() {
        let err = DominoError::invalid_selector(">>invalid<<", "unexpected token");
        assert_eq!(
            err.to_string(),
            "Invalid CSS selector: >>invalid<< - unexpected token"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_file_read_failure_has_no_detail() {
        let err: DominoError = FileReadFailure.into();
        assert_eq!(err, DominoError::FileRead(FileReadFailure));
        assert_eq!(err.to_string(), "File could not be read");
    }

    #[test]
    fn test_rescued_displays_message_verbatim() {
        let err = DominoError::rescued("boom");
        assert_eq!(err.to_string(), "boom");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_recoverable_split() {
        assert!(DominoError::parse_failure("bad bytes").is_recoverable());
        assert!(DominoError::FileRead(FileReadFailure).is_recoverable());
        assert!(!DominoError::config("bad level").is_recoverable());
    }
}
