//! Core error types for Gnomic

use thiserror::Error;

/// Main error type for Gnomic operations
#[derive(Error, Debug)]
pub enum GnomicError {
    /// The notation text does not conform to the grammar.
    #[error("Syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// An edit matched more than one candidate where a unique anchor is required.
    #[error("Ambiguous edit: {0}")]
    AmbiguousEdit(String),

    #[error("Invalid change: {0}")]
    InvalidChange(String),

    #[error("Invalid annotation: {0}")]
    InvalidAnnotation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Gnomic operations
pub type GnomicResult<T> = Result<T, GnomicError>;

impl GnomicError {
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        GnomicError::Syntax {
            offset,
            message: message.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, GnomicError::Syntax { .. })
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, GnomicError::AmbiguousEdit(_))
    }
}

impl From<serde_json::Error> for GnomicError {
    fn from(err: serde_json::Error) -> Self {
        GnomicError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let syntax = GnomicError::syntax(3, "expected annotation");
        assert_eq!(
            format!("{}", syntax),
            "Syntax error at offset 3: expected annotation"
        );

        let ambiguous = GnomicError::AmbiguousEdit("geneX matches 2 pending changes".to_string());
        assert_eq!(
            format!("{}", ambiguous),
            "Ambiguous edit: geneX matches 2 pending changes"
        );

        let invalid = GnomicError::InvalidChange("empty change".to_string());
        assert_eq!(format!("{}", invalid), "Invalid change: empty change");

        let annotation = GnomicError::InvalidAnnotation("fusion of one".to_string());
        assert_eq!(format!("{}", annotation), "Invalid annotation: fusion of one");

        let config = GnomicError::Configuration("missing field".to_string());
        assert_eq!(format!("{}", config), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let gnomic_err: GnomicError = io_err.into();

        match gnomic_err {
            GnomicError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse_result: Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str("{invalid json}");
        let gnomic_err: GnomicError = parse_result.unwrap_err().into();

        match gnomic_err {
            GnomicError::Serialization(msg) => assert!(msg.contains("key must be a string")),
            _ => panic!("Expected Serialization error variant"),
        }
    }

    #[test]
    fn test_error_kind_helpers() {
        assert!(GnomicError::syntax(0, "eof").is_syntax());
        assert!(!GnomicError::syntax(0, "eof").is_ambiguous());
        assert!(GnomicError::AmbiguousEdit("x".to_string()).is_ambiguous());
    }
}
