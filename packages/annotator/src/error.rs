//! Error types for the annotator.
//!
//! Uses the dual-error pattern: `AnnotatorError` for library consumers
//! with detailed error context, and specific error types for the core
//! operations (`DuplicateIdentifier`, `NumberError`).

use thiserror::Error;

pub use crate::number::NumberError;

/// An identifier was defined twice in one annotation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Duplicate identifier '{identifier}': defined by {duplicate}, already defined by {existing}")]
pub struct DuplicateIdentifier {
    /// The identifier.
    pub identifier: String,
    /// The element that holds the identifier, e.g. `section 2`.
    pub existing: String,
    /// The element that tried to define it again.
    pub duplicate: String,
}

/// Main error type for the annotator library.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    /// Two elements share an identifier.
    #[error(transparent)]
    DuplicateIdentifier(#[from] DuplicateIdentifier),

    /// A structural number component was out of range.
    #[error("Invalid structural number: {0}")]
    Number(#[from] NumberError),

    /// Input document exceeds the size limit.
    #[error("Document too large: {size} bytes (limit {limit})")]
    DocumentTooLarge { size: u64, limit: u64 },

    /// A list that must be non-empty was empty.
    #[error("Empty {element} list in {context}")]
    EmptyList { element: String, context: String },

    /// No element carries the identifier.
    #[error("Unknown identifier: '{0}'")]
    UnknownIdentifier(String),

    /// Segment number could not be parsed or does not exist.
    #[error("Invalid segment: '{0}'. Expected N or P.S (e.g., 3 or 2.1)")]
    InvalidSegment(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for annotator operations.
pub type Result<T> = std::result::Result<T, AnnotatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_identifier_display() {
        let err = DuplicateIdentifier {
            identifier: "intro".to_string(),
            existing: "section 1".to_string(),
            duplicate: "paragraph 2.1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate identifier 'intro': defined by paragraph 2.1, already defined by section 1"
        );
    }

    #[test]
    fn test_wrapped_duplicate_is_transparent() {
        let err: AnnotatorError = DuplicateIdentifier {
            identifier: "x".to_string(),
            existing: "part 1".to_string(),
            duplicate: "part 2".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Duplicate identifier 'x'"));
    }

    #[test]
    fn test_empty_list_display() {
        let err = AnnotatorError::EmptyList {
            element: "section".to_string(),
            context: "part 'Intro'".to_string(),
        };
        assert_eq!(err.to_string(), "Empty section list in part 'Intro'");
    }

    #[test]
    fn test_invalid_segment_display() {
        let err = AnnotatorError::InvalidSegment("1.x".to_string());
        assert!(err.to_string().contains("'1.x'"));
        assert!(err.to_string().contains("P.S"));
    }
}
