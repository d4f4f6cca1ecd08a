//! Error types for the annotator.
//!
//! A single `AnnotatorError` is exposed to library consumers. Each variant
//! carries the tag, position or input excerpt needed to diagnose it, and
//! [`AnnotatorError::kind`] groups variants into the failure classes callers
//! branch on.

use thiserror::Error;

/// Failure classes callers may want to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A footnote annotation could not be found.
    LookupFailure,
    /// The document violates a structural assumption (e.g. a missing `nr`).
    DocumentIntegrity,
    /// The caller passed arguments that cannot be honoured.
    Usage,
    /// Reading input failed.
    Io,
    /// XML, YAML, JSON or regex parsing failed.
    Parse,
}

/// Main error type for the annotator library.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    /// No footnote annotation in the node from the cursor on, nor in its next sibling.
    #[error("No footnote found in <{tag}> from position {cursor} or in its next sibling (near '{excerpt}')")]
    FootnoteNotFound {
        tag: String,
        cursor: usize,
        excerpt: String,
    },

    /// Cursor does not point into the node's text.
    #[error("Cursor {cursor} is not a character position in <{tag}> text of {len} bytes")]
    InvalidCursor {
        tag: String,
        cursor: usize,
        len: usize,
    },

    /// Required attribute missing on an element.
    #[error("Missing required attribute '{attribute}' on <{tag}>")]
    MissingAttribute { tag: String, attribute: String },

    /// Boundary element is not an ancestor of the target element.
    #[error("<{boundary}> is not an ancestor of <{tag}>")]
    NotAnAncestor { tag: String, boundary: String },

    /// Segmenter configuration rejected by validation.
    #[error("Invalid segmenter configuration: {0}")]
    InvalidConfig(String),

    /// A generated pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnnotatorError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FootnoteNotFound { .. } => ErrorKind::LookupFailure,
            Self::MissingAttribute { .. } => ErrorKind::DocumentIntegrity,
            Self::InvalidCursor { .. } | Self::NotAnAncestor { .. } | Self::InvalidConfig(_) => {
                ErrorKind::Usage
            }
            Self::Io(_) => ErrorKind::Io,
            Self::InvalidPattern(_) | Self::XmlParse(_) | Self::Yaml(_) | Self::Json(_) => {
                ErrorKind::Parse
            }
        }
    }
}

/// Result type alias for annotator operations.
pub type Result<T> = std::result::Result<T, AnnotatorError>;
