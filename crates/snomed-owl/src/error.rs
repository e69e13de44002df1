//! Error types for OWL axiom parsing.

use thiserror::Error;

/// Errors that can occur while reading OWL functional syntax.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OwlError {
    /// Parse error at a specific position in the input.
    #[error("parse error at position {position}: {message}")]
    ParseError {
        /// Position in the input where the error occurred.
        position: usize,
        /// Description of the error.
        message: String,
    },

    /// Axiom expression is incomplete.
    #[error("axiom is incomplete: {0}")]
    Incomplete(String),

    /// Empty input provided.
    #[error("empty axiom expression")]
    EmptyExpression,

    /// IRI that does not end in a SNOMED CT identifier.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// Result type for OWL operations.
pub type OwlResult<T> = std::result::Result<T, OwlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = OwlError::ParseError {
            position: 11,
            message: "unexpected input at: ')'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "parse error at position 11: unexpected input at: ')'"
        );
    }

    #[test]
    fn test_invalid_identifier_display() {
        let err = OwlError::InvalidIdentifier("<http://example.org/abc>".to_string());
        assert_eq!(err.to_string(), "invalid identifier: <http://example.org/abc>");
    }
}
