//! Error types for fleet expression parsing and resolution.

use thiserror::Error;

/// Errors that can occur while parsing or resolving a fleet expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeError {
    /// The expression (or one of its segments) cannot be parsed.
    #[error("malformed fleet expression at position {position}: {message}")]
    MalformedExpression {
        /// Byte position in the input where the error occurred.
        position: usize,
        /// Description of the error.
        message: String,
    },

    /// A quantity gives a lower bound above its upper bound, e.g. `{3,1}`.
    #[error("invalid quantity {{{min},{max}}}: minimum exceeds maximum")]
    InvalidQuantity {
        /// Explicit lower bound.
        min: u32,
        /// Explicit upper bound.
        max: u32,
    },

    /// The language tag is not one of the supported languages.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl FeError {
    pub(crate) fn malformed(position: usize, message: impl Into<String>) -> Self {
        FeError::MalformedExpression {
            position,
            message: message.into(),
        }
    }
}

/// Result type for fleet expression operations.
pub type FeResult<T> = std::result::Result<T, FeError>;
