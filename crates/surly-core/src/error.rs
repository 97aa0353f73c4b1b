use crate::shortcode::ShortCode;
use thiserror::Error;

/// Result type for operations on core types.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// The input does not look like a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid url: {input}")]
pub struct ValidationError {
    pub input: String,
}

impl ValidationError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// No entry matches the given short code or short URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no entry for short code or url: {input}")]
pub struct NotFoundError {
    pub input: String,
}

impl NotFoundError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The derived code already belongs to a different URL. Codes are
    /// truncated digests, so distinct inputs can land on the same code.
    #[error("short code {code} already maps to {existing_url}")]
    CodeCollision {
        code: ShortCode,
        existing_url: String,
    },
}
