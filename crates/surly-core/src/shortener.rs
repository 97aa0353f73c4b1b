use crate::entry::Entry;
use crate::error::{NotFoundError, ShortenError};
use crate::shortcode::ShortCode;

/// The result of a successful call to [`Shortener::shorten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// A new entry was registered.
    Created { code: ShortCode, short_url: String },
    /// The URL was already registered; nothing changed.
    Duplicate { code: ShortCode, short_url: String },
    /// The input was empty. Not an error, nothing happened.
    Skipped,
}

impl ShortenOutcome {
    /// The code for the URL, unless the input was skipped.
    pub fn code(&self) -> Option<&ShortCode> {
        match self {
            Self::Created { code, .. } | Self::Duplicate { code, .. } => Some(code),
            Self::Skipped => None,
        }
    }

    /// The short URL for the URL, unless the input was skipped.
    pub fn short_url(&self) -> Option<&str> {
        match self {
            Self::Created { short_url, .. } | Self::Duplicate { short_url, .. } => Some(short_url),
            Self::Skipped => None,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// An append-only, bidirectional store of shortened URLs.
pub trait Shortener {
    /// Registers `original_url` and returns its code.
    ///
    /// An empty input is skipped. A URL that is already registered (exact
    /// byte comparison) yields [`ShortenOutcome::Duplicate`] and leaves the
    /// store untouched.
    fn shorten(&mut self, original_url: &str) -> Result<ShortenOutcome, ShortenError>;

    /// Looks up the original URL for a bare code or a full short URL.
    fn expand(&self, code_or_url: &str) -> Result<String, NotFoundError>;

    /// Checks whether `original_url` has already been registered.
    fn is_duplicate(&self, original_url: &str) -> bool;

    /// A snapshot of all entries in insertion order.
    fn history(&self) -> Vec<Entry>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> ShortCode {
        ShortCode::new("abc123").unwrap()
    }

    #[test]
    fn accessors_on_created() {
        let outcome = ShortenOutcome::Created {
            code: code(),
            short_url: "https://sur.ly/abc123".to_string(),
        };
        assert!(outcome.is_created());
        assert!(!outcome.is_duplicate());
        assert_eq!(outcome.code(), Some(&code()));
        assert_eq!(outcome.short_url(), Some("https://sur.ly/abc123"));
    }

    #[test]
    fn accessors_on_skipped() {
        let outcome = ShortenOutcome::Skipped;
        assert!(!outcome.is_created());
        assert!(!outcome.is_duplicate());
        assert_eq!(outcome.code(), None);
        assert_eq!(outcome.short_url(), None);
    }
}
