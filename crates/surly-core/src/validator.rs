//! Loose URL shape check used for live feedback and before registration.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional http(s) scheme, one or more dot-terminated host labels, an
/// alphanumeric final label, then any non-whitespace remainder.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([A-Za-z0-9-]+\.)+[A-Za-z0-9]+(\S*)?$")
        .expect("url pattern is a valid regex")
});

/// Returns `true` if `input` looks like a URL.
///
/// The check is syntactic only. Nothing is normalized and nothing is
/// resolved.
pub fn is_valid(input: &str) -> bool {
    !input.is_empty() && URL_PATTERN.is_match(input)
}

/// Like [`is_valid`] but returns the offending input on failure.
pub fn validate(input: &str) -> Result<(), ValidationError> {
    if is_valid(input) {
        Ok(())
    } else {
        Err(ValidationError::new(input))
    }
}
