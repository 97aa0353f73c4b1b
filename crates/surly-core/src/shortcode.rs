use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// Number of characters in every short code.
pub const CODE_LENGTH: usize = 6;

/// A validated short code identifying one shortened URL.
///
/// Short codes are exactly [`CODE_LENGTH`] lowercase hexadecimal characters.
/// They are short enough to be stored inline, so cloning never allocates.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(SmolStr);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref();
        Self::validate(code)?;
        Ok(Self(SmolStr::new(code)))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
    pub fn new_unchecked(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code.as_ref()))
    }

    /// Pulls the short code out of either a bare code or a full short URL.
    ///
    /// The code is the final path segment; trailing slashes, query strings
    /// and fragments are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use surly_core::ShortCode;
    ///
    /// let code = ShortCode::extract("https://sur.ly/3641c5").unwrap();
    /// assert_eq!(code.as_str(), "3641c5");
    /// assert_eq!(ShortCode::extract("3641c5").unwrap(), code);
    /// ```
    pub fn extract(code_or_url: &str) -> Result<Self> {
        let path = code_or_url
            .split(['?', '#'])
            .next()
            .unwrap_or(code_or_url);
        let segment = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        Self::new(segment)
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<()> {
        if code.len() != CODE_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be {}, got {}",
                CODE_LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only lowercase hexadecimal characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for ShortCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("abc123").is_ok());
        assert!(ShortCode::new("000000").is_ok());
        assert!(ShortCode::new("ffffff").is_ok());
    }

    #[test]
    fn wrong_length() {
        assert!(ShortCode::new("").is_err());
        assert!(ShortCode::new("abc12").is_err());
        assert!(ShortCode::new("abc1234").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("ABC123").is_err());
        assert!(ShortCode::new("abc12g").is_err());
        assert!(ShortCode::new("abc 12").is_err());
        assert!(ShortCode::new("abc/12").is_err());
    }

    #[test]
    fn extract_from_bare_code() {
        let code = ShortCode::extract("abc123").unwrap();
        assert_eq!(code.as_str(), "abc123");
    }

    #[test]
    fn extract_from_short_url() {
        let expected = ShortCode::new("abc123").unwrap();
        assert_eq!(ShortCode::extract("https://sur.ly/abc123").unwrap(), expected);
        assert_eq!(ShortCode::extract("https://sur.ly/abc123/").unwrap(), expected);
        assert_eq!(
            ShortCode::extract("https://sur.ly/abc123?ref=x#top").unwrap(),
            expected
        );
    }

    #[test]
    fn extract_rejects_non_codes() {
        assert!(ShortCode::extract("").is_err());
        assert!(ShortCode::extract("https://sur.ly/").is_err());
        assert!(ShortCode::extract("https://sur.ly/not-a-code").is_err());
    }

    #[test]
    fn to_url() {
        let code = ShortCode::new("abc123").unwrap();
        assert_eq!(code.to_url("https://sur.ly"), "https://sur.ly/abc123");
        assert_eq!(code.to_url("https://sur.ly/"), "https://sur.ly/abc123");
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let code: ShortCode = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(code.as_str(), "abc123");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"abc123\"");

        assert!(serde_json::from_str::<ShortCode>("\"nope\"").is_err());
    }
}
