use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};

/// One stored association between an original URL and its short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The URL exactly as the user submitted it.
    pub original_url: String,
    /// The code derived from `original_url`.
    pub code: ShortCode,
    /// The externally visible short URL, `base_url/code`.
    pub short_url: String,
}

impl Entry {
    /// Builds an entry whose short URL is `code` joined onto `base_url`.
    pub fn new(original_url: impl Into<String>, code: ShortCode, base_url: &str) -> Self {
        let short_url = code.to_url(base_url);
        Self {
            original_url: original_url.into(),
            code,
            short_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_url_is_joined_on_base() {
        let entry = Entry::new(
            "https://example.com/page",
            ShortCode::new("3641c5").unwrap(),
            "https://sur.ly/",
        );
        assert_eq!(entry.short_url, "https://sur.ly/3641c5");
        assert_eq!(entry.original_url, "https://example.com/page");
    }

    #[test]
    fn serializes_as_flat_record() {
        let entry = Entry::new(
            "example.com",
            ShortCode::new("a379a6").unwrap(),
            "https://sur.ly",
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "original_url": "example.com",
                "code": "a379a6",
                "short_url": "https://sur.ly/a379a6",
            })
        );
    }
}
