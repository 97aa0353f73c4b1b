use std::fmt::Display;
use surly_core::ShortCode;

/// A transient message for the user.
///
/// Notices are fire-and-forget: how long they stay visible and how they
/// are styled is up to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The input does not look like a URL.
    InvalidUrl(String),
    /// The URL was shortened before.
    DuplicateUrl { input: String, short_url: String },
    /// The URL hashes to a code that already belongs to another URL.
    CodeCollision { input: String, code: ShortCode },
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::InvalidUrl(input) => write!(f, "Please enter a valid URL: {}", input),
            Notice::DuplicateUrl { input, .. } => {
                write!(f, "URL has already been shortened: {}", input)
            }
            Notice::CodeCollision { input, code } => write!(
                f,
                "Short code {} is already taken by another URL: {}",
                code, input
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Notice::InvalidUrl("not a url".to_string()).to_string(),
            "Please enter a valid URL: not a url"
        );
        assert_eq!(
            Notice::DuplicateUrl {
                input: "example.com".to_string(),
                short_url: "https://sur.ly/a379a6".to_string(),
            }
            .to_string(),
            "URL has already been shortened: example.com"
        );
        assert_eq!(
            Notice::CodeCollision {
                input: "example.org".to_string(),
                code: ShortCode::new("a379a6").unwrap(),
            }
            .to_string(),
            "Short code a379a6 is already taken by another URL: example.org"
        );
    }
}
