/// What a submission should do with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Shorten,
    Expand,
}

impl Mode {
    /// Input that starts with the short-URL prefix is expanded, anything
    /// else is shortened.
    pub fn detect(input: &str, short_url_prefix: &str) -> Self {
        if input.starts_with(short_url_prefix) {
            Self::Expand
        } else {
            Self::Shorten
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://sur.ly/";

    #[test]
    fn short_urls_expand() {
        assert_eq!(Mode::detect("https://sur.ly/3641c5", PREFIX), Mode::Expand);
        assert_eq!(Mode::detect("https://sur.ly/", PREFIX), Mode::Expand);
    }

    #[test]
    fn everything_else_shortens() {
        assert_eq!(Mode::detect("https://example.com", PREFIX), Mode::Shorten);
        assert_eq!(Mode::detect("3641c5", PREFIX), Mode::Shorten);
        assert_eq!(Mode::detect("http://sur.ly/3641c5", PREFIX), Mode::Shorten);
        assert_eq!(Mode::detect("", PREFIX), Mode::Shorten);
    }
}
