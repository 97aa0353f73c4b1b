use crate::mode::Mode;
use crate::notice::Notice;
use surly_core::{is_valid, Entry, ShortenError, ShortenOutcome, Shortener};
use surly_registry::{Registry, RegistrySettings};
use tracing::debug;

/// What the front end should show after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A new short URL was created.
    Shortened { short_url: String },
    /// A short URL was expanded to its original.
    Expanded { original_url: String },
    /// Nothing is registered under the submitted short URL.
    NotFound { input: String },
    /// A warning to show transiently.
    Notice(Notice),
    /// Empty input; show nothing.
    Nothing,
}

/// One user session: a shortener plus the short-URL prefix used to decide
/// between shortening and expanding.
#[derive(Debug)]
pub struct Session<S> {
    shortener: S,
    short_url_prefix: String,
}

impl Session<Registry> {
    /// Starts a session backed by a fresh in-memory registry.
    pub fn with_settings(settings: RegistrySettings) -> Self {
        let prefix = settings.short_url_prefix();
        Self::new(Registry::with_settings(settings), prefix)
    }
}

impl<S: Shortener> Session<S> {
    pub fn new(shortener: S, short_url_prefix: impl Into<String>) -> Self {
        Self {
            shortener,
            short_url_prefix: short_url_prefix.into(),
        }
    }

    pub fn short_url_prefix(&self) -> &str {
        &self.short_url_prefix
    }

    pub fn shortener(&self) -> &S {
        &self.shortener
    }

    pub fn mode(&self, input: &str) -> Mode {
        Mode::detect(input, &self.short_url_prefix)
    }

    /// Handles a submitted line: expands short URLs, shortens anything else.
    pub fn submit(&mut self, input: &str) -> Reply {
        match self.mode(input) {
            Mode::Expand => self.expand(input),
            Mode::Shorten => self.shorten(input),
        }
    }

    /// Validation feedback while the user is still typing.
    ///
    /// An empty field is never flagged.
    pub fn feedback(&self, input: &str) -> Option<Notice> {
        if input.is_empty() || is_valid(input) {
            None
        } else {
            Some(Notice::InvalidUrl(input.to_string()))
        }
    }

    pub fn history(&self) -> Vec<Entry> {
        self.shortener.history()
    }

    fn expand(&self, input: &str) -> Reply {
        match self.shortener.expand(input) {
            Ok(original_url) => Reply::Expanded { original_url },
            Err(err) => {
                debug!(error = %err, "expand failed");
                Reply::NotFound {
                    input: input.to_string(),
                }
            }
        }
    }

    fn shorten(&mut self, input: &str) -> Reply {
        match self.shortener.shorten(input) {
            Ok(ShortenOutcome::Created { short_url, .. }) => Reply::Shortened { short_url },
            Ok(ShortenOutcome::Duplicate { short_url, .. }) => {
                Reply::Notice(Notice::DuplicateUrl {
                    input: input.to_string(),
                    short_url,
                })
            }
            Ok(ShortenOutcome::Skipped) => Reply::Nothing,
            Err(ShortenError::Validation(err)) => Reply::Notice(Notice::InvalidUrl(err.input)),
            Err(ShortenError::CodeCollision { code, .. }) => Reply::Notice(Notice::CodeCollision {
                input: input.to_string(),
                code,
            }),
        }
    }
}
