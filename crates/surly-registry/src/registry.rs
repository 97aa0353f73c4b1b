use crate::settings::RegistrySettings;
use std::collections::HashMap;
use surly_core::{
    validate, Entry, NotFoundError, ShortCode, ShortenError, ShortenOutcome, Shortener,
};
use surly_generator::{Generator, Sha256Generator};
use tracing::{debug, trace, warn};

/// An append-only, in-memory store of shortened URLs.
///
/// Entries are kept in insertion order for display and indexed both ways:
/// by original URL for duplicate detection and by code for expansion. Both
/// indexes hold positions into the entry list, which never shrinks.
///
/// Uniqueness holds in both directions: an original URL is registered at
/// most once, and a code never maps to more than one URL.
#[derive(Debug, Clone)]
pub struct Registry<G = Sha256Generator> {
    settings: RegistrySettings,
    generator: G,
    entries: Vec<Entry>,
    by_url: HashMap<String, usize>,
    by_code: HashMap<ShortCode, usize>,
}

impl Registry<Sha256Generator> {
    /// Creates an empty registry using the default SHA-256 generator.
    pub fn with_settings(settings: RegistrySettings) -> Self {
        Self::new(settings, Sha256Generator::new())
    }
}

impl Default for Registry<Sha256Generator> {
    fn default() -> Self {
        Self::with_settings(RegistrySettings::default())
    }
}

impl<G: Generator> Registry<G> {
    /// Creates an empty registry with a custom generator.
    pub fn new(settings: RegistrySettings, generator: G) -> Self {
        Self {
            settings,
            generator,
            entries: Vec::new(),
            by_url: HashMap::new(),
            by_code: HashMap::new(),
        }
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order, without copying.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the entry registered under `code`.
    pub fn get(&self, code: &ShortCode) -> Option<&Entry> {
        self.by_code.get(code).map(|&index| &self.entries[index])
    }

    /// Returns the entry for `original_url`, compared byte for byte.
    pub fn find(&self, original_url: &str) -> Option<&Entry> {
        self.by_url.get(original_url).map(|&index| &self.entries[index])
    }

    fn push(&mut self, entry: Entry) {
        let index = self.entries.len();
        self.by_url.insert(entry.original_url.clone(), index);
        self.by_code.insert(entry.code.clone(), index);
        self.entries.push(entry);
    }
}

impl<G: Generator> Shortener for Registry<G> {
    fn shorten(&mut self, original_url: &str) -> Result<ShortenOutcome, ShortenError> {
        if original_url.is_empty() {
            trace!("empty input, nothing to shorten");
            return Ok(ShortenOutcome::Skipped);
        }

        validate(original_url).map_err(|err| {
            debug!(url = %original_url, "rejected invalid url");
            err
        })?;

        if let Some(entry) = self.find(original_url) {
            debug!(code = %entry.code, url = %original_url, "url already shortened");
            return Ok(ShortenOutcome::Duplicate {
                code: entry.code.clone(),
                short_url: entry.short_url.clone(),
            });
        }

        let code = self.generator.generate(original_url);

        if let Some(existing) = self.get(&code) {
            warn!(
                code = %code,
                url = %original_url,
                existing_url = %existing.original_url,
                "short code collision"
            );
            return Err(ShortenError::CodeCollision {
                existing_url: existing.original_url.clone(),
                code,
            });
        }

        let entry = Entry::new(original_url, code.clone(), &self.settings.base_url);
        let short_url = entry.short_url.clone();
        self.push(entry);

        debug!(code = %code, url = %original_url, "registered short url");
        Ok(ShortenOutcome::Created { code, short_url })
    }

    fn expand(&self, code_or_url: &str) -> Result<String, NotFoundError> {
        trace!(input = %code_or_url, "expanding short code");

        ShortCode::extract(code_or_url)
            .ok()
            .and_then(|code| self.get(&code))
            .map(|entry| entry.original_url.clone())
            .ok_or_else(|| {
                debug!(input = %code_or_url, "no entry for short code");
                NotFoundError::new(code_or_url)
            })
    }

    fn is_duplicate(&self, original_url: &str) -> bool {
        self.by_url.contains_key(original_url)
    }

    fn history(&self) -> Vec<Entry> {
        self.entries.clone()
    }
}
