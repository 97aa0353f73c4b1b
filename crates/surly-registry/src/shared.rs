use crate::registry::Registry;
use crate::settings::RegistrySettings;
use parking_lot::Mutex;
use std::sync::Arc;
use surly_core::{Entry, NotFoundError, ShortenError, ShortenOutcome, Shortener};
use surly_generator::{Generator, Sha256Generator};

/// A cloneable, thread-safe handle to one [`Registry`].
///
/// A single mutex guards the entry list and both indexes. It is held for
/// the whole of each operation, so the duplicate check and the insert in
/// `shorten` are atomic and two threads can never register the same URL.
#[derive(Debug)]
pub struct SharedRegistry<G = Sha256Generator> {
    inner: Arc<Mutex<Registry<G>>>,
}

impl<G> Clone for SharedRegistry<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedRegistry<Sha256Generator> {
    pub fn with_settings(settings: RegistrySettings) -> Self {
        Self::new(Registry::with_settings(settings))
    }
}

impl Default for SharedRegistry<Sha256Generator> {
    fn default() -> Self {
        Self::new(Registry::default())
    }
}

impl<G: Generator> SharedRegistry<G> {
    pub fn new(registry: Registry<G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// See [`Shortener::shorten`].
    pub fn shorten(&self, original_url: &str) -> Result<ShortenOutcome, ShortenError> {
        self.inner.lock().shorten(original_url)
    }

    /// See [`Shortener::expand`].
    pub fn expand(&self, code_or_url: &str) -> Result<String, NotFoundError> {
        self.inner.lock().expand(code_or_url)
    }

    /// See [`Shortener::is_duplicate`].
    pub fn is_duplicate(&self, original_url: &str) -> bool {
        self.inner.lock().is_duplicate(original_url)
    }

    /// See [`Shortener::history`].
    pub fn history(&self) -> Vec<Entry> {
        self.inner.lock().history()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn settings(&self) -> RegistrySettings {
        self.inner.lock().settings().clone()
    }
}

impl<G: Generator> Shortener for SharedRegistry<G> {
    fn shorten(&mut self, original_url: &str) -> Result<ShortenOutcome, ShortenError> {
        SharedRegistry::shorten(&*self, original_url)
    }

    fn expand(&self, code_or_url: &str) -> Result<String, NotFoundError> {
        SharedRegistry::expand(self, code_or_url)
    }

    fn is_duplicate(&self, original_url: &str) -> bool {
        SharedRegistry::is_duplicate(self, original_url)
    }

    fn history(&self) -> Vec<Entry> {
        SharedRegistry::history(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_state() {
        let registry: SharedRegistry = SharedRegistry::default();
        let other = registry.clone();

        registry.shorten("example.com").unwrap();

        assert!(other.is_duplicate("example.com"));
        assert_eq!(other.expand("a379a6").unwrap(), "example.com");
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn works_through_trait() {
        fn register<S: Shortener>(shortener: &mut S, url: &str) -> ShortenOutcome {
            shortener.shorten(url).unwrap()
        }

        let mut registry: SharedRegistry = SharedRegistry::default();
        assert!(register(&mut registry, "example.com").is_created());
        assert!(register(&mut registry, "example.com").is_duplicate());
        assert_eq!(Shortener::history(&registry).len(), 1);
    }

    #[test]
    fn concurrent_shorten_registers_once() {
        let registry: SharedRegistry = SharedRegistry::default();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.shorten("https://example.com/page").unwrap())
            })
            .collect();

        let outcomes: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        let created = outcomes.iter().filter(|o| o.is_created()).count();
        assert_eq!(created, 1);
        assert!(outcomes
            .iter()
            .all(|o| o.code().map(|c| c.as_str()) == Some("3641c5")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn concurrent_distinct_urls() {
        let registry: SharedRegistry = SharedRegistry::default();

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let registry = registry.clone();
                thread::spawn(move || {
                    registry
                        .shorten(&format!("https://example{}.com", i))
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_created());
        }

        assert_eq!(registry.len(), 10);
        for i in 0..10 {
            assert!(registry.is_duplicate(&format!("https://example{}.com", i)));
        }
    }
}
