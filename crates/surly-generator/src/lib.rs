pub mod digest;

pub use digest::{DigestGenerator, Sha256Generator};

use surly_core::ShortCode;

/// Trait for deriving short codes from URLs.
///
/// Implementations are pure generators that don't interact with storage:
/// the same URL must always produce the same code. They are not required
/// to be collision free.
pub trait Generator: Send + Sync + 'static {
    /// Derives the short code for `original_url`.
    fn generate(&self, original_url: &str) -> ShortCode;
}

impl<G: Generator> Generator for std::sync::Arc<G> {
    fn generate(&self, original_url: &str) -> ShortCode {
        (**self).generate(original_url)
    }
}
