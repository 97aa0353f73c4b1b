use crate::Generator;
use sha2::Digest;
use std::marker::PhantomData;
use surly_core::{ShortCode, CODE_LENGTH};

/// Bytes of digest output needed to fill a short code with hex characters.
const CODE_BYTES: usize = CODE_LENGTH / 2;

/// A generator that hashes the URL and keeps the leading hex characters.
///
/// With the default six-character code only 24 bits of the digest survive,
/// so collisions become likely after a few thousand distinct URLs.
pub struct DigestGenerator<D> {
    _digest: PhantomData<fn() -> D>,
}

/// The default generator, backed by SHA-256.
pub type Sha256Generator = DigestGenerator<sha2::Sha256>;

impl<D: Digest> DigestGenerator<D> {
    pub fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D: Digest> Default for DigestGenerator<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestGenerator<D> {
    fn clone(&self) -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D> std::fmt::Debug for DigestGenerator<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestGenerator")
            .field("digest", &std::any::type_name::<D>())
            .finish()
    }
}

impl<D: Digest + 'static> Generator for DigestGenerator<D> {
    fn generate(&self, original_url: &str) -> ShortCode {
        let digest = D::digest(original_url.as_bytes());
        // Every supported digest is at least CODE_BYTES long, and hex output
        // is always lowercase [0-9a-f].
        ShortCode::new_unchecked(hex::encode(&digest[..CODE_BYTES]))
    }
}
