//! In-memory registry of shortened URLs.
//!
//! [`Registry`] is a plain single-owner store. [`SharedRegistry`] wraps it
//! in a mutex for callers that need to share one registry between threads.
//!
//! ```
//! use surly_core::Shortener;
//! use surly_registry::{Registry, RegistrySettings};
//!
//! let mut registry = Registry::with_settings(RegistrySettings::builder().build());
//! let outcome = registry.shorten("https://example.com/page").unwrap();
//! let short_url = outcome.short_url().unwrap();
//!
//! assert_eq!(short_url, "https://sur.ly/3641c5");
//! assert_eq!(registry.expand(short_url).unwrap(), "https://example.com/page");
//! ```

pub mod registry;
pub mod settings;
pub mod shared;

pub use registry::Registry;
pub use settings::{RegistrySettings, DEFAULT_BASE_URL};
pub use shared::SharedRegistry;
