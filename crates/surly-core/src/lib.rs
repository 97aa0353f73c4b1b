//! Core types and traits for the Surly URL shortener.
//!
//! This crate provides the types shared by the code generator, the
//! in-memory registry and the interactive front end.

pub mod entry;
pub mod error;
pub mod shortcode;
pub mod shortener;
pub mod validator;

pub use entry::Entry;
pub use error::{CoreError, NotFoundError, ShortenError, ValidationError};
pub use shortcode::{ShortCode, CODE_LENGTH};
pub use shortener::{ShortenOutcome, Shortener};
pub use validator::{is_valid, validate};
