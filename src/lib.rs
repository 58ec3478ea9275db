//! MIME media type parsing and a registry of known types and extensions.
//!
//! This crate provides:
//! - A parser for media type strings of the form
//!   `type "/" [prefix "."] subtype ["+" suffix] *(";" parameter)`
//! - Rendering a parsed media type back to its wire form
//! - Validation of top-level types and registration prefixes
//! - Lookup between file extensions and media types
//!
//! ```
//! use mime_tree::{extension_for_key, is_valid, parse};
//!
//! let mt = parse("application/vnd.api+json; charset=utf-8").unwrap();
//! assert_eq!(mt.prefix, "vnd");
//! assert_eq!(mt.suffix, "json");
//! assert!(is_valid(&mt));
//!
//! assert_eq!(extension_for_key("application/json"), Some(".json"));
//! ```
//!
//! The free lookup functions use the process-wide built-in [`Registry`].
//! Build your own with [`RegistryBuilder`] to add names, mappings, or the
//! local system's MIME databases.

pub mod error;
pub mod media_type;
pub mod names;
pub mod parse;
pub mod registry;

mod builtin;
mod platform;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-export commonly used types
pub use error::{Error, ParseError, Result};
pub use media_type::{render, MediaType};
pub use parse::parse;
pub use registry::{
    extension_for_key, extension_for_mime, extension_for_mime_or_default, is_valid,
    lookup_by_key, Registry, RegistryBuilder,
};
