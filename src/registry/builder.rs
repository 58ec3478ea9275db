//! Registry configuration.

use super::Registry;
use crate::builtin::{BUILTIN_EXTENSIONS, BUILTIN_MIMES};
use crate::error::{Error, Result};
use crate::media_type::MediaType;
use crate::names::{PREFIXES, SUFFIXES, TOP_LEVEL_TYPES};
use crate::parse::parse;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Collects names and mappings for a [`Registry`].
///
/// # Examples
///
/// ```
/// use mime_tree::RegistryBuilder;
///
/// let mut builder = RegistryBuilder::builtin();
/// builder.mime("application/wasm", "application/wasm").unwrap();
/// builder.extension(".wasm", &["application/wasm"]).unwrap();
/// let registry = builder.build();
///
/// assert_eq!(registry.extension_for_key("application/wasm"), Some(".wasm"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    pub(super) types: HashSet<String>,
    pub(super) prefixes: HashSet<String>,
    pub(super) suffixes: HashSet<String>,
    pub(super) mimes: HashMap<String, MediaType>,
    pub(super) extensions: BTreeMap<String, Vec<String>>,
}

impl RegistryBuilder {
    /// Returns a builder with no names and no mappings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder seeded with the built-in names and tables.
    pub fn builtin() -> Self {
        let mut builder = Self::new();
        for name in TOP_LEVEL_TYPES {
            builder.top_level(name);
        }
        for name in PREFIXES {
            builder.prefix(name);
        }
        for name in SUFFIXES {
            builder.suffix(name);
        }
        for (key, wire) in BUILTIN_MIMES {
            builder.media_type(key, MediaType::must_parse(wire));
        }
        for (ext, keys) in BUILTIN_EXTENSIONS {
            builder.extensions.insert(
                ext.to_string(),
                keys.iter().map(|key| key.to_string()).collect(),
            );
        }
        builder
    }

    /// Adds a known top-level type.
    pub fn top_level(&mut self, name: &str) -> &mut Self {
        self.types.insert(name.to_string());
        self
    }

    /// Adds a known registration prefix. The empty string is the standard tree.
    pub fn prefix(&mut self, name: &str) -> &mut Self {
        self.prefixes.insert(name.to_string());
        self
    }

    /// Adds a known structured syntax suffix.
    pub fn suffix(&mut self, name: &str) -> &mut Self {
        self.suffixes.insert(name.to_string());
        self
    }

    /// Parses `wire` and registers it under the canonical `key`, replacing
    /// any media type already registered there.
    pub fn mime(&mut self, key: &str, wire: &str) -> Result<&mut Self> {
        let media_type = parse(wire)?;
        Ok(self.media_type(key, media_type))
    }

    /// Registers a media type under the canonical `key`.
    pub fn media_type(&mut self, key: &str, media_type: MediaType) -> &mut Self {
        self.mimes.insert(key.to_string(), media_type);
        self
    }

    /// Maps an extension to registered keys.
    ///
    /// Keys are appended after those the extension already has; keys it
    /// already has are skipped.
    pub fn extension(&mut self, ext: &str, keys: &[&str]) -> Result<&mut Self> {
        if !ext.starts_with('.') {
            return Err(Error::InvalidExtension(ext.to_string()));
        }
        if let Some(key) = keys.iter().find(|key| !self.mimes.contains_key(**key)) {
            return Err(Error::UnknownMime(key.to_string()));
        }

        let known = self.extensions.entry(ext.to_string()).or_default();
        for key in keys {
            if !known.iter().any(|k| k == key) {
                known.push(key.to_string());
            }
        }
        Ok(self)
    }

    /// Freezes the collected names and mappings into a [`Registry`].
    pub fn build(&self) -> Registry {
        debug!(
            mimes = self.mimes.len(),
            extensions = self.extensions.len(),
            "built media type registry"
        );
        Registry {
            types: self.types.clone(),
            prefixes: self.prefixes.clone(),
            suffixes: self.suffixes.clone(),
            mimes: self.mimes.clone(),
            extensions: self.extensions.clone(),
        }
    }

    /// Maps `ext` to the media type `mime` read from a database, unless `ext`
    /// is already mapped. Returns whether the mapping was added.
    pub(super) fn add_loaded(&mut self, ext: &str, mime: &str) -> bool {
        if self.extensions.contains_key(ext) {
            return false;
        }

        let key = mime.to_ascii_lowercase();
        if !self.mimes.contains_key(&key) {
            match parse(&key) {
                Ok(media_type) => {
                    self.mimes.insert(key.clone(), media_type);
                }
                Err(err) => {
                    debug!(mime, error = %err, "skipping unparsable media type");
                    return false;
                }
            }
        }

        self.extensions.insert(ext.to_string(), vec![key]);
        true
    }
}
