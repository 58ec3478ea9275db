//! Registry of known media type names and file extension mappings.
//!
//! A [`Registry`] is built once through a [`RegistryBuilder`] and is read-only
//! afterwards, so it can be shared between threads without locking. The
//! built-in tables are also available as a process-wide registry through
//! [`Registry::global`], which the free functions of this module use.
//!
//! Extensions are kept in ascending byte order. Reverse lookups scan them in
//! that order and return the first extension whose keys match, so when several
//! extensions map to one media type the result is the smallest of them:
//! `".jpeg"` for `image/jpeg`, `".mid"` for `audio/midi`.

mod builder;
mod loader;

pub use builder::RegistryBuilder;

use crate::media_type::MediaType;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap, HashSet};

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::builtin);

/// Known media type names and extension mappings.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: HashSet<String>,
    prefixes: HashSet<String>,
    suffixes: HashSet<String>,
    mimes: HashMap<String, MediaType>,
    extensions: BTreeMap<String, Vec<String>>,
}

impl Registry {
    /// Returns an empty builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Builds a registry from the built-in tables.
    pub fn builtin() -> Self {
        RegistryBuilder::builtin().build()
    }

    /// Returns the process-wide registry, built from the built-in tables on
    /// first use.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Reports whether the media type has a known top-level type and prefix.
    ///
    /// The suffix, subtype and parameters are not checked; see
    /// [`is_known_suffix`](Registry::is_known_suffix) for the suffix.
    /// Returns false for `None`.
    pub fn is_valid(&self, media_type: Option<&MediaType>) -> bool {
        match media_type {
            Some(mt) => self.types.contains(&mt.top_level) && self.prefixes.contains(&mt.prefix),
            None => false,
        }
    }

    /// Reports whether the suffix of the media type is known. A media type
    /// without suffix passes.
    pub fn is_known_suffix(&self, media_type: &MediaType) -> bool {
        media_type.suffix.is_empty() || self.suffixes.contains(&media_type.suffix)
    }

    /// Looks up a media type by its canonical key, e.g. `"application/json"`.
    ///
    /// The key is matched exactly; it is not lowercased or trimmed.
    pub fn lookup_by_key(&self, key: &str) -> Option<&MediaType> {
        self.mimes.get(key)
    }

    /// Returns an extension for the media type.
    ///
    /// The media type is rendered, parameters included, and compared ASCII
    /// case-insensitively with the keys of every extension.
    pub fn extension_for_mime(&self, media_type: &MediaType) -> Option<&str> {
        let rendered = media_type.to_string();
        self.extensions
            .iter()
            .find(|(_, keys)| keys.iter().any(|key| key.eq_ignore_ascii_case(&rendered)))
            .map(|(ext, _)| ext.as_str())
    }

    /// Like [`extension_for_mime`](Registry::extension_for_mime), returning
    /// `fallback` when there is no match.
    pub fn extension_for_mime_or_default<'a>(
        &'a self,
        media_type: &MediaType,
        fallback: &'a str,
    ) -> &'a str {
        self.extension_for_mime(media_type).unwrap_or(fallback)
    }

    /// Returns an extension for the media type registered under `key`.
    pub fn extension_for_key(&self, key: &str) -> Option<&str> {
        self.lookup_by_key(key)
            .and_then(|media_type| self.extension_for_mime(media_type))
    }

    /// Returns every extension matching the media type, in ascending order.
    pub fn extensions_for_mime(&self, media_type: &MediaType) -> Vec<&str> {
        let rendered = media_type.to_string();
        self.extensions
            .iter()
            .filter(|(_, keys)| keys.iter().any(|key| key.eq_ignore_ascii_case(&rendered)))
            .map(|(ext, _)| ext.as_str())
            .collect()
    }

    /// Returns the media types an extension may stand for.
    ///
    /// The extension should begin with a leading dot, as in ".html". It is
    /// looked up first exactly, then ASCII-lowercased.
    pub fn mimes_for_extension(&self, ext: &str) -> Vec<&MediaType> {
        let keys = match self.extensions.get(ext) {
            Some(keys) => keys,
            None => match self.extensions.get(&ext.to_ascii_lowercase()) {
                Some(keys) => keys,
                None => return Vec::new(),
            },
        };
        keys.iter().filter_map(|key| self.mimes.get(key)).collect()
    }

    /// Iterates over the canonical keys of all registered media types.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.mimes.keys().map(String::as_str)
    }

    /// Iterates over all registered extensions in ascending order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }
}

/// Reports whether the media type is valid in the global registry.
///
/// # Examples
///
/// ```
/// use mime_tree::{is_valid, parse};
///
/// assert!(is_valid(&parse("application/json").unwrap()));
/// assert!(!is_valid(&parse("bogus/json").unwrap()));
/// ```
pub fn is_valid(media_type: &MediaType) -> bool {
    Registry::global().is_valid(Some(media_type))
}

/// Looks up a media type by canonical key in the global registry.
pub fn lookup_by_key(key: &str) -> Option<&'static MediaType> {
    Registry::global().lookup_by_key(key)
}

/// Returns an extension for the media type from the global registry.
pub fn extension_for_mime(media_type: &MediaType) -> Option<&'static str> {
    Registry::global().extension_for_mime(media_type)
}

/// Returns an extension for the media type from the global registry, or
/// `fallback`.
///
/// # Examples
///
/// ```
/// use mime_tree::{extension_for_mime_or_default, MediaType};
///
/// let mt = MediaType::must_parse("application/x-unknown");
/// assert_eq!(extension_for_mime_or_default(&mt, ".dat"), ".dat");
/// ```
pub fn extension_for_mime_or_default<'a>(media_type: &MediaType, fallback: &'a str) -> &'a str {
    Registry::global()
        .extension_for_mime(media_type)
        .unwrap_or(fallback)
}

/// Returns an extension for the canonical key from the global registry.
///
/// # Examples
///
/// ```
/// use mime_tree::extension_for_key;
///
/// assert_eq!(extension_for_key("application/json"), Some(".json"));
/// assert_eq!(extension_for_key("audio/midi"), Some(".mid"));
/// assert_eq!(extension_for_key("Application/JSON"), None);
/// ```
pub fn extension_for_key(key: &str) -> Option<&'static str> {
    Registry::global().extension_for_key(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn test_is_valid() {
        let registry = Registry::builtin();
        assert!(registry.is_valid(Some(&parse("application/json").unwrap())));
        assert!(registry.is_valid(Some(&parse("application/vnd.api+json").unwrap())));
        assert!(registry.is_valid(Some(&parse("chemical/x.pdb").unwrap())));
        assert!(!registry.is_valid(Some(&parse("bogus/json").unwrap())));
        assert!(!registry.is_valid(Some(&parse("application/acme.thing").unwrap())));
        assert!(!registry.is_valid(None));
    }

    #[test]
    fn test_is_valid_ignores_suffix_and_subtype() {
        let registry = Registry::builtin();
        let mt = parse("text/anything+nonsense").unwrap();
        assert!(registry.is_valid(Some(&mt)));
        assert!(!registry.is_known_suffix(&mt));
    }

    #[test]
    fn test_is_valid_is_case_sensitive() {
        let registry = Registry::builtin();
        assert!(!registry.is_valid(Some(&parse("Text/plain").unwrap())));
        assert!(!registry.is_valid(Some(&parse("text/VND.foo").unwrap())));
    }

    #[test]
    fn test_is_known_suffix() {
        let registry = Registry::builtin();
        assert!(registry.is_known_suffix(&parse("text/plain").unwrap()));
        assert!(registry.is_known_suffix(&parse("application/ld+json").unwrap()));
        assert!(registry.is_known_suffix(&parse("application/x+json-seq").unwrap()));
        assert!(!registry.is_known_suffix(&parse("application/a+yaml").unwrap()));
    }

    #[test]
    fn test_lookup_by_key() {
        let registry = Registry::builtin();
        let mt = registry.lookup_by_key("application/vnd.ms-excel").unwrap();
        assert_eq!(mt.prefix, "vnd");
        assert_eq!(mt.subtype, "ms-excel");

        assert!(registry.lookup_by_key("APPLICATION/JSON").is_none());
        assert!(registry.lookup_by_key(" application/json").is_none());
        assert!(registry.lookup_by_key("application/unknown").is_none());
    }

    #[test]
    fn test_lookup_alias_key() {
        let registry = Registry::builtin();
        assert_eq!(registry.lookup_by_key("image/jpg").unwrap().subtype, "jpeg");
        assert_eq!(registry.lookup_by_key("text/htm").unwrap().subtype, "html");
    }

    #[test]
    fn test_extension_for_mime() {
        let registry = Registry::builtin();
        let mt = parse("application/json").unwrap();
        assert_eq!(registry.extension_for_mime(&mt), Some(".json"));

        let mt = parse("APPLICATION/Vnd.MS-Excel").unwrap();
        assert_eq!(registry.extension_for_mime(&mt), Some(".xls"));

        let mt = parse("application/x-unknown").unwrap();
        assert_eq!(registry.extension_for_mime(&mt), None);
    }

    #[test]
    fn test_extension_for_mime_compares_parameters() {
        let registry = Registry::builtin();
        let mt = parse("text/plain;charset=utf-8").unwrap();
        assert_eq!(registry.extension_for_mime(&mt), None);
    }

    #[test]
    fn test_extension_for_mime_picks_smallest_extension() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.extension_for_mime(&parse("image/jpeg").unwrap()),
            Some(".jpeg")
        );
        assert_eq!(
            registry.extension_for_mime(&parse("audio/x-midi").unwrap()),
            Some(".mid")
        );
        assert_eq!(
            registry.extension_for_mime(&parse("video/3gpp").unwrap()),
            Some(".3gp")
        );
    }

    #[test]
    fn test_extension_for_mime_or_default() {
        let registry = Registry::builtin();
        let mt = parse("application/pdf").unwrap();
        assert_eq!(registry.extension_for_mime_or_default(&mt, ".bin"), ".pdf");

        let mt = parse("application/x-unknown").unwrap();
        assert_eq!(registry.extension_for_mime_or_default(&mt, ".bin"), ".bin");
    }

    #[test]
    fn test_extension_for_key() {
        let registry = Registry::builtin();
        assert_eq!(registry.extension_for_key("text/css"), Some(".css"));
        assert_eq!(registry.extension_for_key("text/htm"), Some(".htm"));
        assert_eq!(registry.extension_for_key("image/jpg"), Some(".jpeg"));
        assert_eq!(registry.extension_for_key("text/unknown"), None);
    }

    #[test]
    fn test_extensions_for_mime() {
        let registry = Registry::builtin();
        let mt = parse("audio/midi").unwrap();
        assert_eq!(registry.extensions_for_mime(&mt), [".mid", ".midi"]);

        let mt = parse("image/tiff").unwrap();
        assert_eq!(registry.extensions_for_mime(&mt), [".tif", ".tiff"]);

        let mt = parse("application/x-unknown").unwrap();
        assert!(registry.extensions_for_mime(&mt).is_empty());
    }

    #[test]
    fn test_mimes_for_extension() {
        let registry = Registry::builtin();
        let mimes = registry.mimes_for_extension(".3gp");
        let rendered: Vec<String> = mimes.iter().map(|mt| mt.to_string()).collect();
        assert_eq!(rendered, ["audio/3gpp", "video/3gpp"]);

        let mimes = registry.mimes_for_extension(".PNG");
        assert_eq!(mimes.len(), 1);
        assert_eq!(mimes[0].subtype, "png");

        assert!(registry.mimes_for_extension(".unknown").is_empty());
        assert!(registry.mimes_for_extension("png").is_empty());
    }

    #[test]
    fn test_global_registry() {
        assert!(std::ptr::eq(Registry::global(), Registry::global()));
        assert!(is_valid(&parse("font/woff2").unwrap()));
        assert_eq!(lookup_by_key("font/woff2").unwrap().subtype, "woff2");
        assert_eq!(extension_for_key("font/woff2"), Some(".woff2"));
        assert_eq!(
            extension_for_mime(&parse("application/zip").unwrap()),
            Some(".zip")
        );
    }

    #[test]
    fn test_iterators() {
        let registry = Registry::builtin();
        assert!(registry.keys().any(|key| key == "text/plain"));
        let exts: Vec<&str> = registry.extensions().collect();
        let mut sorted = exts.clone();
        sorted.sort_unstable();
        assert_eq!(exts, sorted);
    }
}
