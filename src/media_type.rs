//! The structured media type value and its wire rendering.

use crate::error::ParseError;
use crate::parse::parse;
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::str::FromStr;

/// A media type of the form
/// `type "/" [prefix "."] subtype ["+" suffix] *(";" key "=" value)`.
///
/// An empty `prefix` is the standard tree and an empty `suffix` means no
/// suffix; neither has a wire form. A parameter key may repeat, so every
/// key holds its values in the order they appeared.
///
/// # Examples
///
/// ```
/// use mime_tree::MediaType;
///
/// let mt = MediaType::parse("application/vnd.api+json; charset=utf-8").unwrap();
/// assert_eq!(mt.top_level, "application");
/// assert_eq!(mt.prefix, "vnd");
/// assert_eq!(mt.subtype, "api");
/// assert_eq!(mt.suffix, "json");
/// assert_eq!(mt.param("charset"), Some("utf-8"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaType {
    pub top_level: String,
    pub prefix: String,
    pub subtype: String,
    pub suffix: String,
    pub parameters: HashMap<String, Vec<String>>,
}

impl MediaType {
    /// Builds a media type without parameters.
    pub fn new(top_level: &str, prefix: &str, subtype: &str, suffix: &str) -> Self {
        MediaType {
            top_level: top_level.to_string(),
            prefix: prefix.to_string(),
            subtype: subtype.to_string(),
            suffix: suffix.to_string(),
            parameters: HashMap::new(),
        }
    }

    /// Parses a media type string. See [`parse`](crate::parse()).
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse(s)
    }

    /// Parses a media type string, panicking if it is malformed.
    ///
    /// Meant for literal media types in code or static configuration, where
    /// a malformed value is a programming error.
    ///
    /// # Panics
    ///
    /// Panics if `s` does not parse.
    #[track_caller]
    pub fn must_parse(s: &str) -> Self {
        match parse(s) {
            Ok(media_type) => media_type,
            Err(err) => panic!("invalid media type {:?}: {}", s, err),
        }
    }

    /// Returns the first value of the parameter `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.parameters
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value of the parameter `key`, in order of appearance.
    pub fn params(&self, key: &str) -> &[String] {
        self.parameters.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends `value` to the parameter `key`, keeping existing values.
    pub fn add_param(&mut self, key: &str, value: &str) {
        self.parameters
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// Renders the type tree without parameters.
    ///
    /// ```
    /// use mime_tree::MediaType;
    ///
    /// let mt = MediaType::must_parse("image/svg+xml;q=1");
    /// assert_eq!(mt.essence(), "image/svg+xml");
    /// ```
    pub fn essence(&self) -> String {
        let mut s = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_tree(&mut s);
        s
    }

    fn write_tree<W: Write>(&self, w: &mut W) -> fmt::Result {
        w.write_str(&self.top_level)?;
        w.write_char('/')?;
        if !self.prefix.is_empty() {
            w.write_str(&self.prefix)?;
            w.write_char('.')?;
        }
        w.write_str(&self.subtype)?;
        if !self.suffix.is_empty() {
            w.write_char('+')?;
            w.write_str(&self.suffix)?;
        }
        Ok(())
    }
}

/// Renders to the wire form.
///
/// Parameters are written as `;key=value` with no whitespace. Keys come out
/// in map order, which is not stable; values under one key keep their order.
impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f)?;
        for (key, values) in &self.parameters {
            if key.is_empty() {
                continue;
            }
            for value in values {
                write!(f, ";{}={}", key, value)?;
            }
        }
        Ok(())
    }
}

impl FromStr for MediaType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Renders a media type to its wire form, or the empty string for `None`.
///
/// # Examples
///
/// ```
/// use mime_tree::{render, MediaType};
///
/// let mt = MediaType::must_parse("application/vnd.api+json");
/// assert_eq!(render(Some(&mt)), "application/vnd.api+json");
/// assert_eq!(render(None), "");
/// ```
pub fn render(media_type: Option<&MediaType>) -> String {
    media_type.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_standard_tree() {
        let mt = MediaType::new("text", "", "plain", "");
        assert_eq!(mt.to_string(), "text/plain");
    }

    #[test]
    fn test_render_prefix_goes_after_slash() {
        let mt = MediaType::new("application", "vnd", "ms-excel", "");
        assert_eq!(mt.to_string(), "application/vnd.ms-excel");

        let mt = MediaType::new("application", "vnd", "mozilla.xul", "xml");
        assert_eq!(mt.to_string(), "application/vnd.mozilla.xul+xml");
    }

    #[test]
    fn test_render_parameters() {
        let mut mt = MediaType::new("text", "", "plain", "");
        mt.add_param("charset", "utf-8");
        mt.add_param("charset", "ascii");
        assert_eq!(mt.to_string(), "text/plain;charset=utf-8;charset=ascii");
    }

    #[test]
    fn test_render_skips_empty_key() {
        let mut mt = MediaType::new("text", "", "plain", "");
        mt.parameters.insert(String::new(), vec!["x".to_string()]);
        mt.parameters.insert("a".to_string(), Vec::new());
        assert_eq!(mt.to_string(), "text/plain");
    }

    #[test]
    fn test_render_none() {
        assert_eq!(render(None), "");
        let mt = MediaType::new("font", "", "woff2", "");
        assert_eq!(render(Some(&mt)), "font/woff2");
    }

    #[test]
    fn test_params_accessors() {
        let mut mt = MediaType::new("text", "", "plain", "");
        assert_eq!(mt.param("charset"), None);
        assert!(mt.params("charset").is_empty());

        mt.add_param("charset", "utf-8");
        mt.add_param("charset", "ascii");
        assert_eq!(mt.param("charset"), Some("utf-8"));
        assert_eq!(mt.params("charset"), ["utf-8", "ascii"]);
    }

    #[test]
    fn test_essence_drops_parameters() {
        let mut mt = MediaType::new("application", "x", "tar", "gzip");
        mt.add_param("level", "9");
        assert_eq!(mt.essence(), "application/x.tar+gzip");
    }

    #[test]
    #[should_panic(expected = "invalid media type")]
    fn test_must_parse_panics() {
        MediaType::must_parse("application");
    }
}
