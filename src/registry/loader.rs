//! Loading extension mappings from MIME databases.
//!
//! Two formats are understood:
//! - FreeDesktop Shared MIME-info `globs2`: `weight:mimetype:glob[:morefields...]`
//! - Apache style `mime.types`: `mimetype ext1 ext2 ...`
//!
//! Entries never replace an extension the builder already maps.

use super::RegistryBuilder;
use crate::error::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

impl RegistryBuilder {
    /// Loads mappings from a `globs2` database. Returns the number of
    /// extensions added.
    ///
    /// Only simple `*.ext` globs are used.
    ///
    /// See <https://specifications.freedesktop.org/shared-mime-info-spec/shared-mime-info-spec-0.21.html>
    pub async fn load_mime_globs<R: AsyncBufRead + Unpin>(&mut self, reader: R) -> Result<usize> {
        let mut lines = reader.lines();
        let mut added = 0;

        while let Some(line) = lines.next_line().await? {
            let fields: Vec<&str> = line.split(':').collect();

            if fields.len() < 3 || fields[0].is_empty() || fields[2].len() < 3 {
                continue;
            }
            if fields[0].starts_with('#') {
                continue;
            }

            let extension = match fields[2].strip_prefix('*') {
                Some(ext) if ext.starts_with('.') => ext,
                _ => continue,
            };
            if extension.contains(&['?', '*', '['][..]) {
                debug!(glob = fields[2], "skipping wildcard glob");
                continue;
            }

            if self.add_loaded(extension, fields[1]) {
                added += 1;
            }
        }

        Ok(added)
    }

    /// Loads mappings from a `mime.types` file. Returns the number of
    /// extensions added.
    pub async fn load_mime_types<R: AsyncBufRead + Unpin>(&mut self, reader: R) -> Result<usize> {
        let mut lines = reader.lines();
        let mut added = 0;

        while let Some(line) = lines.next_line().await? {
            let fields: Vec<&str> = line.split_whitespace().collect();

            if fields.len() <= 1 || fields[0].starts_with('#') {
                continue;
            }

            let mime = fields[0];
            for ext in &fields[1..] {
                if ext.starts_with('#') {
                    break;
                }

                let extension = if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{}", ext)
                };

                if self.add_loaded(&extension, mime) {
                    added += 1;
                }
            }
        }

        Ok(added)
    }

    /// Loads a `globs2` database from disk.
    pub async fn load_mime_globs_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).await?;
        let added = self.load_mime_globs(BufReader::new(file)).await?;
        debug!(path = %path.display(), added, "loaded MIME globs database");
        Ok(added)
    }

    /// Loads a `mime.types` file from disk.
    pub async fn load_mime_types_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).await?;
        let added = self.load_mime_types(BufReader::new(file)).await?;
        debug!(path = %path.display(), added, "loaded mime.types file");
        Ok(added)
    }

    /// Loads the local system's MIME databases, if any.
    ///
    /// On Unix the FreeDesktop `globs2` databases are tried first; when none
    /// is found the usual `mime.types` files are read. Missing files are
    /// ignored. Does nothing on other platforms.
    pub async fn load_system_databases(&mut self) -> Result<usize> {
        crate::platform::load_system_databases(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBS: &str = "\
# This file was automatically generated
50:application/wasm:*.wasm
50:text/x-readme:README*
50:text/x-c++src:*.c++
50:image/x-portable-anymap:*.p[nbgp]m
50:application/json:*.json
:text/plain:*.nothing
10:text/markdown:*.md:cs
";

    const MIME_TYPES: &str = "\
# mime.types
application/wasm                wasm
text/markdown                   md markdown   # comment ext
image/x-portable-anymap         pnm
application/json                json
bogus                           bog

text/x-lonely
";

    #[tokio::test]
    async fn test_load_mime_globs() {
        let mut builder = RegistryBuilder::builtin();
        let added = builder.load_mime_globs(GLOBS.as_bytes()).await.unwrap();
        assert_eq!(added, 3);

        let registry = builder.build();
        assert_eq!(registry.extension_for_key("application/wasm"), Some(".wasm"));
        assert_eq!(registry.extension_for_key("text/x-c++src"), Some(".c++"));
        assert_eq!(registry.extension_for_key("text/markdown"), Some(".md"));
        assert!(registry.mimes_for_extension(".nothing").is_empty());
        assert!(registry.lookup_by_key("text/x-readme").is_none());
        assert_eq!(
            registry.mimes_for_extension(".json")[0].to_string(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_load_mime_types() {
        let mut builder = RegistryBuilder::builtin();
        let added = builder.load_mime_types(MIME_TYPES.as_bytes()).await.unwrap();
        assert_eq!(added, 4);

        let registry = builder.build();
        let md = registry.lookup_by_key("text/markdown").unwrap();
        assert_eq!(registry.extensions_for_mime(md), [".markdown", ".md"]);
        assert_eq!(registry.extension_for_key("image/x-portable-anymap"), Some(".pnm"));
        assert!(registry.mimes_for_extension(".comment").is_empty());
        assert!(registry.mimes_for_extension(".bog").is_empty());
        assert!(registry.lookup_by_key("text/x-lonely").is_none());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let mut builder = RegistryBuilder::new();
        let err = builder
            .load_mime_types_file("/nonexistent/mime.types")
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
