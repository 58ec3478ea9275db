//! Unix MIME database locations.

use crate::error::Result;
use crate::registry::RegistryBuilder;
use tracing::debug;

/// Paths to FreeDesktop Shared MIME-info Database globs2 files.
const MIME_GLOBS: &[&str] = &[
    "/usr/local/share/mime/globs2",
    "/usr/share/mime/globs2",
];

/// Common locations for mime.types files on Unix.
const TYPE_FILES: &[&str] = &[
    "/etc/mime.types",
    "/etc/apache2/mime.types",
    "/etc/apache/mime.types",
    "/etc/httpd/conf/mime.types",
];

pub(super) async fn load_system_databases(builder: &mut RegistryBuilder) -> Result<usize> {
    for path in MIME_GLOBS {
        match builder.load_mime_globs_file(path).await {
            // Stop checking more files if a globs database is found
            Ok(added) => return Ok(added),
            Err(err) => debug!(path = *path, error = %err, "MIME globs database unavailable"),
        }
    }

    let mut added = 0;
    for path in TYPE_FILES {
        match builder.load_mime_types_file(path).await {
            Ok(n) => added += n,
            Err(err) => debug!(path = *path, error = %err, "mime.types file unavailable"),
        }
    }

    Ok(added)
}
