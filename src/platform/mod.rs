//! Platform-specific MIME database loading.

#[cfg(unix)]
mod unix;

use crate::error::Result;
use crate::registry::RegistryBuilder;

/// Loads MIME databases from platform-specific sources into `builder`.
///
/// On Unix systems, reads from:
/// - /usr/share/mime/globs2 (FreeDesktop Shared MIME-info Database)
/// - /etc/mime.types, /etc/apache2/mime.types, etc.
pub(crate) async fn load_system_databases(builder: &mut RegistryBuilder) -> Result<usize> {
    #[cfg(unix)]
    {
        unix::load_system_databases(builder).await
    }

    #[cfg(not(unix))]
    {
        let _ = builder;
        Ok(0)
    }
}
