use std::fs;
use std::io;

use super::core::{InteractionStore, TOKEN_FILE};
use crate::Result;
use crate::errors::StoreError;

impl InteractionStore {
    /// The persisted bearer token, if any.
    ///
    /// Treat the returned String as a **bearer secret**. Do not log it.
    pub fn token(&self) -> Option<String> {
        let _guard = self.guard();
        let raw = fs::read_to_string(self.path(TOKEN_FILE)).ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_string())
    }

    /// Persist the bearer token as plain text.
    /// If the file exists, it is overwritten. On Unix, permissions are set to 600.
    pub fn set_token(&self, token: &str) -> Result<()> {
        let _guard = self.guard();
        let path = self.path(TOKEN_FILE);
        fs::write(&path, token).map_err(StoreError::Io)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(StoreError::Io)?;
        }
        Ok(())
    }

    /// Remove the persisted bearer token.
    ///
    /// Best-effort: a missing file is fine, and any other failure is logged
    /// rather than surfaced so that signing out can never fail.
    pub fn clear_token(&self) {
        let _guard = self.guard();
        let path = self.path(TOKEN_FILE);
        if let Err(err) = fs::remove_file(&path) {
            if err.kind() != io::ErrorKind::NotFound {
                tracing::warn!(?path, %err, "failed to remove persisted token");
            }
        }
    }
}
