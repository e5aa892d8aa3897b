//! Persisted bearer-token storage.
//!
//! Exactly one credential entry exists per state directory: the opaque token
//! from the most recent sign-in, stored in `credentials.json`. The file
//! survives process restarts until an explicit sign-out or a failed session
//! rehydration clears it.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Well-known name of the credential file inside the state directory.
const CREDENTIALS_FILE: &str = "credentials.json";

/// On-disk shape of the credential file.
#[derive(Serialize, Deserialize)]
struct CredentialsFile {
    token: String,
}

/// The process-wide credential slot.
///
/// Holds the token in memory behind an `RwLock` and mirrors every change to
/// the credential file. All access happens from one logical thread; the lock
/// exists so clones of the owning client can share the slot.
pub struct CredentialStore {
    path: PathBuf,
    token: RwLock<Option<SecretString>>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("path", &self.path)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl CredentialStore {
    /// Open the credential slot for a state directory, reading any token a
    /// previous process left behind.
    ///
    /// A missing file means signed out. An unreadable or malformed file is
    /// treated the same way, with a warning; it will be overwritten by the
    /// next sign-in.
    #[must_use]
    pub fn open(state_dir: &Path) -> Self {
        let path = state_dir.join(CREDENTIALS_FILE);
        let token = match Self::read_file(&path) {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable credential file");
                None
            }
        };

        Self {
            path,
            token: RwLock::new(token),
        }
    }

    fn read_file(path: &Path) -> std::io::Result<Option<SecretString>> {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let parsed: CredentialsFile = serde_json::from_str(&contents)?;
        Ok(Some(SecretString::from(parsed.token)))
    }

    /// The stored token, if any.
    pub async fn token(&self) -> Option<SecretString> {
        self.token.read().await.clone()
    }

    /// True when a token is stored.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Store a new token, replacing any existing one, and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential file cannot be written. The
    /// in-memory slot is updated regardless, so the running process stays
    /// signed in.
    pub async fn set(&self, token: SecretString) -> std::io::Result<()> {
        *self.token.write().await = Some(token.clone());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&CredentialsFile {
            token: token.expose_secret().to_string(),
        })?;

        let mut options = OpenOptions::new();
        options.truncate(true).write(true).create(true);
        #[cfg(unix)]
        {
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Discard the token and delete the credential file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed. A missing
    /// file is not an error.
    pub async fn clear(&self) -> std::io::Result<()> {
        *self.token.write().await = None;

        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_without_file_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path());
        assert!(!store.has_token().await);
    }

    #[tokio::test]
    async fn test_set_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();

        let store = CredentialStore::open(dir.path());
        store.set(SecretString::from("tok-123")).await.unwrap();

        let reopened = CredentialStore::open(dir.path());
        let token = reopened.token().await.unwrap();
        assert_eq!(token.expose_secret(), "tok-123");
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();

        let store = CredentialStore::open(dir.path());
        store.set(SecretString::from("tok-123")).await.unwrap();
        store.clear().await.unwrap();
        assert!(!store.has_token().await);

        let reopened = CredentialStore::open(dir.path());
        assert!(!reopened.has_token().await);

        // clearing again is a no-op
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_file_treated_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CREDENTIALS_FILE), "not json").unwrap();

        let store = CredentialStore::open(dir.path());
        assert!(!store.has_token().await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_credential_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path());
        store.set(SecretString::from("tok-123")).await.unwrap();

        let mode = std::fs::metadata(dir.path().join(CREDENTIALS_FILE))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
