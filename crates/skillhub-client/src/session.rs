//! Session state shared between the client and its caller.
//!
//! The client reads the bearer token and reads/writes the CSRF token on every
//! request. The bearer token, cached user and admin flag are owned by the
//! caller: it sets them at login and clears them at logout.

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::UserInfo;

/// Default session file name within the skillhub config directory.
pub const SESSION_FILE: &str = "session.json";

// ============================================================================
// SessionStore Trait
// ============================================================================

/// Storage for the credentials attached to outgoing requests.
pub trait SessionStore: Send + Sync + Debug {
    /// Current bearer (JWT) token.
    fn bearer_token(&self) -> Option<String>;

    /// Replace the bearer token.
    fn set_bearer_token(&self, token: Option<String>) -> Result<()>;

    /// Cached CSRF token.
    fn csrf_token(&self) -> Option<String>;

    /// Replace the cached CSRF token.
    fn set_csrf_token(&self, token: Option<String>) -> Result<()>;

    /// Cached current user.
    fn user(&self) -> Option<UserInfo>;

    /// Replace the cached current user.
    fn set_user(&self, user: Option<UserInfo>) -> Result<()>;

    /// Cached admin flag.
    fn is_admin(&self) -> bool;

    /// Replace the cached admin flag.
    fn set_admin(&self, is_admin: bool) -> Result<()>;

    /// Drop everything.
    fn clear(&self) -> Result<()>;
}

/// Snapshot of everything a session store holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub is_admin: bool,
}

// ============================================================================
// InMemorySessionStore
// ============================================================================

/// Process-local session store, used by tests and embedders.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    data: RwLock<SessionData>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a bearer token already set.
    pub fn with_bearer_token(token: impl Into<String>) -> Self {
        Self {
            data: RwLock::new(SessionData {
                jwt_token: Some(token.into()),
                ..Default::default()
            }),
        }
    }

    /// Start with the given snapshot.
    pub fn with_data(data: SessionData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SessionData {
        self.data.read().clone()
    }
}

impl SessionStore for InMemorySessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.data.read().jwt_token.clone()
    }

    fn set_bearer_token(&self, token: Option<String>) -> Result<()> {
        self.data.write().jwt_token = token;
        Ok(())
    }

    fn csrf_token(&self) -> Option<String> {
        self.data.read().csrf_token.clone()
    }

    fn set_csrf_token(&self, token: Option<String>) -> Result<()> {
        self.data.write().csrf_token = token;
        Ok(())
    }

    fn user(&self) -> Option<UserInfo> {
        self.data.read().user.clone()
    }

    fn set_user(&self, user: Option<UserInfo>) -> Result<()> {
        self.data.write().user = user;
        Ok(())
    }

    fn is_admin(&self) -> bool {
        self.data.read().is_admin
    }

    fn set_admin(&self, is_admin: bool) -> Result<()> {
        self.data.write().is_admin = is_admin;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.data.write() = SessionData::default();
        Ok(())
    }
}

// ============================================================================
// FileSessionStore
// ============================================================================

/// JSON-file session store for the CLI.
///
/// The file is loaded once at construction and rewritten after every mutation.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    data: RwLock<SessionData>,
}

impl FileSessionStore {
    /// Open the session file in `dir`, creating nothing until the first write.
    pub fn open(dir: &Path) -> Result<Self> {
        Self::with_path(dir.join(SESSION_FILE))
    }

    /// Open a session file at an explicit path.
    pub fn with_path(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                Error::Session(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&content).map_err(|e| {
                Error::Session(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            SessionData::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update(&self, apply: impl FnOnce(&mut SessionData)) -> Result<()> {
        let mut data = self.data.write();
        apply(&mut data);
        self.persist(&data)
    }

    fn persist(&self, data: &SessionData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Session(format!("Failed to create session directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, json)
            .map_err(|e| Error::Session(format!("Failed to write session file: {}", e)))?;

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.data.read().jwt_token.clone()
    }

    fn set_bearer_token(&self, token: Option<String>) -> Result<()> {
        self.update(|d| d.jwt_token = token)
    }

    fn csrf_token(&self) -> Option<String> {
        self.data.read().csrf_token.clone()
    }

    fn set_csrf_token(&self, token: Option<String>) -> Result<()> {
        self.update(|d| d.csrf_token = token)
    }

    fn user(&self) -> Option<UserInfo> {
        self.data.read().user.clone()
    }

    fn set_user(&self, user: Option<UserInfo>) -> Result<()> {
        self.update(|d| d.user = user)
    }

    fn is_admin(&self) -> bool {
        self.data.read().is_admin
    }

    fn set_admin(&self, is_admin: bool) -> Result<()> {
        self.update(|d| d.is_admin = is_admin)
    }

    fn clear(&self) -> Result<()> {
        let mut data = self.data.write();
        // Disk first, so a failed delete leaves memory matching the file.
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .map_err(|e| Error::Session(format!("Failed to delete session file: {}", e)))?;
        }
        *data = SessionData::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_roundtrip() {
        let store = InMemorySessionStore::with_bearer_token("jwt-1");
        assert_eq!(store.bearer_token().as_deref(), Some("jwt-1"));
        assert!(store.csrf_token().is_none());

        store.set_csrf_token(Some("csrf-1".into())).unwrap();
        store.set_admin(true).unwrap();
        assert_eq!(store.csrf_token().as_deref(), Some("csrf-1"));
        assert!(store.is_admin());

        store.clear().unwrap();
        assert_eq!(store.snapshot(), SessionData::default());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileSessionStore::open(dir.path()).unwrap();
        assert!(store.bearer_token().is_none());
        assert!(!store.path().exists());

        store.set_bearer_token(Some("jwt-abc".into())).unwrap();
        store.set_csrf_token(Some("csrf-xyz".into())).unwrap();
        assert!(store.path().exists());

        let reopened = FileSessionStore::open(dir.path()).unwrap();
        assert_eq!(reopened.bearer_token().as_deref(), Some("jwt-abc"));
        assert_eq!(reopened.csrf_token().as_deref(), Some("csrf-xyz"));
        assert!(!reopened.is_admin());
    }

    #[test]
    fn test_file_store_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path()).unwrap();
        store.set_admin(true).unwrap();
        assert!(store.path().exists());

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(!store.is_admin());
    }

    #[test]
    fn test_file_store_failed_clear_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path()).unwrap();
        store.set_bearer_token(Some("jwt-keep".into())).unwrap();

        // A directory in place of the file makes the delete fail.
        std::fs::remove_file(store.path()).unwrap();
        std::fs::create_dir(store.path()).unwrap();

        let err = store.clear().unwrap_err();
        assert!(matches!(err, Error::Session(_)));
        assert_eq!(store.bearer_token().as_deref(), Some("jwt-keep"));
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "not json").unwrap();

        let err = FileSessionStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Session(_)));
    }
}
