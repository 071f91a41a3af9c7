//! Admin Session
//!
//! The bearer token and the signed-in admin's identity, persisted under the
//! `authToken` and `user` keys. The HTTP client receives a [`Session`] at
//! construction and reads the token from its store on every request, so a
//! token replaced by another process is picked up on the next call.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use dash_common::AdminIdentity;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::StorageError;

// ============================================================================
// Storage
// ============================================================================

/// Persisted session document. Field names are the storage keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "user", default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<AdminIdentity>,
}

/// Backing storage for the session keys.
pub trait SessionStore: Send + Sync {
    /// Read the current session. Missing or unreadable storage reads as empty.
    fn load(&self) -> StoredSession;

    /// Replace the stored session.
    fn save(&self, session: &StoredSession) -> Result<(), StorageError>;

    /// Erase both keys.
    fn clear(&self) -> Result<(), StorageError> {
        self.save(&StoredSession::default())
    }
}

/// Session kept in process memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<StoredSession>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> StoredSession {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, session: &StoredSession) -> Result<(), StorageError> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = session.clone();
        Ok(())
    }
}

/// Session stored as a small JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> StoredSession {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("Corrupt session file, treating as signed out: {e}");
                StoredSession::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => StoredSession::default(),
            Err(e) => {
                warn!("Failed to read session file, treating as signed out: {e}");
                StoredSession::default()
            }
        }
    }

    fn save(&self, session: &StoredSession) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json).map_err(io_err)
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Session lifecycle notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A token was stored after login.
    Authenticated(Option<AdminIdentity>),
    /// The server rejected the stored token; it has been erased.
    Expired { reason: String },
    /// The admin signed out.
    LoggedOut,
}

type Listener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

/// Handle to the persisted session, shared by the HTTP client and services.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    listener: Option<Listener>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.token().is_some())
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            listener: None,
        }
    }

    /// Session that is never written to disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemorySessionStore::new())
    }

    /// Register the callback fired on login, expiry and logout.
    #[must_use]
    pub fn with_listener(mut self, listener: impl Fn(&SessionEvent) + Send + Sync + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Bearer token, read from storage at call time.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.load().token.filter(|t| !t.is_empty())
    }

    /// Identity of the signed-in admin.
    #[must_use]
    pub fn identity(&self) -> Option<AdminIdentity> {
        self.store.load().identity
    }

    /// Persist a freshly issued (or refreshed) token with the identity decoded
    /// from its claims.
    pub fn establish(&self, token: &str) -> Result<Option<AdminIdentity>, StorageError> {
        let identity = decode_identity(token);
        if identity.is_none() {
            debug!("Token claims carry no admin identity");
        }

        self.store.save(&StoredSession {
            token: Some(token.to_string()),
            identity: identity.clone(),
        })?;

        self.emit(&SessionEvent::Authenticated(identity.clone()));
        Ok(identity)
    }

    /// Erase the token after the server rejected it. Does nothing (and fires
    /// nothing) when no session is stored.
    pub fn expire(&self, reason: &str) {
        if self.store.load() == StoredSession::default() {
            return;
        }

        if let Err(e) = self.store.clear() {
            warn!("Failed to erase expired session: {e}");
        }
        info!("Session expired: {reason}");
        self.emit(&SessionEvent::Expired {
            reason: reason.to_string(),
        });
    }

    /// Sign out: erase both keys.
    pub fn end(&self) -> Result<(), StorageError> {
        self.store.clear()?;
        self.emit(&SessionEvent::LoggedOut);
        Ok(())
    }

    fn emit(&self, event: &SessionEvent) {
        if let Some(listener) = &self.listener {
            listener(event);
        }
    }
}

// ============================================================================
// Token Claims
// ============================================================================

#[derive(Deserialize)]
struct Claims {
    id: String,
    role: dash_common::AdminRole,
}

/// Read the admin identity from a JWT payload without verifying the signature.
/// The backend verifies tokens; this is only used for display.
#[must_use]
pub fn decode_identity(token: &str) -> Option<AdminIdentity> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Some(AdminIdentity {
        id: claims.id,
        role: claims.role,
    })
}
