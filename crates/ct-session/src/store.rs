use crate::{SessionError, SessionErrorResult};

use std::path::{Path, PathBuf};

use ct_core::{Session, User};
use log::{debug, warn};

/// Durable storage key for the bearer token (plain string).
const TOKEN_KEY: &str = "token";
/// Durable storage key for the JSON-serialized user profile.
const USER_KEY: &str = "user";

/// Key-per-file persistence adapter for the session.
///
/// Writes are synchronous and atomic at the granularity of a single key;
/// `load` treats a half-present pair as no session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Open a store rooted at `dir`. The directory is created lazily on
    /// the first save.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Persist both keys of the session.
    pub fn save(&self, session: &Session) -> SessionErrorResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| SessionError::store(&self.dir, e))?;

        let token_path = self.key_path(TOKEN_KEY);
        std::fs::write(&token_path, &session.token)
            .map_err(|e| SessionError::store(&token_path, e))?;

        let user_json = serde_json::to_vec(&session.user).map_err(SessionError::from_json)?;
        let user_path = self.key_path(USER_KEY);
        std::fs::write(&user_path, user_json).map_err(|e| SessionError::store(&user_path, e))?;

        debug!("session persisted to {}", self.dir.display());
        Ok(())
    }

    /// Rehydrate the persisted session, if a complete one exists.
    pub fn load(&self) -> Option<Session> {
        let token = std::fs::read_to_string(self.key_path(TOKEN_KEY)).ok()?;
        let user_bytes = std::fs::read(self.key_path(USER_KEY)).ok()?;
        let user: User = match serde_json::from_slice(&user_bytes) {
            Ok(user) => user,
            Err(e) => {
                warn!("discarding unreadable persisted user: {}", e);
                return None;
            }
        };

        Some(Session { token, user })
    }

    /// Remove both keys. Idempotent; missing keys are fine.
    pub fn clear(&self) -> SessionErrorResult<()> {
        for key in [TOKEN_KEY, USER_KEY] {
            let path = self.key_path(key);
            match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(SessionError::store(&path, e)),
            }
        }
        Ok(())
    }
}
