use crate::{SessionErrorResult, SessionStore};

use ct_client::ApiClient;
use ct_core::{NewAccount, Session, User};
use log::info;

/// Holds the current-user state and keeps the durable copy in sync.
///
/// An explicit, dependency-injected object: construct it with `open`,
/// call `init` once at startup to rehydrate from storage, and pass it to
/// whichever component needs to gate on the session or borrow the token.
/// There is no intermediate loading state; callers track their own
/// in-flight flags.
pub struct SessionManager {
    api: ApiClient,
    store: SessionStore,
    current: Option<Session>,
}

impl SessionManager {
    pub fn open(api: ApiClient, store: SessionStore) -> Self {
        Self {
            api,
            store,
            current: None,
        }
    }

    /// Rehydrate the in-memory copy from durable storage.
    pub fn init(&mut self) {
        self.current = self.store.load();
        if let Some(ref session) = self.current {
            info!("restored session for {}", session.user.username);
        }
    }

    /// Log in and store token + user in memory and durable storage.
    ///
    /// On failure neither copy is touched and the backend's message
    /// propagates to the caller. No retry, no token refresh.
    pub async fn login(&mut self, email: &str, password: &str) -> SessionErrorResult<&User> {
        let session = self.api.login(email, password).await?;
        self.install(session)
    }

    /// Same contract as login, for account creation.
    pub async fn register(&mut self, account: &NewAccount) -> SessionErrorResult<&User> {
        let session = self.api.register(account).await?;
        self.install(session)
    }

    /// Clear both the in-memory and durable copies unconditionally.
    /// Idempotent.
    pub fn logout(&mut self) -> SessionErrorResult<()> {
        self.current = None;
        self.store.clear()?;
        info!("logged out");
        Ok(())
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn install(&mut self, session: Session) -> SessionErrorResult<&User> {
        self.store.save(&session)?;
        let session = self.current.insert(session);
        info!("session established for {}", session.user.username);
        Ok(&session.user)
    }
}
