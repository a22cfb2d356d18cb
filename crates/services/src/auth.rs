use std::sync::{Arc, RwLock};
use tracing::warn;

use crate::api::ExamApi;
use crate::error::AuthError;
use examsight_core::model::User;
use storage::repository::TokenStore;

//
// ─── TOKEN CELL ────────────────────────────────────────────────────────────────
//

/// Shared slot holding the in-memory copy of the bearer credential.
///
/// Every authenticated request reads it; only `AuthService` writes it, which
/// keeps the token lifecycle serialized through the auth state machine.
#[derive(Clone, Default)]
pub struct TokenCell {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenCell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> Option<String> {
        match self.token.read() {
            Ok(token) => token.clone(),
            Err(_) => None,
        }
    }

    pub(crate) fn set(&self, token: String) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token);
        }
    }

    pub(crate) fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

//
// ─── AUTH STATE MACHINE ────────────────────────────────────────────────────────
//

/// Resolved authentication status.
///
/// `Loading` only exists between startup and the first stored-token check;
/// every transition out of it lands on one of the other two states.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    Loading,
    Authenticated(User),
    Anonymous,
}

impl AuthPhase {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Single source of truth for "who is logged in".
///
/// Holding a token is necessary but not sufficient: the user fetch must
/// succeed, and a failed fetch clears the durable store and the in-memory
/// cell together so no half-authenticated state can survive.
pub struct AuthService {
    api: Arc<dyn ExamApi>,
    store: Arc<dyn TokenStore>,
    token: TokenCell,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn ExamApi>, store: Arc<dyn TokenStore>, token: TokenCell) -> Self {
        Self { api, store, token }
    }

    /// Resolve the startup state from the stored token.
    ///
    /// No stored token resolves straight to `Anonymous`; a stored token is
    /// verified against `/auth/me` and discarded if rejected.
    pub async fn initialize(&self) -> AuthPhase {
        match self.store.load().await {
            Ok(Some(token)) => {
                self.token.set(token);
                self.verify().await
            }
            Ok(None) => AuthPhase::Anonymous,
            Err(err) => {
                warn!(%err, "could not read stored token");
                AuthPhase::Anonymous
            }
        }
    }

    /// Exchange credentials for a token and load the user behind it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` on rejected credentials, storage failure, or a
    /// failed user fetch; in every failure case no token is retained.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let tokens = self.api.login(email, password).await?;
        self.token.set(tokens.access_token.clone());
        if let Err(err) = self.store.save(&tokens.access_token).await {
            self.token.clear();
            return Err(err.into());
        }
        match self.api.me().await {
            Ok(user) => Ok(user),
            Err(err) => {
                self.discard_token().await;
                Err(err.into())
            }
        }
    }

    /// Create an account, then log in with the same credentials.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if registration or the follow-up login fails; a
    /// failed follow-up retains no partial state.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.api.register(email, password).await?;
        self.login(email, password).await
    }

    /// Forget the credential everywhere. Cannot fail; a store that was
    /// already empty counts as cleared.
    pub async fn logout(&self) {
        self.token.clear();
        if let Err(err) = self.store.clear().await {
            warn!(%err, "could not clear stored token");
        }
    }

    /// Re-fetch the user so server-side usage accounting stays visible.
    ///
    /// Behaves like the startup check on failure: token discarded, state
    /// resolves to `Anonymous`.
    pub async fn refresh(&self) -> AuthPhase {
        if self.token.get().is_none() {
            return AuthPhase::Anonymous;
        }
        self.verify().await
    }

    /// Access to the shared credential slot, for wiring the HTTP client.
    #[must_use]
    pub fn token_cell(&self) -> TokenCell {
        self.token.clone()
    }

    async fn verify(&self) -> AuthPhase {
        match self.api.me().await {
            Ok(user) => AuthPhase::Authenticated(user),
            Err(err) => {
                warn!(%err, "token rejected, signing out");
                self.discard_token().await;
                AuthPhase::Anonymous
            }
        }
    }

    async fn discard_token(&self) {
        self.token.clear();
        if let Err(err) = self.store.clear().await {
            warn!(%err, "could not clear stored token");
        }
    }
}
