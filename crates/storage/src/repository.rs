use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(String),

    #[error("storage state poisoned")]
    Poisoned,
}

/// Durable store for the bearer credential.
///
/// The client persists exactly one key. `load` returning `None` means no
/// credential is held; `clear` on an already-empty store succeeds.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    async fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the token cannot be written.
    async fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Forget the stored token.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be updated.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory token store for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl InMemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing token, as if persisted by a prior run.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        let token = self.token.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(token.clone())
    }

    async fn save(&self, token: &str) -> Result<(), StorageError> {
        let mut slot = self.token.lock().map_err(|_| StorageError::Poisoned)?;
        *slot = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut slot = self.token.lock().map_err(|_| StorageError::Poisoned)?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_round_trip() {
        let store = InMemoryTokenStore::new();
        assert_eq!(store.load().await.unwrap(), None);

        store.save("abc").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("abc".to_string()));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clear_on_empty_store_succeeds() {
        let store = InMemoryTokenStore::new();
        store.clear().await.unwrap();
    }
}
