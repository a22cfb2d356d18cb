//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors surfaced by `ExamApi` operations.
///
/// Display strings are shown to the user as-is, so backend `detail` text is
/// carried verbatim and the remaining variants fall back to neutral wording.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("could not reach the server, please try again")]
    Network(#[source] reqwest::Error),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Server(String),

    #[error("the server returned an unexpected response")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Whether the backend rejected the bearer credential.
    ///
    /// Callers use this to route the failure into the auth state machine;
    /// the API client itself never invalidates the token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while saving a downloaded PDF.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DownloadError {
    #[error("could not save the file: {0}")]
    Io(#[from] std::io::Error),
}
