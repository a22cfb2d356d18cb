#![forbid(unsafe_code)]

pub mod api;
pub mod auth;
pub mod downloads;
pub mod error;

pub use api::{AuthTokens, ExamApi, HttpExamApi, UploadFile};
pub use auth::{AuthPhase, AuthService, TokenCell};
pub use error::{ApiError, AuthError, DownloadError};
