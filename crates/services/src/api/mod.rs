mod http;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ApiError;
use examsight_core::model::{
    AnalysisResult, AnswerSet, GeneratedPaper, SessionId, UploadOutcome, User,
};

pub use http::HttpExamApi;

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub token_type: String,
}

/// One file selected for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// One operation per backend capability.
///
/// Implementations attach the current bearer credential where one is held;
/// they never retry and never invalidate it — a 401 is reported as
/// `ApiError::Unauthorized` and the auth layer decides what to do.
#[async_trait]
pub trait ExamApi: Send + Sync {
    /// Create an account. The backend responds with the new user record.
    async fn register(&self, email: &str, password: &str) -> Result<User, ApiError>;

    /// Exchange credentials for a bearer token (form-encoded, OAuth2 style).
    async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, ApiError>;

    /// Fetch the account behind the current bearer token.
    async fn me(&self) -> Result<User, ApiError>;

    /// Upload question papers; opens the session scoping all later calls.
    async fn upload(
        &self,
        files: Vec<UploadFile>,
        api_key: Option<&str>,
    ) -> Result<UploadOutcome, ApiError>;

    /// Run pattern analysis over the session's uploaded papers.
    async fn analyze(&self, session_id: &SessionId) -> Result<AnalysisResult, ApiError>;

    /// Generate the predicted question paper.
    async fn generate_paper(&self, session_id: &SessionId) -> Result<GeneratedPaper, ApiError>;

    /// Generate answers for the predicted paper.
    async fn get_answers(&self, session_id: &SessionId) -> Result<AnswerSet, ApiError>;

    /// Download the question paper PDF as raw bytes.
    async fn question_pdf(&self, session_id: &SessionId) -> Result<Vec<u8>, ApiError>;

    /// Download the answers PDF as raw bytes.
    async fn answer_pdf(&self, session_id: &SessionId) -> Result<Vec<u8>, ApiError>;
}
