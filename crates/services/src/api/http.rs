use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::api::{AuthTokens, ExamApi, UploadFile};
use crate::auth::TokenCell;
use crate::error::ApiError;
use examsight_core::model::{
    AnalysisResult, AnswerSet, GeneratedPaper, SessionId, UploadOutcome, User,
};

/// Analyze/generate/answers sit on top of slow AI inference; two minutes is
/// the floor for a timeout that does not cut healthy requests short.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
struct SessionRequest<'a> {
    session_id: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// `ExamApi` over HTTP.
///
/// The bearer credential is read per request from the injected [`TokenCell`];
/// this client never writes to it.
pub struct HttpExamApi {
    http: reqwest::Client,
    base_url: String,
    token: TokenCell,
}

impl HttpExamApi {
    /// # Errors
    ///
    /// Returns the underlying error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, token: TokenCell) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn with_bearer(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        debug!(path, "dispatching request");
        let response = request.send().await.map_err(ApiError::Network)?;
        check_status(response).await
    }

    async fn post_session<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        session_id: &SessionId,
    ) -> Result<T, ApiError> {
        let request = self.with_bearer(self.http.post(self.url(path))).json(&SessionRequest {
            session_id: session_id.as_str(),
        });
        let response = self.send(path, request).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.with_bearer(self.http.get(self.url(path)));
        let response = self.send(path, request).await?;
        Ok(response.bytes().await.map_err(ApiError::Network)?.to_vec())
    }
}

/// Map non-success statuses onto the error taxonomy, surfacing the backend's
/// `detail` field verbatim when it is present.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .and_then(detail_text);

    Err(match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(
            detail.unwrap_or_else(|| "Your session has expired, please sign in again".to_string()),
        ),
        s if s.is_client_error() => ApiError::Validation(
            detail.unwrap_or_else(|| "The request could not be processed".to_string()),
        ),
        _ => ApiError::Server(detail.unwrap_or_else(|| "Something went wrong".to_string())),
    })
}

fn detail_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Null => None,
        // validation errors arrive as structured lists; stringify rather than drop
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl ExamApi for HttpExamApi {
    async fn register(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let request = self
            .http
            .post(self.url("/auth/register"))
            .json(&RegisterRequest { email, password });
        let response = self.send("/auth/register", request).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, ApiError> {
        let request = self
            .http
            .post(self.url("/auth/login"))
            .form(&[("username", email), ("password", password)]);
        let response = self.send("/auth/login", request).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    async fn me(&self) -> Result<User, ApiError> {
        let request = self.with_bearer(self.http.get(self.url("/auth/me")));
        let response = self.send("/auth/me", request).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    async fn upload(
        &self,
        files: Vec<UploadFile>,
        api_key: Option<&str>,
    ) -> Result<UploadOutcome, ApiError> {
        let mut form = Form::new();
        for file in files {
            form = form.part("files", Part::bytes(file.bytes).file_name(file.name));
        }
        if let Some(key) = api_key {
            form = form.text("api_key", key.to_string());
        }

        let request = self.with_bearer(self.http.post(self.url("/upload"))).multipart(form);
        let response = self.send("/upload", request).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    async fn analyze(&self, session_id: &SessionId) -> Result<AnalysisResult, ApiError> {
        self.post_session("/analyze", session_id).await
    }

    async fn generate_paper(&self, session_id: &SessionId) -> Result<GeneratedPaper, ApiError> {
        self.post_session("/generate", session_id).await
    }

    async fn get_answers(&self, session_id: &SessionId) -> Result<AnswerSet, ApiError> {
        self.post_session("/answers", session_id).await
    }

    async fn question_pdf(&self, session_id: &SessionId) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(&format!("/pdf/questions/{session_id}")).await
    }

    async fn answer_pdf(&self, session_id: &SessionId) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(&format!("/pdf/answers/{session_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpExamApi::new("http://localhost:8000/", TokenCell::default()).unwrap();
        assert_eq!(api.url("/auth/me"), "http://localhost:8000/auth/me");
    }

    #[test]
    fn string_detail_is_surfaced_verbatim() {
        let value = serde_json::json!("Incorrect email or password");
        assert_eq!(
            detail_text(value),
            Some("Incorrect email or password".to_string())
        );
    }

    #[test]
    fn structured_detail_is_stringified() {
        let value = serde_json::json!([{"loc": ["body", "session_id"], "msg": "field required"}]);
        let text = detail_text(value).unwrap();
        assert!(text.contains("field required"));
    }

    #[test]
    fn null_detail_falls_back() {
        assert_eq!(detail_text(serde_json::Value::Null), None);
    }
}
