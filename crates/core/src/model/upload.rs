use serde::{Deserialize, Serialize};

use crate::model::ids::SessionId;

/// Result of uploading a batch of question papers.
///
/// Creates the session that scopes every later analyze/generate/answers/pdf
/// call. The extracted text is returned for completeness but the client does
/// not render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadOutcome {
    pub session_id: SessionId,
    pub files_processed: u32,
    pub extracted_text: Vec<String>,
    pub credits_used: u32,
    pub message: String,
}
