use serde::{Deserialize, Serialize};

/// The authenticated account as reported by the backend.
///
/// `credits_used` is server-side truth; the client only ever replaces it
/// wholesale with a fresh `/auth/me` response, never adjusts it locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub credits_used: u32,
}
