mod analysis;
mod answers;
mod auth;
mod landing;
mod missing;
mod paper;
mod upload;

pub use analysis::AnalysisView;
pub use answers::AnswersView;
pub use auth::AuthView;
pub use landing::LandingView;
pub use paper::PaperView;
pub use upload::UploadView;

pub(crate) use missing::MissingArtifact;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

use services::ApiError;

use crate::store::{AuthState, Notices};

/// Shared failure policy for protected calls: surface the message, and on a
/// rejected credential drop it so the route guard redirects on next render.
/// State the action was updating is left untouched either way.
pub(crate) async fn report_api_failure(err: ApiError, auth: &mut AuthState, notices: &mut Notices) {
    let expired = err.is_unauthorized();
    notices.error(err.to_string());
    if expired {
        auth.expire_session().await;
    }
}
