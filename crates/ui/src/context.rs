use std::path::{Path, PathBuf};
use std::sync::Arc;

use services::{AuthService, ExamApi};

/// What the composition root must provide to the view tree.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn api(&self) -> Arc<dyn ExamApi>;
    fn downloads_dir(&self) -> PathBuf;
}

#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    api: Arc<dyn ExamApi>,
    downloads_dir: PathBuf,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            api: app.api(),
            downloads_dir: app.downloads_dir(),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn ExamApi> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
