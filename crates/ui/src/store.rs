//! Reactive stores provided to the view tree.
//!
//! All mutation is routed through the named operations here; views never
//! write a field directly. The pure rules live in `examsight-core`, these
//! wrappers only bind them to signals.

use dioxus::prelude::*;
use std::sync::Arc;

use examsight_core::model::{
    AnalysisResult, AnswerSet, GeneratedPaper, SessionId, Step, User, WizardError, WizardState,
};
use services::{AuthError, AuthPhase, AuthService};

//
// ─── AUTH ──────────────────────────────────────────────────────────────────────
//

/// Signal-backed view of the auth state machine.
///
/// Every transition delegates to [`AuthService`] and then publishes the
/// resulting phase, so the machine's invariants hold no matter which view
/// triggered the change.
#[derive(Clone)]
pub struct AuthState {
    service: Arc<AuthService>,
    phase: Signal<AuthPhase>,
}

impl AuthState {
    #[must_use]
    pub fn new(service: Arc<AuthService>) -> Self {
        Self {
            service,
            phase: Signal::new(AuthPhase::Loading),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_phase(service: Arc<AuthService>, phase: AuthPhase) -> Self {
        Self {
            service,
            phase: Signal::new(phase),
        }
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        (self.phase)()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        match self.phase() {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Resolve the stored token into an initial phase. Run once at startup.
    pub async fn initialize(&mut self) {
        let next = self.service.initialize().await;
        self.phase.set(next);
    }

    /// # Errors
    ///
    /// Returns `AuthError` with the backend's message when the credentials
    /// are rejected; the phase stays `Anonymous` in that case.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        match self.service.login(email, password).await {
            Ok(user) => {
                self.phase.set(AuthPhase::Authenticated(user));
                Ok(())
            }
            Err(err) => {
                self.phase.set(AuthPhase::Anonymous);
                Err(err)
            }
        }
    }

    /// # Errors
    ///
    /// Returns `AuthError` when registration or the implicit follow-up login
    /// fails; no partial state is retained.
    pub async fn register(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        match self.service.register(email, password).await {
            Ok(user) => {
                self.phase.set(AuthPhase::Authenticated(user));
                Ok(())
            }
            Err(err) => {
                self.phase.set(AuthPhase::Anonymous);
                Err(err)
            }
        }
    }

    pub async fn logout(&mut self) {
        self.service.logout().await;
        self.phase.set(AuthPhase::Anonymous);
    }

    /// Re-fetch the user after any credit-consuming call.
    pub async fn refresh(&mut self) {
        let next = self.service.refresh().await;
        self.phase.set(next);
    }

    /// A protected call came back unauthorized: drop the credential and let
    /// the route guard redirect on the next render.
    pub async fn expire_session(&mut self) {
        self.service.logout().await;
        self.phase.set(AuthPhase::Anonymous);
    }
}

//
// ─── WIZARD ────────────────────────────────────────────────────────────────────
//

/// Signal wrapper around the wizard record.
///
/// A rejected cross-session artifact resets the whole record: stale state
/// always lands the user back on step 1 instead of surviving half-updated.
#[derive(Clone, Copy)]
pub struct WizardStore {
    state: Signal<WizardState>,
}

impl WizardStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Signal::new(WizardState::default()),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_state(state: WizardState) -> Self {
        Self {
            state: Signal::new(state),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> WizardState {
        (self.state)()
    }

    #[must_use]
    pub fn current_step(&self) -> Step {
        self.state.read().current_step()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.state.read().session_id().cloned()
    }

    pub fn start_session(&mut self, session_id: SessionId) {
        self.state.with_mut(|state| state.start_session(session_id));
    }

    /// # Errors
    ///
    /// Returns `WizardError` when the artifact belongs to another session;
    /// the record has already been reset by the time the error is returned.
    pub fn set_analysis(&mut self, analysis: AnalysisResult) -> Result<(), WizardError> {
        self.apply(|state| state.set_analysis(analysis))
    }

    /// # Errors
    ///
    /// Same contract as [`WizardStore::set_analysis`].
    pub fn set_paper(&mut self, paper: GeneratedPaper) -> Result<(), WizardError> {
        self.apply(|state| state.set_paper(paper))
    }

    /// # Errors
    ///
    /// Same contract as [`WizardStore::set_analysis`].
    pub fn set_answers(&mut self, answers: AnswerSet) -> Result<(), WizardError> {
        self.apply(|state| state.set_answers(answers))
    }

    pub fn reset(&mut self) {
        self.state.with_mut(WizardState::reset);
    }

    fn apply(
        &mut self,
        op: impl FnOnce(&mut WizardState) -> Result<(), WizardError>,
    ) -> Result<(), WizardError> {
        let result = self.state.with_mut(op);
        if result.is_err() {
            self.state.with_mut(WizardState::reset);
        }
        result
    }
}

impl Default for WizardStore {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── NOTICES ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Dismissible toast queue, capped so it never grows unbounded.
#[derive(Clone, Copy)]
pub struct Notices {
    items: Signal<Vec<Notice>>,
}

const MAX_NOTICES: usize = 4;

impl Notices {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn items(&self) -> Vec<Notice> {
        (self.items)()
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&mut self, index: usize) {
        self.items.with_mut(|items| {
            if index < items.len() {
                items.remove(index);
            }
        });
    }

    fn push(&mut self, kind: NoticeKind, text: String) {
        self.items.with_mut(|items| {
            items.push(Notice { kind, text });
            if items.len() > MAX_NOTICES {
                items.remove(0);
            }
        });
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}
