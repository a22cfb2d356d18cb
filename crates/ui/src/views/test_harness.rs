use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use examsight_core::model::{
    AnalysisResult, AnswerSet, AnsweredQuestion, GeneratedPaper, PaperQuestion, PaperSection,
    SessionId, TopicFrequency, UploadOutcome, User, WizardState,
};
use services::{ApiError, AuthPhase, AuthService, AuthTokens, ExamApi, TokenCell, UploadFile};
use storage::repository::InMemoryTokenStore;

use crate::context::{UiApp, build_app_context};
use crate::store::{AuthState, Notices, WizardStore};
use crate::views::{AnalysisView, AnswersView, PaperView, UploadView};

/// Backend stub for render-only tests; every call fails loudly so a smoke
/// test that accidentally hits the network is caught.
struct StubApi;

fn not_scripted() -> ApiError {
    ApiError::Server("not scripted".to_string())
}

#[async_trait]
impl ExamApi for StubApi {
    async fn register(&self, _email: &str, _password: &str) -> Result<User, ApiError> {
        Err(not_scripted())
    }

    async fn login(&self, _email: &str, _password: &str) -> Result<AuthTokens, ApiError> {
        Err(not_scripted())
    }

    async fn me(&self) -> Result<User, ApiError> {
        Err(not_scripted())
    }

    async fn upload(
        &self,
        _files: Vec<UploadFile>,
        _api_key: Option<&str>,
    ) -> Result<UploadOutcome, ApiError> {
        Err(not_scripted())
    }

    async fn analyze(&self, _session_id: &SessionId) -> Result<AnalysisResult, ApiError> {
        Err(not_scripted())
    }

    async fn generate_paper(&self, _session_id: &SessionId) -> Result<GeneratedPaper, ApiError> {
        Err(not_scripted())
    }

    async fn get_answers(&self, _session_id: &SessionId) -> Result<AnswerSet, ApiError> {
        Err(not_scripted())
    }

    async fn question_pdf(&self, _session_id: &SessionId) -> Result<Vec<u8>, ApiError> {
        Err(not_scripted())
    }

    async fn answer_pdf(&self, _session_id: &SessionId) -> Result<Vec<u8>, ApiError> {
        Err(not_scripted())
    }
}

struct TestApp {
    auth: Arc<AuthService>,
    api: Arc<dyn ExamApi>,
    downloads_dir: PathBuf,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn api(&self) -> Arc<dyn ExamApi> {
        Arc::clone(&self.api)
    }

    fn downloads_dir(&self) -> PathBuf {
        self.downloads_dir.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Upload,
    Analysis,
    Paper,
    Answers,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    view: ViewKind,
    phase: AuthPhase,
    wizard: WizardState,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let api: Arc<dyn ExamApi> = Arc::new(StubApi);
    let cell = TokenCell::new();
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&api),
        Arc::new(InMemoryTokenStore::new()),
        cell,
    ));
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        auth: Arc::clone(&auth_service),
        api,
        downloads_dir: std::env::temp_dir(),
    });

    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| AuthState::with_phase(auth_service, props.phase.clone()));
    use_context_provider(|| WizardStore::with_state(props.wizard.clone()));
    use_context_provider(Notices::new);
    use_context_provider(|| props.view);

    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Upload => rsx! { UploadView {} },
        ViewKind::Analysis => rsx! { AnalysisView {} },
        ViewKind::Paper => rsx! { PaperView {} },
        ViewKind::Answers => rsx! { AnswersView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, phase: AuthPhase, wizard: WizardState) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            view,
            phase,
            wizard,
        },
    );
    ViewHarness { dom }
}

//
// ─── SAMPLE DATA ───────────────────────────────────────────────────────────────
//

pub fn sample_user() -> User {
    User {
        id: 1,
        email: "student@example.com".to_string(),
        credits_used: 4,
    }
}

pub fn sample_analysis(session: &str) -> AnalysisResult {
    AnalysisResult {
        session_id: SessionId::new(session),
        total_questions: 15,
        topics: vec![
            TopicFrequency {
                topic: "Mechanics".to_string(),
                count: 12,
                years: vec!["2021".to_string(), "2023".to_string()],
                percentage: 80.0,
            },
            TopicFrequency {
                topic: "Optics".to_string(),
                count: 3,
                years: vec!["2023".to_string()],
                percentage: 20.0,
            },
        ],
        year_distribution: BTreeMap::from([("2021".to_string(), 7), ("2023".to_string(), 8)]),
        predicted_topics: vec!["Rotational motion".to_string()],
        pattern_insights: vec!["Five-mark questions favour derivations".to_string()],
        all_questions: Vec::new(),
    }
}

pub fn sample_paper(session: &str) -> GeneratedPaper {
    GeneratedPaper {
        session_id: SessionId::new(session),
        title: "Physics Predicted Paper".to_string(),
        subject: "Physics".to_string(),
        total_marks: 70,
        duration: "3 hours".to_string(),
        general_instructions: vec!["All questions are compulsory.".to_string()],
        sections: vec![PaperSection {
            name: "Section A".to_string(),
            instructions: "Answer in one sentence.".to_string(),
            questions: vec![PaperQuestion {
                number: 1,
                question: "State the work-energy theorem.".to_string(),
                marks: 1,
                section: "A".to_string(),
                topic: "Mechanics".to_string(),
            }],
            total_marks: 1,
        }],
    }
}

pub fn sample_answers(session: &str) -> AnswerSet {
    AnswerSet {
        session_id: SessionId::new(session),
        title: "Physics Predicted Paper".to_string(),
        answered_questions: vec![AnsweredQuestion {
            number: 1,
            question: "State the work-energy theorem.".to_string(),
            marks: 1,
            section: "A".to_string(),
            answer: "Net work done on a body equals its change in kinetic energy.".to_string(),
        }],
    }
}

pub fn wizard_with_analysis(session: &str) -> WizardState {
    let mut state = WizardState::default();
    state.start_session(SessionId::new(session));
    state
        .set_analysis(sample_analysis(session))
        .expect("matching session");
    state
}

pub fn wizard_with_paper(session: &str) -> WizardState {
    let mut state = wizard_with_analysis(session);
    state.set_paper(sample_paper(session)).expect("matching session");
    state
}

pub fn wizard_with_answers(session: &str) -> WizardState {
    let mut state = wizard_with_paper(session);
    state
        .set_answers(sample_answers(session))
        .expect("matching session");
    state
}
