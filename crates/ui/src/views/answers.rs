use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use services::downloads;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::{AuthState, Notices, WizardStore};
use crate::views::{MissingArtifact, report_api_failure};
use crate::vm::marks_label;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PdfKind {
    Questions,
    Answers,
}

#[component]
pub fn AnswersView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let wizard = use_context::<WizardStore>();
    let notices = use_context::<Notices>();
    let downloading = use_signal(|| None::<PdfKind>);

    let snapshot = wizard.snapshot();
    let (Some(answers), Some(session_id)) =
        (snapshot.answers().cloned(), snapshot.session_id().cloned())
    else {
        return rsx! {
            MissingArtifact {
                title: "No answers yet",
                body: "There is no answer key for this session. \
                       Please upload your papers and work through the steps again.",
            }
        };
    };

    let download = {
        let api = ctx.api();
        let auth = auth.clone();
        let dir = ctx.downloads_dir().to_path_buf();
        let title = answers.title.clone();
        move |kind: PdfKind| {
            if downloading().is_some() {
                return;
            }
            let api = api.clone();
            let mut auth = auth.clone();
            let mut notices = notices;
            let mut downloading = downloading;
            let dir = dir.clone();
            let session_id = session_id.clone();
            let stem = match kind {
                PdfKind::Questions => downloads::pdf_file_stem(&title),
                PdfKind::Answers => format!("{}_Answers", downloads::pdf_file_stem(&title)),
            };
            spawn(async move {
                downloading.set(Some(kind));
                let fetched = match kind {
                    PdfKind::Questions => api.question_pdf(&session_id).await,
                    PdfKind::Answers => api.answer_pdf(&session_id).await,
                };
                match fetched {
                    Ok(bytes) => match downloads::write_pdf(&dir, &stem, &bytes).await {
                        Ok(path) => notices.success(format!("Saved {}", path.display())),
                        Err(err) => notices.error(err.to_string()),
                    },
                    Err(err) => report_api_failure(err, &mut auth, &mut notices).await,
                }
                downloading.set(None);
            });
        }
    };

    let mut download_questions = download.clone();
    let mut download_answers = download;
    let total = answers.total_marks();
    let count = answers.answered_questions.len();

    rsx! {
        div { class: "page answers-page",
            header { class: "view-header",
                h2 { class: "view-title", "Questions & answers" }
                p { class: "view-subtitle",
                    "{count} questions answered — {total} total marks"
                }
                div { class: "view-actions",
                    Link { to: Route::Paper {}, class: "btn btn-secondary", "Back to paper" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: downloading().is_some(),
                        onclick: move |_| download_questions(PdfKind::Questions),
                        if downloading() == Some(PdfKind::Questions) { "Downloading..." } else { "Download question paper" }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: downloading().is_some(),
                        onclick: move |_| download_answers(PdfKind::Answers),
                        if downloading() == Some(PdfKind::Answers) { "Downloading..." } else { "Download Q&A PDF" }
                    }
                }
            }

            div { class: "completion-banner",
                strong { "Complete answer key ready" }
                p { "All {count} questions answered with mark-appropriate detail" }
            }

            div { class: "answers-list",
                for item in answers.answered_questions.iter() {
                    div { class: "answer-card",
                        div { class: "answer-card-header",
                            span { class: "answer-number", "Q{item.number}" }
                            div { class: "answer-question-info",
                                p { class: "answer-question", "{item.question}" }
                                p { class: "answer-meta",
                                    span { class: "answer-section", "Section {item.section}" }
                                    span { class: "answer-marks", "{marks_label(item.marks)}" }
                                }
                            }
                        }
                        div { class: "answer-body",
                            span { class: "answer-label", "Answer" }
                            for line in item.answer.lines().filter(|line| !line.trim().is_empty()) {
                                p { class: "answer-line", "{line}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
