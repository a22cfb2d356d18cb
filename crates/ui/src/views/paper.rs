use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::downloads;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::{AuthState, Notices, WizardStore};
use crate::views::{MissingArtifact, report_api_failure};
use crate::vm::marks_label;

#[component]
pub fn PaperView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let mut wizard = use_context::<WizardStore>();
    let notices = use_context::<Notices>();
    let navigator = use_navigator();
    let busy = use_signal(|| false);
    let downloading = use_signal(|| false);

    let snapshot = wizard.snapshot();
    let (Some(paper), Some(session_id)) =
        (snapshot.paper().cloned(), snapshot.session_id().cloned())
    else {
        return rsx! {
            MissingArtifact {
                title: "No generated paper",
                body: "There is no predicted paper for this session yet. \
                       Please upload your papers and run the analysis again.",
            }
        };
    };

    let on_download = {
        let api = ctx.api();
        let auth = auth.clone();
        let dir = ctx.downloads_dir().to_path_buf();
        let stem = downloads::pdf_file_stem(&paper.title);
        let session_id = session_id.clone();
        move |_| {
            if downloading() {
                return;
            }
            let api = api.clone();
            let mut auth = auth.clone();
            let mut notices = notices;
            let mut downloading = downloading;
            let dir = dir.clone();
            let stem = stem.clone();
            let session_id = session_id.clone();
            spawn(async move {
                downloading.set(true);
                match api.question_pdf(&session_id).await {
                    Ok(bytes) => match downloads::write_pdf(&dir, &stem, &bytes).await {
                        Ok(path) => notices.success(format!("Saved {}", path.display())),
                        Err(err) => notices.error(err.to_string()),
                    },
                    Err(err) => report_api_failure(err, &mut auth, &mut notices).await,
                }
                downloading.set(false);
            });
        }
    };

    let on_answers = {
        let api = ctx.api();
        let auth = auth.clone();
        move |_| {
            if busy() {
                return;
            }
            let api = api.clone();
            let mut auth = auth.clone();
            let mut notices = notices;
            let mut busy = busy;
            let session_id = session_id.clone();
            spawn(async move {
                busy.set(true);
                match api.get_answers(&session_id).await {
                    Ok(answers) => match wizard.set_answers(answers) {
                        Ok(()) => {
                            auth.refresh().await;
                            notices.success("Answers generated");
                            navigator.push(Route::Answers {});
                        }
                        Err(err) => notices.error(err.to_string()),
                    },
                    Err(err) => report_api_failure(err, &mut auth, &mut notices).await,
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        div { class: "page paper-page",
            header { class: "view-header",
                h2 { class: "view-title", "Predicted question paper" }
                p { class: "view-subtitle",
                    "Generated from the pattern analysis. Review and download below."
                }
                div { class: "view-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: downloading(),
                        onclick: on_download,
                        if downloading() { "Downloading..." } else { "Download PDF" }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: busy(),
                        onclick: on_answers,
                        if busy() { "Generating answers..." } else { "Get answers" }
                    }
                }
            }

            div { class: "question-paper",
                div { class: "paper-title-block",
                    h1 { class: "paper-title", "{paper.title}" }
                    p { class: "paper-subject", "{paper.subject}" }
                    p { class: "paper-meta",
                        span { "Total marks: " strong { "{paper.total_marks}" } }
                        span { class: "meta-divider" }
                        span { "Duration: " strong { "{paper.duration}" } }
                    }
                }

                if !paper.general_instructions.is_empty() {
                    div { class: "paper-instructions",
                        h4 { "General instructions" }
                        ol {
                            for instruction in paper.general_instructions.iter() {
                                li { "{instruction}" }
                            }
                        }
                    }
                }

                for section in paper.sections.iter() {
                    div { class: "paper-section",
                        div { class: "section-header-bar",
                            span { class: "section-name", "{section.name}" }
                            span { class: "section-marks", "{section.total_marks} marks" }
                        }
                        if !section.instructions.is_empty() {
                            p { class: "section-instructions", "{section.instructions}" }
                        }
                        div { class: "questions-list",
                            for question in section.questions.iter() {
                                div { class: "question-item",
                                    span { class: "question-number", "Q{question.number}." }
                                    div { class: "question-body",
                                        p { class: "question-text", "{question.question}" }
                                        p { class: "question-meta",
                                            span { class: "question-topic", "{question.topic}" }
                                            span { class: "question-marks",
                                                "[{marks_label(question.marks)}]"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                p { class: "paper-footer", "— End of question paper —" }
            }
        }
    }
}
