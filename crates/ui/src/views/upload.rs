use dioxus::prelude::*;
use dioxus_router::use_navigator;
use rfd::AsyncFileDialog;
use std::path::Path;

use services::UploadFile;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::{AuthState, Notices, WizardStore};
use crate::views::report_api_failure;
use crate::vm::format_size;

const MAX_FILES: usize = 10;
const ACCEPTED_EXTENSIONS: [&str; 5] = ["pdf", "jpg", "jpeg", "png", "webp"];

fn accepted(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PickedFile {
    name: String,
    bytes: Vec<u8>,
}

#[component]
pub fn UploadView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let mut wizard = use_context::<WizardStore>();
    let notices = use_context::<Notices>();
    let navigator = use_navigator();
    let mut files = use_signal(Vec::<PickedFile>::new);
    let busy = use_signal(|| false);
    let mut stage = use_signal(String::new);

    let on_add = move |_| {
        let mut notices = notices;
        spawn(async move {
            let Some(handles) = AsyncFileDialog::new()
                .add_filter("Question papers", &ACCEPTED_EXTENSIONS)
                .set_title("Select past question papers")
                .pick_files()
                .await
            else {
                return;
            };

            let mut added = 0usize;
            for handle in handles {
                if files.read().len() >= MAX_FILES {
                    notices.error("Only 10 papers can be analyzed at once");
                    break;
                }
                let name = handle.file_name();
                if !accepted(&name) {
                    notices.error(format!("{name}: only PDF and image files are accepted"));
                    continue;
                }
                let bytes = handle.read().await;
                files.with_mut(|list| list.push(PickedFile { name, bytes }));
                added += 1;
            }
            if added > 0 {
                notices.success(format!("{added} file(s) added"));
            }
        });
    };

    let on_analyze = {
        let api = ctx.api();
        let auth = auth.clone();
        move |_| {
            if busy() {
                return;
            }
            let picked = files();
            let mut notices = notices;
            if picked.is_empty() {
                notices.error("Please upload at least one question paper");
                return;
            }
            let api = api.clone();
            let mut auth = auth.clone();
            let mut busy = busy;
            spawn(async move {
                busy.set(true);
                stage.set("Extracting text from papers...".to_string());

                let uploads = picked
                    .into_iter()
                    .map(|file| UploadFile {
                        name: file.name,
                        bytes: file.bytes,
                    })
                    .collect();

                match api.upload(uploads, None).await {
                    Ok(outcome) => {
                        // fresh session: anything left over from a prior run is gone
                        wizard.start_session(outcome.session_id.clone());
                        stage.set("Analyzing question patterns...".to_string());

                        match api.analyze(&outcome.session_id).await {
                            Ok(analysis) => match wizard.set_analysis(analysis) {
                                Ok(()) => {
                                    auth.refresh().await;
                                    notices.success("Analysis complete");
                                    navigator.push(Route::Analysis {});
                                }
                                Err(err) => notices.error(err.to_string()),
                            },
                            Err(err) => report_api_failure(err, &mut auth, &mut notices).await,
                        }
                    }
                    Err(err) => report_api_failure(err, &mut auth, &mut notices).await,
                }

                busy.set(false);
                stage.set(String::new());
            });
        }
    };

    let picked = files();

    rsx! {
        div { class: "page upload-page",
            header { class: "view-header",
                h2 { class: "view-title", "Upload question papers" }
                p { class: "view-subtitle",
                    "Upload 1–10 past papers. Examsight analyzes their patterns and "
                    "generates a predicted paper with complete answers."
                }
            }

            div { class: "upload-grid",
                div { class: "upload-main",
                    button {
                        class: "dropzone",
                        r#type: "button",
                        disabled: picked.len() >= MAX_FILES,
                        onclick: on_add,
                        span { class: "dropzone-text", "Add papers" }
                        span { class: "dropzone-hint", "PDF, JPG, PNG or WebP · up to 10 files" }
                    }

                    if !picked.is_empty() {
                        div { class: "file-list",
                            div { class: "file-list-header",
                                span {
                                    if picked.len() == 1 { "1 file selected" } else { "{picked.len()} files selected" }
                                }
                                button {
                                    class: "btn-text",
                                    r#type: "button",
                                    onclick: move |_| files.set(Vec::new()),
                                    "Clear all"
                                }
                            }
                            for (index, file) in picked.iter().enumerate() {
                                div { class: "file-item",
                                    span { class: "file-name", "{file.name}" }
                                    span { class: "file-size", "{format_size(file.bytes.len())}" }
                                    button {
                                        class: "file-remove",
                                        r#type: "button",
                                        onclick: move |_| {
                                            files.with_mut(|list| {
                                                if index < list.len() {
                                                    list.remove(index);
                                                }
                                            });
                                        },
                                        "×"
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "upload-sidebar",
                    div { class: "card",
                        h3 { class: "sidebar-title", "Credit info" }
                        ul { class: "credit-info",
                            li { "1 credit per file when vision is needed" }
                            li { "1 credit per analysis" }
                        }
                        div { class: "divider" }
                        button {
                            class: "btn btn-primary btn-lg btn-block",
                            r#type: "button",
                            disabled: busy() || picked.is_empty(),
                            onclick: on_analyze,
                            if busy() { "Analyzing..." } else { "Analyze Papers" }
                        }
                        if busy() && !stage().is_empty() {
                            p { class: "loading-hint", "{stage()}" }
                        }
                    }
                }
            }
        }
    }
}
