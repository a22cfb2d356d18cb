use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::{AuthState, NoticeKind, Notices, WizardStore};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context_provider(|| AuthState::new(ctx.auth()));
    use_context_provider(WizardStore::new);
    use_context_provider(Notices::new);

    // Resolve the stored token before any guard decision is made.
    use_future(move || {
        let mut auth = auth.clone();
        async move { auth.initialize().await }
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Examsight" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                NoticeStack {}
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn NoticeStack() -> Element {
    let mut notices = use_context::<Notices>();
    let items = notices.items();

    rsx! {
        if !items.is_empty() {
            div { class: "notice-stack",
                for (index, notice) in items.iter().enumerate() {
                    div {
                        class: if notice.kind == NoticeKind::Error {
                            "notice notice--error"
                        } else {
                            "notice notice--success"
                        },
                        span { class: "notice-text", "{notice.text}" }
                        button {
                            class: "notice-dismiss",
                            r#type: "button",
                            onclick: move |_| notices.dismiss(index),
                            "×"
                        }
                    }
                }
            }
        }
    }
}
