use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

/// Fallback for a view whose artifact is unexpectedly absent, e.g. after a
/// deep link or a reload. Always offers the path back to step 1.
#[component]
pub fn MissingArtifact(title: String, body: String) -> Element {
    rsx! {
        div { class: "page missing-page",
            div { class: "card missing-card",
                h2 { "{title}" }
                p { "{body}" }
                Link { to: Route::Dashboard {}, class: "btn btn-primary", "Back to upload" }
            }
        }
    }
}
