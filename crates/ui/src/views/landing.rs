use dioxus::prelude::*;
use dioxus_router::Link;

use services::AuthPhase;

use crate::routes::Route;
use crate::store::AuthState;

#[component]
pub fn LandingView() -> Element {
    let auth = use_context::<AuthState>();
    let signed_in = matches!(auth.phase(), AuthPhase::Authenticated(_));

    rsx! {
        div { class: "page landing-page",
            div { class: "landing-hero",
                h1 {
                    "Predict your "
                    span { class: "gradient-text", "next exam paper" }
                }
                p { class: "hero-subtitle",
                    "Upload past question papers. Examsight analyzes their patterns, "
                    "generates a predicted paper, and writes out complete answers."
                }
                if signed_in {
                    Link { to: Route::Dashboard {}, class: "btn btn-primary btn-lg", "Open dashboard" }
                } else {
                    Link { to: Route::SignIn {}, class: "btn btn-primary btn-lg", "Sign in to start" }
                }
            }
            div { class: "landing-steps",
                div { class: "card landing-step",
                    h3 { "1. Upload" }
                    p { "Up to ten past papers, PDF or photos." }
                }
                div { class: "card landing-step",
                    h3 { "2. Analyze" }
                    p { "Topic frequencies, year trends, and predicted topics." }
                }
                div { class: "card landing-step",
                    h3 { "3. Paper" }
                    p { "A full predicted question paper, ready to download." }
                }
                div { class: "card landing-step",
                    h3 { "4. Answers" }
                    p { "Mark-appropriate answers for every question." }
                }
            }
        }
    }
}
