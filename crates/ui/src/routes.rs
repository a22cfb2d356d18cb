use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};

use examsight_core::model::Step;
use services::AuthPhase;

use crate::store::{AuthState, Notices, WizardStore};
use crate::views::{AnalysisView, AnswersView, AuthView, LandingView, PaperView, UploadView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LandingView)] Landing {},
    #[route("/auth", AuthView)] SignIn {},
    #[layout(ProtectedShell)]
        #[route("/dashboard", UploadView)] Dashboard {},
        #[route("/analysis", AnalysisView)] Analysis {},
        #[route("/paper", PaperView)] Paper {},
        #[route("/answers", AnswersView)] Answers {},
}

/// Gate around the wizard views.
///
/// While the stored token is still being resolved nothing protected is
/// rendered; once the phase settles, anonymous visitors are replace-navigated
/// to the sign-in view (itself reachable anonymously, so no redirect loop).
#[component]
fn ProtectedShell() -> Element {
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();

    let guard = auth.clone();
    use_effect(move || {
        if guard.phase() == AuthPhase::Anonymous {
            navigator.replace(Route::SignIn {});
        }
    });

    match auth.phase() {
        AuthPhase::Authenticated(_) => rsx! {
            div { class: "app-shell",
                Navbar {}
                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        },
        // still resolving, or about to redirect: keep the frame neutral
        AuthPhase::Loading | AuthPhase::Anonymous => rsx! {
            div { class: "app-shell app-shell--resolving" }
        },
    }
}

#[component]
fn Navbar() -> Element {
    let auth = use_context::<AuthState>();
    let wizard = use_context::<WizardStore>();
    let notices = use_context::<Notices>();
    let current_route = use_route::<Route>();

    let steps = [
        (Route::Dashboard {}, "Upload", Step::Upload),
        (Route::Analysis {}, "Analysis", Step::Analysis),
        (Route::Paper {}, "Paper", Step::Paper),
        (Route::Answers {}, "Answers", Step::Answers),
    ];
    let current_step = wizard.current_step();
    let user = auth.user();

    let on_logout = {
        let auth = auth.clone();
        move |_| {
            let mut auth = auth.clone();
            let mut wizard = wizard;
            let mut notices = notices;
            spawn(async move {
                auth.logout().await;
                // artifacts must not leak into the next account's session
                wizard.reset();
                notices.success("Logged out successfully");
            });
        }
    };

    rsx! {
        nav { class: "navbar",
            Link { to: Route::Dashboard {}, class: "navbar-brand",
                span { class: "brand-mark", "Ex" }
                span { class: "brand-name", "Examsight" }
            }

            div { class: "navbar-steps",
                for (route, label, step) in steps {
                    {
                        let is_active = current_route == route;
                        let is_completed = current_step > step;
                        let is_accessible = current_step >= step;
                        let class = format!(
                            "nav-step{}{}",
                            if is_active { " nav-step--active" } else { "" },
                            if is_completed { " nav-step--completed" } else { "" },
                        );
                        rsx! {
                            if is_accessible {
                                Link { to: route, class: "{class}",
                                    span { class: "nav-step-number", "{step.number()}" }
                                    span { class: "nav-step-label", "{label}" }
                                }
                            } else {
                                span { class: "nav-step nav-step--locked",
                                    span { class: "nav-step-number", "{step.number()}" }
                                    span { class: "nav-step-label", "{label}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "navbar-right",
                if let Some(user) = user {
                    span { class: "user-credits", "{user.credits_used} credits used" }
                    span { class: "user-email", "{user.email}" }
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: on_logout,
                    "Sign out"
                }
            }
        }
    }
}
