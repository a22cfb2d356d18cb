use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::AuthPhase;

use crate::routes::Route;
use crate::store::{AuthState, Notices};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

#[component]
pub fn AuthView() -> Element {
    let auth = use_context::<AuthState>();
    let notices = use_context::<Notices>();
    let navigator = use_navigator();
    let mut mode = use_signal(|| AuthMode::SignIn);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    // Already signed in (or just became so): straight to the dashboard.
    let redirect = auth.clone();
    use_effect(move || {
        if matches!(redirect.phase(), AuthPhase::Authenticated(_)) {
            navigator.replace(Route::Dashboard {});
        }
    });

    let on_submit = {
        let auth = auth.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if busy() {
                return;
            }
            let address = email().trim().to_string();
            let secret = password();
            if address.is_empty() || secret.is_empty() {
                let mut notices = notices;
                notices.error("Email and password are required");
                return;
            }
            busy.set(true);
            let mut auth = auth.clone();
            let mut notices = notices;
            spawn(async move {
                let result = match mode() {
                    AuthMode::SignIn => auth.login(&address, &secret).await,
                    AuthMode::SignUp => auth.register(&address, &secret).await,
                };
                match result {
                    Ok(()) => {
                        notices.success(match mode() {
                            AuthMode::SignIn => "Logged in successfully",
                            AuthMode::SignUp => "Account created",
                        });
                        navigator.push(Route::Dashboard {});
                    }
                    Err(err) => notices.error(err.to_string()),
                }
                busy.set(false);
            });
        }
    };

    let heading = match mode() {
        AuthMode::SignIn => "Welcome back",
        AuthMode::SignUp => "Create account",
    };
    let subtitle = match mode() {
        AuthMode::SignIn => "Sign in to access your dashboard",
        AuthMode::SignUp => "Join Examsight to start",
    };
    let submit_label = match mode() {
        AuthMode::SignIn => "Sign in",
        AuthMode::SignUp => "Join now",
    };
    let footer_prompt = match mode() {
        AuthMode::SignIn => "New to Examsight?",
        AuthMode::SignUp => "Already a member?",
    };
    let toggle_label = match mode() {
        AuthMode::SignIn => "Sign up",
        AuthMode::SignUp => "Sign in",
    };

    rsx! {
        div { class: "page auth-page",
            div { class: "card auth-card",
                h1 { "{heading}" }
                p { class: "auth-subtitle", "{subtitle}" }

                form { class: "auth-form", onsubmit: on_submit,
                    label { class: "input-label", r#for: "email", "Email address" }
                    input {
                        id: "email",
                        class: "input",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email()}",
                        oninput: move |evt| email.set(evt.value()),
                    }

                    label { class: "input-label", r#for: "password", "Password" }
                    input {
                        id: "password",
                        class: "input",
                        r#type: "password",
                        placeholder: "••••••••",
                        value: "{password()}",
                        oninput: move |evt| password.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Please wait..." } else { "{submit_label}" }
                    }
                }

                p { class: "auth-footer",
                    "{footer_prompt} "
                    button {
                        class: "auth-toggle",
                        r#type: "button",
                        onclick: move |_| {
                            mode.set(match mode() {
                                AuthMode::SignIn => AuthMode::SignUp,
                                AuthMode::SignUp => AuthMode::SignIn,
                            });
                        },
                        "{toggle_label}"
                    }
                }
            }
        }
    }
}
