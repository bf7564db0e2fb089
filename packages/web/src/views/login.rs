//! Login page view with an email/password form.

use dioxus::prelude::*;
use health::validation::validate_login;
use ui::components::{Button, ErrorBanner, FormField};
use ui::{redirect_to, use_auth, AuthState};

/// Login page component. A signed-in user is sent to their role dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if let Some(role) = auth().role() {
            redirect_to(role.dashboard_route());
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if let Err(err) = validate_login(&e, &p) {
                error.set(Some(err.to_string()));
                return;
            }

            loading.set(true);
            match api::login(e, p).await {
                Ok(user) => {
                    let route = user.role.dashboard_route();
                    auth.set(AuthState::signed_in(user));
                    redirect_to(route);
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "HyperWatch" }
                p { class: "auth-subtitle", "Sign in to your health dashboard" }

                form {
                    onsubmit: handle_login,
                    class: "auth-form",

                    if let Some(message) = error() {
                        ErrorBanner { message }
                    }

                    FormField {
                        id: "login-email",
                        label: "Email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FormField {
                        id: "login-password",
                        label: "Password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Don't have an account? "
                    Link { to: "/register", class: "view-link", "Create one" }
                }
            }
        }
    }
}
