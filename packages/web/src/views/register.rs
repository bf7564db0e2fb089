//! Registration page view with role selection.

use std::time::Duration;

use dioxus::prelude::*;
use health::validation::validate_registration;
use health::Role;
use ui::components::{Button, ErrorBanner, FormField, SuccessBanner};
use ui::{redirect_to, sleep, use_auth};

/// How long the success message stays up before the login page loads.
const SIGN_IN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Register page component. New accounts sign in from the login page.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let mut role = use_signal(|| Role::Patient);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut device_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut registered = use_signal(|| false);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if let Some(role) = auth().role() {
            redirect_to(role.dashboard_route());
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if let Err(err) = validate_registration(&n, &e, &p, &cp) {
                error.set(Some(err.to_string()));
                return;
            }

            let device = device_id().trim().to_string();
            if role() == Role::Patient && device.is_empty() {
                error.set(Some("Please fill in all fields".to_string()));
                return;
            }
            let phone_number = Some(phone().trim().to_string()).filter(|p| !p.is_empty());
            let device = Some(device).filter(|d| !d.is_empty());

            loading.set(true);
            match api::register(e, p, n, role(), phone_number, device).await {
                Ok(_) => {
                    registered.set(true);
                    sleep(SIGN_IN_REDIRECT_DELAY).await;
                    redirect_to("/login");
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
                h1 { class: "auth-title", "Create Account" }
                p { class: "auth-subtitle", "Join HyperWatch" }

                form {
                    onsubmit: handle_register,
                    class: "auth-form",

                    if let Some(message) = error() {
                        ErrorBanner { message }
                    }
                    if registered() {
                        SuccessBanner { message: "Registration successful! Redirecting to the login page..." }
                    }

                    div {
                        class: "segmented",
                        for value in Role::ALL {
                            button {
                                key: "{value.as_str()}",
                                r#type: "button",
                                class: if role() == value { "segment active" } else { "segment" },
                                onclick: move |_| role.set(value),
                                "{value.display_name()}"
                            }
                        }
                    }

                    FormField {
                        id: "register-name",
                        label: "Full name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                    FormField {
                        id: "register-email",
                        label: "Email",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FormField {
                        id: "register-phone",
                        label: "Phone (optional)",
                        r#type: "tel",
                        value: phone(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }
                    if role() == Role::Patient {
                        FormField {
                            id: "register-device",
                            label: "Device ID",
                            placeholder: "HW-DEVICE-XXXX",
                            value: device_id(),
                            oninput: move |evt: FormEvent| device_id.set(evt.value()),
                        }
                    }
                    FormField {
                        id: "register-password",
                        label: "Password",
                        r#type: "password",
                        placeholder: "At least 6 characters",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    FormField {
                        id: "register-confirm",
                        label: "Confirm password",
                        r#type: "password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }

                    Button {
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Already have an account? "
                    Link { to: "/login", class: "view-link", "Sign in" }
                }
            }
        }
    }
}
