//! Authentication context and hooks for the UI.

use std::time::Duration;

use api::UserInfo;
use dioxus::prelude::*;
use health::Role;

use crate::clock::sleep;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that loads the session user and keeps it fresh.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(user)) => auth_state.set(AuthState::signed_in(user)),
            Ok(None) => auth_state.set(AuthState::signed_out()),
            Err(e) => {
                tracing::warn!("Failed to load session user: {}", e);
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    // Re-check every 60s so an expired session drops back to the login page
    use_effect(move || {
        spawn(async move {
            loop {
                sleep(Duration::from_secs(60)).await;

                if auth_state().loading {
                    continue;
                }
                if let Ok(user) = api::get_current_user().await {
                    if auth_state().user != user {
                        auth_state.set(AuthState {
                            user,
                            loading: false,
                        });
                    }
                }
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Full page navigation. Resets client state, which is what sign-in and
/// sign-out want.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        navigator().replace(path.to_string());
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                auth_state.set(AuthState::signed_out());
                redirect_to("/login");
            }
            Err(e) => tracing::error!("Logout failed: {}", e),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
