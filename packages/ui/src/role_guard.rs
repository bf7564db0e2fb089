use dioxus::prelude::*;
use health::{enforce_role_access, Access, Role};

use crate::auth::{redirect_to, use_auth};
use crate::components::Loading;

/// Renders `children` only for a signed-in user whose role is in `allowed`.
/// Anyone else is sent to the login page once the session has loaded.
#[component]
pub fn RoleGuard(allowed: Vec<Role>, path: String, children: Element) -> Element {
    let auth = use_auth();

    let access = use_memo(use_reactive!(|(allowed, path)| {
        let state = auth();
        if state.loading {
            None
        } else {
            Some(enforce_role_access(state.role(), &allowed, &path))
        }
    }));

    use_effect(move || {
        if let Some(Access::Redirect { to, .. }) = access() {
            redirect_to(to);
        }
    });

    match access() {
        None => rsx! { Loading { label: "Checking your session..." } },
        Some(Access::Granted) => rsx! { {children} },
        Some(Access::Redirect { .. }) => rsx! { Loading { label: "Redirecting..." } },
    }
}
