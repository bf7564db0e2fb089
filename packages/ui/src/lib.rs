//! This crate contains all shared UI for the workspace: the auth context, the
//! role guard and sidebar, small form components and every dashboard page.

use dioxus::prelude::*;

pub mod components;
pub mod format;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod auth;
pub use auth::{redirect_to, use_auth, AuthProvider, AuthState, LogoutButton};

mod clock;
pub use clock::sleep;

mod role_guard;
pub use role_guard::RoleGuard;

mod sidebar;
pub use sidebar::RoleSidebar;
