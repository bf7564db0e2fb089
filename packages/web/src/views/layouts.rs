use dioxus::prelude::*;
use health::Role;
use ui::{RoleGuard, RoleSidebar};

use crate::Route;

#[component]
pub fn PatientLayout() -> Element {
    rsx! { RoleShell { allowed: vec![Role::Patient] } }
}

#[component]
pub fn CaregiverLayout() -> Element {
    rsx! { RoleShell { allowed: vec![Role::Caregiver] } }
}

#[component]
pub fn ClinicianLayout() -> Element {
    rsx! { RoleShell { allowed: vec![Role::Clinician] } }
}

/// Sidebar plus the routed page, behind the role guard.
#[component]
fn RoleShell(allowed: Vec<Role>) -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        RoleGuard {
            allowed,
            path: path.clone(),
            div {
                class: "app-shell",
                RoleSidebar { current_path: path }
                main {
                    class: "app-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
