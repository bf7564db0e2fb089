use dioxus::prelude::*;
use health::{navigation_for, NavIcon};

use crate::icons::{
    FaBell, FaChartLine, FaClockRotateLeft, FaHeartPulse, FaHouse, FaSliders, FaUser, FaUserPlus,
    FaUsers,
};
use crate::{use_auth, Icon, LogoutButton};

/// Role menu with the signed-in user at the top and log out at the bottom.
#[component]
pub fn RoleSidebar(current_path: String) -> Element {
    let auth = use_auth();
    let user = auth().user;
    let items = navigation_for(user.as_ref().map(|u| u.role));

    rsx! {
        nav {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                Icon { width: 20, height: 20, icon: FaHeartPulse }
                span { "HyperWatch" }
            }

            if let Some(ref u) = user {
                div {
                    class: "sidebar-user",
                    span { class: "sidebar-user-name", "{u.display_name()}" }
                    span { class: "sidebar-user-role", "{u.role.display_name()}" }
                }
            }

            ul {
                class: "sidebar-menu",
                for item in items.iter() {
                    li {
                        key: "{item.href}",
                        Link {
                            to: item.href,
                            class: if current_path.starts_with(item.href) { "sidebar-item active" } else { "sidebar-item" },
                            {nav_icon(item.icon)}
                            span { "{item.label}" }
                        }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                LogoutButton { class: "sidebar-item" }
            }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { width: 16, height: 16, icon: FaHouse } },
        NavIcon::Live => rsx! { Icon { width: 16, height: 16, icon: FaHeartPulse } },
        NavIcon::History => rsx! { Icon { width: 16, height: 16, icon: FaClockRotateLeft } },
        NavIcon::Alerts => rsx! { Icon { width: 16, height: 16, icon: FaBell } },
        NavIcon::Calibration => rsx! { Icon { width: 16, height: 16, icon: FaSliders } },
        NavIcon::Profile => rsx! { Icon { width: 16, height: 16, icon: FaUser } },
        NavIcon::Patients => rsx! { Icon { width: 16, height: 16, icon: FaUsers } },
        NavIcon::AddPatient => rsx! { Icon { width: 16, height: 16, icon: FaUserPlus } },
        NavIcon::Analysis => rsx! { Icon { width: 16, height: 16, icon: FaChartLine } },
    }
}
