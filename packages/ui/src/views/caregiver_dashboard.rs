use api::CaregiverDashboard;
use dioxus::prelude::*;

use super::widgets::AlertBriefList;
use crate::components::{Card, ErrorBanner, Loading, PageHeader, StatCard};

#[component]
pub fn CaregiverDashboardView() -> Element {
    let dashboard = use_resource(|| async move { api::caregiver_dashboard().await });

    let body = match &*dashboard.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(data)) => rsx! { CaregiverDashboardBody { data: data.clone() } },
    };

    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "Caregiver Dashboard",
                subtitle: "Monitor the people you care for".to_string(),
            }
            {body}
        }
    }
}

#[component]
fn CaregiverDashboardBody(data: CaregiverDashboard) -> Element {
    rsx! {
        p { class: "view-muted", "Signed in as {data.user.display_name()}" }

        div {
            class: "stat-grid",
            StatCard { label: "Patients", value: "{data.patient_count}" }
            StatCard { label: "Alerts", value: "{data.total_alerts}" }
            StatCard { label: "Unread", value: "{data.unread_alerts}" }
            StatCard { label: "Critical", value: "{data.critical_alerts}" }
        }

        Card {
            title: "Recent Alerts".to_string(),
            AlertBriefList { alerts: data.recent_alerts.clone() }
            Link { to: "/caregiver/alerts", class: "view-link", "View all alerts" }
        }

        Card {
            title: "Patients".to_string(),
            Link { to: "/caregiver/patients", class: "view-link", "Open patient list" }
        }
    }
}
