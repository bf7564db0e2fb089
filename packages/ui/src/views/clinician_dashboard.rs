use api::ClinicianDashboard;
use dioxus::prelude::*;

use super::widgets::AlertBriefList;
use crate::components::{Card, ErrorBanner, Loading, PageHeader, StatCard};
use crate::format;

#[component]
pub fn ClinicianDashboardView() -> Element {
    let dashboard = use_resource(|| async move { api::clinician_dashboard().await });

    let body = match &*dashboard.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(data)) => rsx! { ClinicianDashboardBody { data: data.clone() } },
    };

    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "Clinical Dashboard",
                subtitle: "Patient population overview".to_string(),
            }
            {body}
        }
    }
}

#[component]
fn ClinicianDashboardBody(data: ClinicianDashboard) -> Element {
    rsx! {
        p { class: "view-muted", "Signed in as {data.user.display_name()}" }

        div {
            class: "stat-grid",
            StatCard { label: "Patients", value: "{data.patient_count}" }
            StatCard { label: "Measurements Today", value: "{data.measurements_today}" }
            StatCard { label: "Anomalies Today", value: "{data.anomalies_today}" }
            StatCard {
                label: "Avg. Readings / Patient",
                value: format::number(data.average_measurements_per_patient),
            }
            StatCard { label: "Alerts", value: "{data.total_alerts}" }
            StatCard { label: "Critical Unresolved", value: "{data.critical_unresolved}" }
        }

        Card {
            title: "Critical Alerts".to_string(),
            AlertBriefList { alerts: data.recent_critical.clone() }
            Link { to: "/clinician/alerts", class: "view-link", "Review alerts" }
        }
    }
}
