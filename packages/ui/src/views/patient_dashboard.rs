use api::PatientDashboard;
use dioxus::prelude::*;

use super::widgets::VitalsSnapshot;
use crate::components::{Card, EmptyState, ErrorBanner, Loading, PageHeader, StatCard};
use crate::format;

#[component]
pub fn PatientDashboardView() -> Element {
    let dashboard = use_resource(|| async move { api::patient_dashboard().await });

    let body = match &*dashboard.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(data)) => rsx! { PatientDashboardBody { data: data.clone() } },
    };

    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "Dashboard",
                subtitle: "Your blood pressure and vital signs at a glance".to_string(),
            }
            {body}
        }
    }
}

#[component]
fn PatientDashboardBody(data: PatientDashboard) -> Element {
    let device = &data.device;
    let device_status = if device.calibrated { "Calibrated" } else { "Needs calibration" };
    let last_calibration = device
        .last_calibration
        .map(format::timestamp)
        .unwrap_or_else(|| "Never".to_string());

    rsx! {
        p { class: "view-muted", "Welcome back, {data.user.display_name()}" }

        Card {
            title: "Latest Reading".to_string(),
            if let Some(reading) = data.latest_vitals.clone() {
                VitalsSnapshot { reading }
            } else {
                EmptyState { message: "No readings yet. Submit one from Live Monitoring." }
            }
        }

        div {
            class: "stat-grid",
            StatCard { label: "Readings (24h)", value: "{data.measurements_24h}" }
            StatCard { label: "Alerts", value: "{data.total_alerts}" }
            StatCard { label: "Unread Alerts", value: "{data.unread_alerts}" }
            StatCard {
                label: "Device",
                value: device_status.to_string(),
                hint: format!("Last calibration: {last_calibration}"),
            }
        }
    }
}
