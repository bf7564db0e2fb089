use api::NewAlert;
use dioxus::prelude::*;
use health::models::AlertType;
use uuid::Uuid;

use super::alerts::AlertsPanel;
use super::analysis::TrendsPanel;
use super::history::VitalsHistoryPanel;
use super::live::LiveVitalsPanel;
use crate::components::{Button, Card, ErrorBanner, FormField, PageHeader, SuccessBanner};
use crate::format;

/// One assigned patient: live reading, trends, history and alerts.
#[component]
pub fn PatientDetailView(patient_id: Uuid) -> Element {
    let patients = use_resource(|| async move { api::list_patients().await });
    let name = match &*patients.read() {
        Some(Ok(list)) => list
            .iter()
            .find(|p| p.id == patient_id)
            .map(|p| p.full_name.clone()),
        _ => None,
    };

    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: name.unwrap_or_else(|| "Patient".to_string()),
                subtitle: "Live readings, trends and alerts".to_string(),
            }
            LiveVitalsPanel { patient_id: Some(patient_id) }
            TrendsPanel { patient_id }
            VitalsHistoryPanel { patient_id: Some(patient_id) }
            AlertsPanel { patient_id: Some(patient_id) }
            NewAlertForm { patient_id }
        }
    }
}

/// Manual alert raised by the carer for this patient.
#[component]
fn NewAlertForm(patient_id: Uuid) -> Element {
    let mut alert_type = use_signal(|| AlertType::Info);
    let mut title = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);

    let handle_create = move |_| async move {
        error.set(None);
        status.set(None);
        let (Some(title_text), Some(message_text)) =
            (format::optional_text(&title()), format::optional_text(&message()))
        else {
            error.set(Some("Please fill in all fields".to_string()));
            return;
        };

        let new = NewAlert {
            patient_id,
            alert_type: alert_type(),
            severity: None,
            title: title_text,
            message: message_text,
            vital_type: None,
            vital_value: None,
            threshold_crossed: None,
        };
        match api::create_alert(new).await {
            Ok(_) => {
                status.set(Some("Alert created".to_string()));
                title.set(String::new());
                message.set(String::new());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        Card {
            title: "Raise an Alert".to_string(),
            if let Some(message) = error() {
                ErrorBanner { message }
            }
            if let Some(message) = status() {
                SuccessBanner { message }
            }
            div {
                class: "segmented",
                for (value, label) in [
                    (AlertType::Info, "Info"),
                    (AlertType::Warning, "Warning"),
                    (AlertType::Critical, "Critical"),
                ] {
                    button {
                        key: "{label}",
                        class: if alert_type() == value { "segment active" } else { "segment" },
                        onclick: move |_| alert_type.set(value),
                        "{label}"
                    }
                }
            }
            FormField {
                id: "alert-title",
                label: "Title",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            FormField {
                id: "alert-message",
                label: "Message",
                value: message(),
                oninput: move |evt: FormEvent| message.set(evt.value()),
            }
            Button { onclick: handle_create, "Create Alert" }
        }
    }
}
