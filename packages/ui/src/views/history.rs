use dioxus::prelude::*;
use uuid::Uuid;

use super::widgets::VitalsTable;
use crate::components::{Card, ErrorBanner, Loading, PageHeader};

const RANGES: &[(i64, &str)] = &[
    (24, "Last 24 hours"),
    (24 * 7, "Last 7 days"),
    (24 * 30, "Last 30 days"),
];

/// Readings over a selectable window, newest first.
#[component]
pub fn VitalsHistoryPanel(patient_id: Option<Uuid>) -> Element {
    let mut hours = use_signal(|| RANGES[0].0);

    let history = use_resource(move || {
        let hours = hours();
        async move { api::vitals_history(patient_id, Some(hours), None).await }
    });

    let body = match &*history.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(readings)) => rsx! {
            p { class: "view-muted", "{readings.len()} readings" }
            VitalsTable { readings: readings.clone() }
        },
    };

    rsx! {
        Card {
            title: "Reading History".to_string(),
            div {
                class: "segmented",
                for (value, label) in RANGES.iter().copied() {
                    button {
                        key: "{value}",
                        class: if hours() == value { "segment active" } else { "segment" },
                        onclick: move |_| hours.set(value),
                        "{label}"
                    }
                }
            }
            {body}
        }
    }
}

#[component]
pub fn HistoryView() -> Element {
    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "History",
                subtitle: "Your past blood pressure and vital sign readings".to_string(),
            }
            VitalsHistoryPanel { patient_id: None }
        }
    }
}
