use api::TrendPeriod;
use dioxus::prelude::*;
use uuid::Uuid;

use super::widgets::TrendsTable;
use crate::components::{Card, EmptyState, ErrorBanner, Loading, PageHeader};

/// Per-vital statistics over a selectable period.
#[component]
pub fn TrendsPanel(patient_id: Uuid) -> Element {
    let mut period = use_signal(TrendPeriod::default);

    let trends = use_resource(move || {
        let period = period();
        async move { api::vitals_trends(Some(patient_id), period).await }
    });

    let body = match &*trends.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(items)) => rsx! { TrendsTable { trends: items.clone() } },
    };

    rsx! {
        Card {
            title: "Trends".to_string(),
            div {
                class: "segmented",
                for value in TrendPeriod::ALL {
                    button {
                        key: "{value.as_str()}",
                        class: if period() == value { "segment active" } else { "segment" },
                        onclick: move |_| period.set(value),
                        "{value.as_str()}"
                    }
                }
            }
            {body}
        }
    }
}

/// Clinician trend analysis across assigned patients.
#[component]
pub fn AnalysisView() -> Element {
    let mut selected = use_signal(|| Option::<Uuid>::None);
    let patients = use_resource(|| async move { api::list_patients().await });

    // Default to the first patient
    use_effect(move || {
        if let Some(Ok(list)) = &*patients.read() {
            if selected.peek().is_none() {
                if let Some(first) = list.first() {
                    selected.set(Some(first.id));
                }
            }
        }
    });

    let picker = match &*patients.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { message: "No patients assigned yet." }
        },
        Some(Ok(list)) => rsx! {
            select {
                class: "field-input",
                onchange: move |evt: FormEvent| selected.set(evt.value().parse().ok()),
                for patient in list.clone() {
                    option {
                        key: "{patient.id}",
                        value: "{patient.id}",
                        selected: selected() == Some(patient.id),
                        "{patient.full_name}"
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "Patient Analysis",
                subtitle: "Vital sign trends for the selected patient".to_string(),
            }
            Card {
                title: "Patient".to_string(),
                {picker}
            }
            if let Some(patient_id) = selected() {
                TrendsPanel { key: "{patient_id}", patient_id }
            }
        }
    }
}
