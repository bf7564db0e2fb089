use std::time::Duration;

use api::{NewVitals, VitalReading};
use dioxus::prelude::*;
use health::models::MeasurementType;
use health::validation::validate_vitals;
use uuid::Uuid;

use super::widgets::VitalsSnapshot;
use crate::components::{
    Button, Card, EmptyState, ErrorBanner, FormField, PageHeader, SuccessBanner,
};
use crate::{format, sleep};

/// How often the live page asks for the newest reading.
pub const LIVE_REFRESH: Duration = Duration::from_secs(5);

/// Latest reading, refreshed every [`LIVE_REFRESH`]. Without a `patient_id`
/// it shows the signed-in patient's own readings.
#[component]
pub fn LiveVitalsPanel(patient_id: Option<Uuid>, refresh: Option<Signal<u32>>) -> Element {
    let mut latest = use_signal(|| Option::<VitalReading>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);

    let poll = move || async move {
        match api::live_vitals(patient_id).await {
            Ok(reading) => {
                latest.set(reading);
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        loaded.set(true);
    };

    use_future(move || async move {
        loop {
            poll().await;
            sleep(LIVE_REFRESH).await;
        }
    });

    // Immediate refresh after a submission
    use_effect(move || {
        if let Some(refresh) = refresh {
            if refresh() > 0 {
                spawn(poll());
            }
        }
    });

    rsx! {
        Card {
            title: "Live Vitals".to_string(),
            if let Some(message) = error() {
                ErrorBanner { message }
            }
            if let Some(reading) = latest() {
                VitalsSnapshot { reading }
            } else if loaded() {
                EmptyState { message: "No vital signs recorded yet." }
            }
            p { class: "view-muted", "Refreshes every {LIVE_REFRESH.as_secs()} seconds" }
        }
    }
}

#[component]
pub fn LiveMonitorView() -> Element {
    let mut refresh = use_signal(|| 0u32);

    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "Live Monitoring",
                subtitle: "Real-time vital signs from your device".to_string(),
            }
            LiveVitalsPanel { patient_id: None, refresh: refresh }
            VitalsForm { on_submitted: move |_| refresh += 1 }
        }
    }
}

/// Manual reading entry. Empty fields are left unmeasured.
#[component]
pub fn VitalsForm(on_submitted: EventHandler<VitalReading>) -> Element {
    let mut systolic = use_signal(String::new);
    let mut diastolic = use_signal(String::new);
    let mut heart_rate = use_signal(String::new);
    let mut oxygen = use_signal(String::new);
    let mut temperature = use_signal(String::new);
    let mut respiratory = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let read_form = move || -> Result<NewVitals, String> {
        let vitals = NewVitals {
            systolic_bp: format::parse_optional(&systolic(), "Systolic BP")?,
            diastolic_bp: format::parse_optional(&diastolic(), "Diastolic BP")?,
            heart_rate: format::parse_optional(&heart_rate(), "Heart rate")?,
            oxygen_saturation: format::parse_optional(&oxygen(), "SpO2")?,
            temperature: format::parse_optional(&temperature(), "Temperature")?,
            respiratory_rate: format::parse_optional(&respiratory(), "Respiratory rate")?,
            measurement_type: MeasurementType::Manual,
            notes: format::optional_text(&notes()),
            ..Default::default()
        };
        validate_vitals(&vitals).map_err(|e| e.to_string())?;
        Ok(vitals)
    };

    let handle_submit = move |_| async move {
        error.set(None);
        status.set(None);
        let vitals = match read_form() {
            Ok(vitals) => vitals,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        submitting.set(true);
        match api::submit_vitals(vitals).await {
            Ok(reading) => {
                status.set(Some(if reading.is_anomaly {
                    "Reading saved. Some values are outside your thresholds.".to_string()
                } else {
                    "Reading saved.".to_string()
                }));
                on_submitted.call(reading);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        submitting.set(false);
    };

    rsx! {
        Card {
            title: "Record a Reading".to_string(),
            if let Some(message) = error() {
                ErrorBanner { message }
            }
            if let Some(message) = status() {
                SuccessBanner { message }
            }
            div {
                class: "form-grid",
                FormField {
                    id: "systolic",
                    label: "Systolic (mmHg)",
                    value: systolic(),
                    oninput: move |evt: FormEvent| systolic.set(evt.value()),
                }
                FormField {
                    id: "diastolic",
                    label: "Diastolic (mmHg)",
                    value: diastolic(),
                    oninput: move |evt: FormEvent| diastolic.set(evt.value()),
                }
                FormField {
                    id: "heart-rate",
                    label: "Heart rate (BPM)",
                    value: heart_rate(),
                    oninput: move |evt: FormEvent| heart_rate.set(evt.value()),
                }
                FormField {
                    id: "oxygen",
                    label: "SpO2 (%)",
                    value: oxygen(),
                    oninput: move |evt: FormEvent| oxygen.set(evt.value()),
                }
                FormField {
                    id: "temperature",
                    label: "Temperature (°C)",
                    value: temperature(),
                    oninput: move |evt: FormEvent| temperature.set(evt.value()),
                }
                FormField {
                    id: "respiratory",
                    label: "Respiratory rate",
                    value: respiratory(),
                    oninput: move |evt: FormEvent| respiratory.set(evt.value()),
                }
            }
            FormField {
                id: "notes",
                label: "Notes",
                value: notes(),
                oninput: move |evt: FormEvent| notes.set(evt.value()),
            }
            Button {
                disabled: submitting(),
                onclick: handle_submit,
                if submitting() { "Saving..." } else { "Submit Reading" }
            }
        }
    }
}
