use dioxus::prelude::*;

use crate::components::{
    Button, Card, ErrorBanner, FormField, Loading, PageHeader, StatCard, SuccessBanner,
};
use crate::format;

const STEPS: &[(&str, &str)] = &[
    (
        "Find a Quiet Place",
        "Sit comfortably in a quiet environment with minimal distractions.",
    ),
    (
        "Rest for 5 Minutes",
        "Relax and avoid movement. Keep your arm at heart level.",
    ),
    (
        "Start Calibration",
        "Enter your device ID and press the button below.",
    ),
    (
        "Stay Still",
        "Remain motionless until the calibration is recorded.",
    ),
];

#[component]
pub fn CalibrationView() -> Element {
    let mut device_id = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);
    let mut calibrating = use_signal(|| false);

    let mut dashboard = use_resource(|| async move { api::patient_dashboard().await });

    // Prefill the device id once the current status arrives
    use_effect(move || {
        if let Some(Ok(data)) = &*dashboard.read() {
            if let Some(id) = &data.device.device_id {
                if device_id.peek().is_empty() {
                    device_id.set(id.clone());
                }
            }
        }
    });

    let handle_calibrate = move |_| async move {
        error.set(None);
        status.set(None);
        calibrating.set(true);
        match api::calibrate_device(device_id()).await {
            Ok(calibration) => {
                status.set(Some(format!(
                    "Device {} calibrated at {}",
                    calibration.device_id,
                    format::timestamp(calibration.calibrated_at)
                )));
                dashboard.restart();
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        calibrating.set(false);
    };

    let current = match &*dashboard.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(data)) => {
            let device = data.device.clone();
            rsx! {
                div {
                    class: "stat-grid",
                    StatCard {
                        label: "Status",
                        value: if device.calibrated { "Calibrated".to_string() } else { "Not calibrated".to_string() },
                    }
                    StatCard {
                        label: "Device",
                        value: device.device_id.unwrap_or_else(|| format::MISSING.to_string()),
                    }
                    StatCard {
                        label: "Last Calibration",
                        value: device
                            .last_calibration
                            .map(format::timestamp)
                            .unwrap_or_else(|| "Never".to_string()),
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "Device Calibration",
                subtitle: "Ensure accurate blood pressure readings".to_string(),
            }

            Card {
                title: "Calibration Status".to_string(),
                {current}
            }

            Card {
                title: "How to Calibrate".to_string(),
                ol {
                    class: "steps",
                    for (title, detail) in STEPS.iter().copied() {
                        li {
                            key: "{title}",
                            strong { "{title}" }
                            p { class: "view-muted", "{detail}" }
                        }
                    }
                }
                if let Some(message) = error() {
                    ErrorBanner { message }
                }
                if let Some(message) = status() {
                    SuccessBanner { message }
                }
                FormField {
                    id: "device-id",
                    label: "Device ID",
                    placeholder: "HW-0001",
                    value: device_id(),
                    oninput: move |evt: FormEvent| device_id.set(evt.value()),
                }
                Button {
                    disabled: calibrating(),
                    onclick: handle_calibrate,
                    if calibrating() { "Calibrating..." } else { "Start Calibration" }
                }
            }
        }
    }
}
