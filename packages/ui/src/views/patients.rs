use api::PatientOverview;
use chrono::Utc;
use dioxus::prelude::*;

use crate::components::{Card, EmptyState, ErrorBanner, Loading, PageHeader};
use crate::{format, use_auth};

/// Assigned patients with their latest reading. Rows link to
/// `{base}/{patient id}` where `base` is the role's patient route.
#[component]
pub fn PatientsView() -> Element {
    let auth = use_auth();
    let role = auth().role();
    let base = role
        .map(|r| format!("/{}/patients", r.as_str()))
        .unwrap_or_default();
    let add_patient = role
        .map(|r| format!("/{}/add-patient", r.as_str()))
        .unwrap_or_default();

    let overview = use_resource(|| async move { api::patients_overview().await });

    let body = match &*overview.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(patients)) if patients.is_empty() => rsx! {
            EmptyState { message: "No patients assigned yet." }
        },
        Some(Ok(patients)) => rsx! {
            PatientsTable { patients: patients.clone(), base: base.clone() }
        },
    };

    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "Patients",
                subtitle: "Everyone assigned to your care".to_string(),
            }
            Card {
                Link { to: add_patient, class: "view-link", "Add a patient" }
                {body}
            }
        }
    }
}

#[component]
fn PatientsTable(patients: Vec<PatientOverview>, base: String) -> Element {
    let now = Utc::now();
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Email" }
                    th { "Blood Pressure" }
                    th { "Heart Rate" }
                    th { "SpO2" }
                    th { "Last Reading" }
                    th { "Status" }
                }
            }
            tbody {
                for patient in patients {
                    tr {
                        key: "{patient.id}",
                        class: if patient.is_anomaly { "row-anomaly" } else { "" },
                        td {
                            Link { to: format!("{base}/{}", patient.id), "{patient.full_name}" }
                        }
                        td { "{patient.email}" }
                        td { "{format::blood_pressure(patient.systolic_bp, patient.diastolic_bp)}" }
                        td {
                            {patient.heart_rate.map(|hr| format!("{hr} BPM")).unwrap_or_else(|| format::MISSING.to_string())}
                        }
                        td {
                            {patient.oxygen_saturation.map(|o| format!("{} %", format::number(o))).unwrap_or_else(|| format::MISSING.to_string())}
                        }
                        td {
                            {patient.last_measurement_at.map(|at| format::relative_time(at, now)).unwrap_or_else(|| "Never".to_string())}
                        }
                        td {
                            if patient.last_measurement_at.is_none() {
                                "No data"
                            } else if patient.is_anomaly {
                                "Attention"
                            } else {
                                "Stable"
                            }
                        }
                    }
                }
            }
        }
    }
}
