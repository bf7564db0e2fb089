use api::{NewPatient, PatientCreated};
use dioxus::prelude::*;
use health::models::Gender;
use health::Role;
use uuid::Uuid;

use crate::components::{Button, Card, ErrorBanner, FormField, Label, PageHeader};
use crate::{format, use_auth};

/// Create a patient account assigned to the signed-in carer. The temporary
/// password is shown once after creation.
#[component]
pub fn AddPatientView() -> Element {
    let auth = use_auth();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut gender = use_signal(|| Option::<Gender>::None);
    let mut phone = use_signal(String::new);
    let mut blood_type = use_signal(String::new);
    let mut allergies = use_signal(String::new);
    let mut medications = use_signal(String::new);
    let mut conditions = use_signal(String::new);
    let mut contact_name = use_signal(String::new);
    let mut contact_phone = use_signal(String::new);
    let mut contact_relationship = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut created = use_signal(|| Option::<PatientCreated>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| async move {
        error.set(None);
        created.set(None);

        let parsed_age = match format::parse_optional::<u32>(&age(), "Age") {
            Ok(parsed) => parsed,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        let state = auth();
        let me = state
            .user
            .as_ref()
            .and_then(|u| Uuid::parse_str(&u.id).ok());
        let role = state.role();

        let patient = NewPatient {
            email: email(),
            full_name: full_name(),
            age: parsed_age,
            gender: gender(),
            phone: format::optional_text(&phone()),
            blood_type: format::optional_text(&blood_type()),
            allergies: format::split_list(&allergies()),
            medications: format::split_list(&medications()),
            medical_conditions: format::split_list(&conditions()),
            emergency_contact_name: format::optional_text(&contact_name()),
            emergency_contact_phone: format::optional_text(&contact_phone()),
            emergency_contact_relationship: format::optional_text(&contact_relationship()),
            assigned_caregiver_id: me.filter(|_| role == Some(Role::Caregiver)),
            assigned_clinician_id: me.filter(|_| role == Some(Role::Clinician)),
        };

        submitting.set(true);
        match api::create_patient(patient).await {
            Ok(result) => {
                created.set(Some(result));
                for mut field in [
                    full_name, email, age, phone, blood_type, allergies, medications, conditions,
                    contact_name, contact_phone, contact_relationship,
                ] {
                    field.set(String::new());
                }
                gender.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        submitting.set(false);
    };

    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "Add Patient",
                subtitle: "Create an account for a new patient".to_string(),
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }
            if let Some(result) = created() {
                Card {
                    title: "Patient Created".to_string(),
                    p { "{result.full_name} ({result.email})" }
                    p { "{result.message}" }
                    p {
                        class: "view-muted",
                        "Share the temporary password with the patient. It is not shown again."
                    }
                }
            }

            Card {
                title: "Personal Information".to_string(),
                FormField {
                    id: "patient-name",
                    label: "Full name",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }
                FormField {
                    id: "patient-email",
                    label: "Email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                FormField {
                    id: "patient-age",
                    label: "Age",
                    r#type: "number",
                    value: age(),
                    oninput: move |evt: FormEvent| age.set(evt.value()),
                }
                div {
                    class: "field",
                    Label { html_for: "patient-gender", "Gender" }
                    select {
                        id: "patient-gender",
                        class: "field-input",
                        onchange: move |evt: FormEvent| gender.set(Gender::parse(&evt.value())),
                        option { value: "", "Prefer not to say" }
                        option { value: "male", "Male" }
                        option { value: "female", "Female" }
                        option { value: "other", "Other" }
                    }
                }
                FormField {
                    id: "patient-phone",
                    label: "Phone",
                    r#type: "tel",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
            }

            Card {
                title: "Medical Information".to_string(),
                FormField {
                    id: "patient-blood-type",
                    label: "Blood type",
                    placeholder: "O+",
                    value: blood_type(),
                    oninput: move |evt: FormEvent| blood_type.set(evt.value()),
                }
                FormField {
                    id: "patient-allergies",
                    label: "Allergies (comma separated)",
                    value: allergies(),
                    oninput: move |evt: FormEvent| allergies.set(evt.value()),
                }
                FormField {
                    id: "patient-medications",
                    label: "Medications (comma separated)",
                    value: medications(),
                    oninput: move |evt: FormEvent| medications.set(evt.value()),
                }
                FormField {
                    id: "patient-conditions",
                    label: "Medical conditions (comma separated)",
                    value: conditions(),
                    oninput: move |evt: FormEvent| conditions.set(evt.value()),
                }
            }

            Card {
                title: "Emergency Contact".to_string(),
                FormField {
                    id: "patient-contact-name",
                    label: "Name",
                    value: contact_name(),
                    oninput: move |evt: FormEvent| contact_name.set(evt.value()),
                }
                FormField {
                    id: "patient-contact-phone",
                    label: "Phone",
                    r#type: "tel",
                    value: contact_phone(),
                    oninput: move |evt: FormEvent| contact_phone.set(evt.value()),
                }
                FormField {
                    id: "patient-contact-relationship",
                    label: "Relationship",
                    value: contact_relationship(),
                    oninput: move |evt: FormEvent| contact_relationship.set(evt.value()),
                }
            }

            Button {
                disabled: submitting(),
                onclick: handle_submit,
                if submitting() { "Creating..." } else { "Create Patient" }
            }
        }
    }
}
