use api::{ProfileUpdate, UserProfile};
use dioxus::prelude::*;
use health::Role;

use crate::components::{
    Button, Card, ErrorBanner, FormField, Loading, PageHeader, StatCard, SuccessBanner,
};
use crate::format;

#[component]
pub fn ProfileView() -> Element {
    let profile = use_resource(|| async move { api::get_profile().await });

    let body = match &*profile.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(p)) => rsx! { ProfileForm { profile: p.clone() } },
    };

    rsx! {
        div {
            class: "view-page",
            PageHeader {
                title: "Profile",
                subtitle: "Your account and contact details".to_string(),
            }
            {body}
        }
    }
}

#[component]
fn ProfileForm(profile: UserProfile) -> Element {
    let is_patient = profile.role == Role::Patient;

    let mut full_name = use_signal(|| profile.full_name.clone());
    let mut phone = use_signal(|| profile.phone.clone().unwrap_or_default());
    let mut blood_type = use_signal(|| profile.blood_type.clone().unwrap_or_default());
    let mut allergies = use_signal(|| format::join_list(&profile.allergies));
    let mut medications = use_signal(|| format::join_list(&profile.medications));
    let mut conditions = use_signal(|| format::join_list(&profile.medical_conditions));
    let mut contact_name =
        use_signal(|| profile.emergency_contact_name.clone().unwrap_or_default());
    let mut contact_phone =
        use_signal(|| profile.emergency_contact_phone.clone().unwrap_or_default());
    let mut contact_relationship =
        use_signal(|| profile.emergency_contact_relationship.clone().unwrap_or_default());
    let mut error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_save = move |_| async move {
        error.set(None);
        status.set(None);

        // Every shown field is sent; an emptied box clears the stored value
        let mut update = ProfileUpdate {
            full_name: Some(full_name()),
            phone: Some(phone()),
            ..Default::default()
        };
        if is_patient {
            update.blood_type = Some(blood_type());
            update.allergies = Some(format::split_list(&allergies()));
            update.medications = Some(format::split_list(&medications()));
            update.medical_conditions = Some(format::split_list(&conditions()));
            update.emergency_contact_name = Some(contact_name());
            update.emergency_contact_phone = Some(contact_phone());
            update.emergency_contact_relationship = Some(contact_relationship());
        }

        saving.set(true);
        match api::update_profile(update).await {
            Ok(_) => status.set(Some("Profile updated".to_string())),
            Err(e) => error.set(Some(e.to_string())),
        }
        saving.set(false);
    };

    rsx! {
        div {
            class: "stat-grid",
            StatCard { label: "Email", value: profile.email.clone() }
            StatCard { label: "Role", value: profile.role.display_name().to_string() }
            if is_patient {
                StatCard {
                    label: "Device",
                    value: profile.device_id.clone().unwrap_or_else(|| format::MISSING.to_string()),
                    hint: if profile.device_calibrated { "Calibrated".to_string() } else { "Not calibrated".to_string() },
                }
            } else {
                StatCard { label: "Assigned Patients", value: "{profile.assigned_patients.len()}" }
            }
        }

        if let Some(message) = error() {
            ErrorBanner { message }
        }
        if let Some(message) = status() {
            SuccessBanner { message }
        }

        Card {
            title: "Personal Information".to_string(),
            FormField {
                id: "full-name",
                label: "Full name",
                value: full_name(),
                oninput: move |evt: FormEvent| full_name.set(evt.value()),
            }
            FormField {
                id: "phone",
                label: "Phone",
                r#type: "tel",
                value: phone(),
                oninput: move |evt: FormEvent| phone.set(evt.value()),
            }
        }

        if is_patient {
            Card {
                title: "Medical Information".to_string(),
                FormField {
                    id: "blood-type",
                    label: "Blood type",
                    placeholder: "O+",
                    value: blood_type(),
                    oninput: move |evt: FormEvent| blood_type.set(evt.value()),
                }
                FormField {
                    id: "allergies",
                    label: "Allergies (comma separated)",
                    value: allergies(),
                    oninput: move |evt: FormEvent| allergies.set(evt.value()),
                }
                FormField {
                    id: "medications",
                    label: "Medications (comma separated)",
                    value: medications(),
                    oninput: move |evt: FormEvent| medications.set(evt.value()),
                }
                FormField {
                    id: "conditions",
                    label: "Medical conditions (comma separated)",
                    value: conditions(),
                    oninput: move |evt: FormEvent| conditions.set(evt.value()),
                }
            }

            Card {
                title: "Emergency Contact".to_string(),
                FormField {
                    id: "contact-name",
                    label: "Name",
                    value: contact_name(),
                    oninput: move |evt: FormEvent| contact_name.set(evt.value()),
                }
                FormField {
                    id: "contact-phone",
                    label: "Phone",
                    r#type: "tel",
                    value: contact_phone(),
                    oninput: move |evt: FormEvent| contact_phone.set(evt.value()),
                }
                FormField {
                    id: "contact-relationship",
                    label: "Relationship",
                    value: contact_relationship(),
                    oninput: move |evt: FormEvent| contact_relationship.set(evt.value()),
                }
            }
        }

        Button {
            disabled: saving(),
            onclick: handle_save,
            if saving() { "Saving..." } else { "Save Changes" }
        }
    }
}
