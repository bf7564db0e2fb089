//! # Users, patient records and profile payloads
//!
//! [`User`] is the full account row. It is never sent to the browser: the
//! client-safe projection is [`UserInfo`], which carries exactly the four fields
//! the pages need (`id`, `email`, `name`, `role`). The id is a `String` so the
//! type stays trivial to move across the server function boundary.
//!
//! Patients additionally own a [`PatientRecord`] holding medical details,
//! device calibration state and the per-patient alert [`Thresholds`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn parse(s: &str) -> Option<Gender> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Full account record.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    /// Patients a caregiver or clinician looks after. Empty for patients.
    pub assigned_patients: Vec<Uuid>,
    /// Caregiver responsible for a patient, if any.
    pub assigned_caregiver: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: String,
        password_hash: String,
        full_name: String,
        role: Role,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            full_name,
            role,
            phone: None,
            date_of_birth: None,
            gender: None,
            assigned_patients: Vec::new(),
            assigned_caregiver: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.full_name.clone(),
            role: self.role,
        }
    }

    pub fn is_assigned(&self, patient_id: Uuid) -> bool {
        self.assigned_patients.contains(&patient_id)
    }
}

/// User information safe to send to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl UserInfo {
    /// Name for headers, falling back to the mailbox part of the email.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            self.email.split('@').next().unwrap_or(&self.email)
        } else {
            &self.name
        }
    }
}

/// Per-patient limits used by anomaly detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub heart_rate_min: i32,
    pub heart_rate_max: i32,
    pub systolic_bp_min: i32,
    pub systolic_bp_max: i32,
    pub diastolic_bp_min: i32,
    pub diastolic_bp_max: i32,
    pub oxygen_saturation_min: i32,
    pub temperature_min: f64,
    pub temperature_max: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            heart_rate_min: 60,
            heart_rate_max: 100,
            systolic_bp_min: 90,
            systolic_bp_max: 140,
            diastolic_bp_min: 60,
            diastolic_bp_max: 90,
            oxygen_saturation_min: 95,
            temperature_min: 36.1,
            temperature_max: 37.2,
        }
    }
}

/// Medical and device information attached to a patient account.
#[derive(Clone, Debug, PartialEq)]
pub struct PatientRecord {
    pub user_id: Uuid,
    pub blood_type: Option<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub device_id: Option<String>,
    pub device_calibrated: bool,
    pub last_calibration_date: Option<DateTime<Utc>>,
    pub thresholds: Thresholds,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PatientRecord {
    pub fn new(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            blood_type: None,
            allergies: Vec::new(),
            medications: Vec::new(),
            medical_conditions: Vec::new(),
            emergency_contact_name: None,
            emergency_contact_phone: None,
            emergency_contact_relationship: None,
            device_id: None,
            device_calibrated: false,
            last_calibration_date: None,
            thresholds: Thresholds::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Self-service registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    /// Monitoring device serial, kept on the patient record. Ignored for carers.
    pub device_id: Option<String>,
}

/// Profile page payload. Medical and device fields are only filled for patients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub blood_type: Option<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub assigned_patients: Vec<Uuid>,
    pub assigned_caregiver: Option<Uuid>,
    pub device_id: Option<String>,
    pub device_calibrated: bool,
    pub last_calibration_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Partial profile update. `None` leaves a field untouched; for the optional
/// text fields an empty string clears the stored value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub blood_type: Option<String>,
    pub allergies: Option<Vec<String>>,
    pub medications: Option<Vec<String>>,
    pub medical_conditions: Option<Vec<String>>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
}

impl ProfileUpdate {
    pub fn touches_account(&self) -> bool {
        self.full_name.is_some()
            || self.phone.is_some()
            || self.date_of_birth.is_some()
            || self.gender.is_some()
    }

    pub fn touches_medical(&self) -> bool {
        self.blood_type.is_some()
            || self.allergies.is_some()
            || self.medications.is_some()
            || self.medical_conditions.is_some()
            || self.emergency_contact_name.is_some()
            || self.emergency_contact_phone.is_some()
            || self.emergency_contact_relationship.is_some()
    }
}

/// A patient account created by a caregiver or clinician.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPatient {
    pub email: String,
    pub full_name: String,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub blood_type: Option<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub assigned_caregiver_id: Option<Uuid>,
    pub assigned_clinician_id: Option<Uuid>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientCreated {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub temporary_password: String,
    pub message: String,
}

/// Row of the assigned-patients list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Assigned patient with a snapshot of their most recent reading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientOverview {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    pub heart_rate: Option<i32>,
    pub oxygen_saturation: Option<f64>,
    pub temperature: Option<f64>,
    pub last_measurement_at: Option<DateTime<Utc>>,
    pub is_anomaly: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_hides_everything_but_identity() {
        let user = User::new(
            "ana@example.com".into(),
            "$argon2id$...".into(),
            "Ana Lima".into(),
            Role::Patient,
            Utc::now(),
        );
        let info = user.to_info();
        assert_eq!(info.id, user.id.to_string());
        assert_eq!(info.name, "Ana Lima");
        assert_eq!(info.role, Role::Patient);
    }

    #[test]
    fn display_name_falls_back_to_mailbox() {
        let info = UserInfo {
            id: "1".into(),
            email: "sam@example.com".into(),
            name: " ".into(),
            role: Role::Clinician,
        };
        assert_eq!(info.display_name(), "sam");
    }

    #[test]
    fn profile_update_sections() {
        let update = ProfileUpdate {
            phone: Some("555".into()),
            ..Default::default()
        };
        assert!(update.touches_account());
        assert!(!update.touches_medical());

        let update = ProfileUpdate {
            allergies: Some(vec!["penicillin".into()]),
            ..Default::default()
        };
        assert!(!update.touches_account());
        assert!(update.touches_medical());
    }
}
