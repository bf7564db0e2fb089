//! # Monitor: every backend operation in one place
//!
//! [`Monitor`] wraps a [`HealthStore`] and implements the operations the pages
//! call: registration and sign-in lookups, profiles, patient management,
//! vitals submission and queries, alerts and the three role dashboards.
//!
//! Each operation takes the acting [`User`] and applies the access rules from
//! [`crate::access`] before touching the store. Errors are [`HealthError`]
//! values carrying the message shown to the user.
//!
//! Password hashing is not done here: callers pass ready-made hashes in and a
//! verification closure for sign-in, which keeps this crate free of crypto.

use chrono::{Duration, NaiveTime, Utc};
use uuid::Uuid;

use crate::access::{accessible_patient_ids, can_access_patient_data};
use crate::anomaly::check_vitals;
use crate::error::{HealthError, Result};
use crate::models::{
    Alert, AlertFilter, AlertQuery, AlertStats, AlertType, Calibration, CaregiverDashboard,
    ClinicianDashboard, DeviceStatus, NewAlert, NewPatient, NewVitals, PatientCreated,
    PatientDashboard, PatientOverview, PatientRecord, PatientSummary, ProfileUpdate,
    RegisterRequest, TrendPeriod, User, UserProfile, VitalReading, VitalsTrend,
};
use crate::roles::Role;
use crate::store::HealthStore;
use crate::trends::{compute_trends, round2};
use crate::validation;

/// Dashboard lists show at most this many alerts.
const RECENT_ALERTS: i64 = 10;

pub struct Monitor<S> {
    store: S,
}

fn require_role(user: &User, allowed: &[Role]) -> Result<()> {
    if allowed.contains(&user.role) {
        return Ok(());
    }
    let names: Vec<&str> = allowed.iter().map(Role::as_str).collect();
    Err(HealthError::forbidden(format!(
        "Access denied. Required roles: {}",
        names.join(", ")
    )))
}

fn require_carer(user: &User, action: &str) -> Result<()> {
    if user.role.is_carer() {
        Ok(())
    } else {
        Err(HealthError::forbidden(format!(
            "Only caregivers and clinicians can {action}"
        )))
    }
}

/// Patient whose data a request is about. Patients always get themselves.
fn target_patient(user: &User, patient_id: Option<Uuid>) -> Result<Uuid> {
    if user.role == Role::Patient {
        return Ok(user.id);
    }
    let patient_id = patient_id.ok_or_else(|| {
        HealthError::BadRequest("patient_id is required for caregivers/clinicians".into())
    })?;
    if !user.is_assigned(patient_id) {
        return Err(HealthError::forbidden(
            "Access denied to this patient's data",
        ));
    }
    Ok(patient_id)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Patients a list or stats request covers. Carers may narrow to one patient.
fn scoped_patients(user: &User, patient_id: Option<Uuid>) -> Result<Vec<Uuid>> {
    match (user.role, patient_id) {
        (Role::Patient, _) => Ok(vec![user.id]),
        (_, Some(id)) if user.is_assigned(id) => Ok(vec![id]),
        (_, Some(_)) => Err(HealthError::forbidden("Access denied")),
        (_, None) => Ok(accessible_patient_ids(user)),
    }
}

impl<S: HealthStore> Monitor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // Auth

    pub async fn register(&self, req: RegisterRequest, password_hash: String) -> Result<User> {
        let email = validation::normalize_email(&req.email);
        if req.full_name.trim().is_empty() || email.is_empty() {
            return Err(HealthError::Validation("Please fill in all fields".into()));
        }
        if !validation::is_valid_email(&email) {
            return Err(HealthError::Validation(
                "Please enter a valid email address".into(),
            ));
        }
        if self.store.user_by_email(&email).await?.is_some() {
            return Err(HealthError::Conflict("Email already registered".into()));
        }

        let now = Utc::now();
        let mut user = User::new(
            email,
            password_hash,
            req.full_name.trim().to_string(),
            req.role,
            now,
        );
        user.phone = req.phone.filter(|p| !p.trim().is_empty());

        if user.role == Role::Patient {
            let mut record = PatientRecord::new(user.id, now);
            record.device_id = req.device_id.filter(|d| !d.trim().is_empty());
            self.store.insert_patient_account(&user, &record).await?;
        } else {
            self.store.insert_user(&user).await?;
        }

        tracing::info!(user_id = %user.id, role = %user.role, "registered user");
        Ok(user)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.store
            .user_by_email(&validation::normalize_email(email))
            .await
    }

    /// Look up a user by email and check the password with `verify`.
    pub async fn authenticate(
        &self,
        email: &str,
        verify: impl FnOnce(&str) -> bool,
    ) -> Result<User> {
        let invalid = || HealthError::Unauthorized("Incorrect email or password".into());
        let user = self.find_user_by_email(email).await?.ok_or_else(invalid)?;
        if !verify(&user.password_hash) {
            tracing::debug!(email = %user.email, "password mismatch");
            return Err(invalid());
        }
        Self::ensure_active(&user)?;
        Ok(user)
    }

    pub fn ensure_active(user: &User) -> Result<()> {
        if user.is_active {
            Ok(())
        } else {
            Err(HealthError::forbidden("User account is inactive"))
        }
    }

    /// Session user. A dangling session id reads as signed out.
    pub async fn user(&self, id: Uuid) -> Result<User> {
        self.store
            .user(id)
            .await?
            .ok_or_else(|| HealthError::Unauthorized("User not found".into()))
    }

    // Users

    pub async fn profile(&self, user: &User) -> Result<UserProfile> {
        let record = if user.role == Role::Patient {
            self.store.patient(user.id).await?
        } else {
            None
        };
        let record = record.as_ref();

        Ok(UserProfile {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            phone: user.phone.clone(),
            date_of_birth: user.date_of_birth,
            gender: user.gender,
            blood_type: record.and_then(|r| r.blood_type.clone()),
            allergies: record.map(|r| r.allergies.clone()).unwrap_or_default(),
            medications: record.map(|r| r.medications.clone()).unwrap_or_default(),
            medical_conditions: record
                .map(|r| r.medical_conditions.clone())
                .unwrap_or_default(),
            emergency_contact_name: record.and_then(|r| r.emergency_contact_name.clone()),
            emergency_contact_phone: record.and_then(|r| r.emergency_contact_phone.clone()),
            emergency_contact_relationship: record
                .and_then(|r| r.emergency_contact_relationship.clone()),
            assigned_patients: user.assigned_patients.clone(),
            assigned_caregiver: user.assigned_caregiver,
            device_id: record.and_then(|r| r.device_id.clone()),
            device_calibrated: record.is_some_and(|r| r.device_calibrated),
            last_calibration_date: record.and_then(|r| r.last_calibration_date),
            created_at: user.created_at,
        })
    }

    /// Apply a partial update. Medical fields are ignored for non-patients.
    pub async fn update_profile(&self, user: &User, update: ProfileUpdate) -> Result<UserProfile> {
        let now = Utc::now();
        let mut user = user.clone();

        if update.touches_account() {
            if let Some(name) = update.full_name.as_ref().map(|n| n.trim()) {
                if name.is_empty() {
                    return Err(HealthError::Validation("Name cannot be empty".into()));
                }
                user.full_name = name.to_string();
            }
            if let Some(phone) = update.phone.clone() {
                user.phone = non_empty(phone);
            }
            if update.date_of_birth.is_some() {
                user.date_of_birth = update.date_of_birth;
            }
            if update.gender.is_some() {
                user.gender = update.gender;
            }
            user.updated_at = now;
            self.store.update_user(&user).await?;
        }

        if user.role == Role::Patient && update.touches_medical() {
            let mut record = self
                .store
                .patient(user.id)
                .await?
                .ok_or_else(|| HealthError::not_found("Patient record not found"))?;
            let ProfileUpdate {
                blood_type,
                allergies,
                medications,
                medical_conditions,
                emergency_contact_name,
                emergency_contact_phone,
                emergency_contact_relationship,
                ..
            } = update;
            if let Some(value) = blood_type {
                record.blood_type = non_empty(value);
            }
            if let Some(allergies) = allergies {
                record.allergies = allergies;
            }
            if let Some(medications) = medications {
                record.medications = medications;
            }
            if let Some(conditions) = medical_conditions {
                record.medical_conditions = conditions;
            }
            if let Some(value) = emergency_contact_name {
                record.emergency_contact_name = non_empty(value);
            }
            if let Some(value) = emergency_contact_phone {
                record.emergency_contact_phone = non_empty(value);
            }
            if let Some(value) = emergency_contact_relationship {
                record.emergency_contact_relationship = non_empty(value);
            }
            record.updated_at = now;
            self.store.update_patient(&record).await?;
        }

        self.profile(&user).await
    }

    pub async fn assigned_patients(&self, user: &User) -> Result<Vec<PatientSummary>> {
        require_carer(user, "access this endpoint")?;
        let mut patients = Vec::with_capacity(user.assigned_patients.len());
        for &id in &user.assigned_patients {
            match self.store.user(id).await? {
                Some(p) => patients.push(PatientSummary {
                    id: p.id,
                    full_name: p.full_name,
                    email: p.email,
                    phone: p.phone,
                }),
                None => tracing::warn!(patient_id = %id, "assigned patient missing"),
            }
        }
        Ok(patients)
    }

    pub async fn patients_overview(&self, user: &User) -> Result<Vec<PatientOverview>> {
        require_role(user, &[Role::Caregiver, Role::Clinician])?;
        let mut overview = Vec::with_capacity(user.assigned_patients.len());
        for &id in &user.assigned_patients {
            let Some(patient) = self.store.user(id).await? else {
                tracing::warn!(patient_id = %id, "assigned patient missing");
                continue;
            };
            let latest = self.store.latest_vitals(id).await?;
            let latest = latest.as_ref();
            overview.push(PatientOverview {
                id: patient.id,
                email: patient.email,
                full_name: patient.full_name,
                phone: patient.phone,
                gender: patient.gender,
                date_of_birth: patient.date_of_birth,
                systolic_bp: latest.and_then(|v| v.systolic_bp),
                diastolic_bp: latest.and_then(|v| v.diastolic_bp),
                heart_rate: latest.and_then(|v| v.heart_rate),
                oxygen_saturation: latest.and_then(|v| v.oxygen_saturation),
                temperature: latest.and_then(|v| v.temperature),
                last_measurement_at: latest.map(|v| v.measured_at),
                is_anomaly: latest.is_some_and(|v| v.is_anomaly),
            });
        }
        Ok(overview)
    }

    /// Create a patient account on behalf of a carer.
    ///
    /// The account gets a temporary password derived from the first name; the
    /// caller hashes it with `hash`. Linking to the named caregiver and
    /// clinician is best effort: failures are logged and skipped.
    pub async fn create_patient(
        &self,
        user: &User,
        new: NewPatient,
        hash: impl FnOnce(&str) -> Result<String>,
    ) -> Result<PatientCreated> {
        require_role(user, &[Role::Caregiver, Role::Clinician])?;

        let email = validation::normalize_email(&new.email);
        let full_name = new.full_name.trim().to_string();
        if full_name.is_empty() || email.is_empty() {
            return Err(HealthError::Validation("Please fill in all fields".into()));
        }
        if !validation::is_valid_email(&email) {
            return Err(HealthError::Validation(
                "Please enter a valid email address".into(),
            ));
        }
        if self.store.user_by_email(&email).await?.is_some() {
            return Err(HealthError::BadRequest(
                "A user with this email already exists".into(),
            ));
        }

        let now = Utc::now();
        let date_of_birth = new
            .age
            .map(|age| validation::birth_date_from_age(age, now.date_naive()))
            .transpose()?;
        let temporary_password = validation::temporary_password(&full_name);

        let mut patient = User::new(
            email.clone(),
            hash(&temporary_password)?,
            full_name.clone(),
            Role::Patient,
            now,
        );
        patient.phone = new.phone;
        patient.gender = new.gender;
        patient.date_of_birth = date_of_birth;
        patient.assigned_caregiver = new.assigned_caregiver_id;

        let mut record = PatientRecord::new(patient.id, now);
        record.blood_type = new.blood_type;
        record.allergies = new.allergies;
        record.medications = new.medications;
        record.medical_conditions = new.medical_conditions;
        record.emergency_contact_name = new.emergency_contact_name;
        record.emergency_contact_phone = new.emergency_contact_phone;
        record.emergency_contact_relationship = new.emergency_contact_relationship;
        self.store.insert_patient_account(&patient, &record).await?;

        for (kind, carer) in [
            ("caregiver", new.assigned_caregiver_id),
            ("clinician", new.assigned_clinician_id),
        ] {
            let Some(carer) = carer else { continue };
            match self.store.assign_patient(carer, patient.id).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::warn!(%carer, "could not assign patient to {kind}: no such user")
                }
                Err(e) => tracing::warn!(%carer, "could not assign patient to {kind}: {e}"),
            }
        }

        tracing::info!(patient_id = %patient.id, created_by = %user.id, "created patient");
        Ok(PatientCreated {
            user_id: patient.id,
            email,
            full_name,
            message: format!(
                "Patient created successfully. Temporary password: {temporary_password}"
            ),
            temporary_password,
        })
    }

    // Vitals

    /// Store a patient's reading, flag anomalies and raise alerts for them.
    pub async fn submit_vitals(&self, user: &User, new: NewVitals) -> Result<VitalReading> {
        require_role(user, &[Role::Patient])?;
        validation::validate_vitals(&new)?;

        let now = Utc::now();
        let mut reading = VitalReading::from_new(user.id, new, now);
        let thresholds = self
            .store
            .patient(user.id)
            .await?
            .map(|r| r.thresholds)
            .unwrap_or_default();

        let report = check_vitals(&reading, &thresholds);
        reading.is_anomaly = report.is_anomaly;
        reading.anomaly_type = report.anomaly_type;
        self.store.insert_vitals(&reading).await?;

        for new_alert in report.alerts {
            let alert = Alert::from_new(new_alert, Some(reading.id), now);
            tracing::info!(
                patient_id = %alert.patient_id,
                alert_type = alert.alert_type.as_str(),
                "{}",
                alert.title
            );
            self.store.insert_alert(&alert).await?;
        }

        Ok(reading)
    }

    pub async fn live_vitals(&self, user: &User, patient_id: Option<Uuid>) -> Result<VitalReading> {
        let patient_id = target_patient(user, patient_id)?;
        self.store
            .latest_vitals(patient_id)
            .await?
            .ok_or_else(|| HealthError::not_found("No vital signs found"))
    }

    pub async fn vitals_history(
        &self,
        user: &User,
        patient_id: Option<Uuid>,
        hours: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<VitalReading>> {
        let patient_id = target_patient(user, patient_id)?;
        let hours = validation::history_hours(hours)?;
        let limit = validation::history_limit(limit)?;
        let since = Utc::now() - Duration::hours(hours);
        self.store
            .vitals_since(&[patient_id], since, Some(limit))
            .await
    }

    pub async fn vitals_trends(
        &self,
        user: &User,
        patient_id: Option<Uuid>,
        period: TrendPeriod,
    ) -> Result<Vec<VitalsTrend>> {
        let patient_id = target_patient(user, patient_id)?;
        let since = Utc::now() - Duration::hours(period.hours());
        let readings = self.store.vitals_since(&[patient_id], since, None).await?;
        Ok(compute_trends(&readings, period))
    }

    pub async fn record_calibration(&self, user: &User, device_id: &str) -> Result<Calibration> {
        require_role(user, &[Role::Patient])?;
        let device_id = device_id.trim();
        if device_id.is_empty() {
            return Err(HealthError::Validation("Device ID is required".into()));
        }

        let now = Utc::now();
        let existing = self.store.patient(user.id).await?;
        let mut record = existing
            .clone()
            .unwrap_or_else(|| PatientRecord::new(user.id, now));
        record.device_id = Some(device_id.to_string());
        record.device_calibrated = true;
        record.last_calibration_date = Some(now);
        record.updated_at = now;

        if existing.is_some() {
            self.store.update_patient(&record).await?;
        } else {
            self.store.insert_patient(&record).await?;
        }

        Ok(Calibration {
            device_id: device_id.to_string(),
            calibrated_at: now,
        })
    }

    // Alerts

    pub async fn list_alerts(&self, user: &User, filter: AlertFilter) -> Result<Vec<Alert>> {
        let limit = validation::alert_limit(filter.limit)?;
        let patient_ids = match (user.role, filter.patient_id) {
            (Role::Patient, _) => vec![user.id],
            (_, Some(id)) if !user.is_assigned(id) => {
                return Err(HealthError::forbidden(
                    "Access denied to this patient's alerts",
                ))
            }
            (_, id) => scoped_patients(user, id)?,
        };
        let query = AlertQuery {
            patient_ids,
            alert_type: filter.alert_type,
            is_read: filter.is_read,
            is_resolved: filter.is_resolved,
            since: None,
            limit: Some(limit),
        };
        self.store.alerts(&query).await
    }

    pub async fn create_alert(&self, user: &User, new: NewAlert) -> Result<Alert> {
        require_carer(user, "create manual alerts")?;
        if !user.is_assigned(new.patient_id) {
            return Err(HealthError::forbidden("Access denied to this patient"));
        }
        if new.title.trim().is_empty() {
            return Err(HealthError::Validation("Alert title is required".into()));
        }
        let alert = Alert::from_new(new, None, Utc::now());
        self.store.insert_alert(&alert).await?;
        tracing::info!(alert_id = %alert.id, created_by = %user.id, "manual alert created");
        Ok(alert)
    }

    async fn accessible_alert(&self, user: &User, id: Uuid) -> Result<Alert> {
        let alert = self
            .store
            .alert(id)
            .await?
            .ok_or_else(|| HealthError::not_found("Alert not found"))?;
        if !can_access_patient_data(user, alert.patient_id) {
            return Err(HealthError::forbidden("Access denied"));
        }
        Ok(alert)
    }

    pub async fn mark_alert_read(&self, user: &User, id: Uuid) -> Result<Alert> {
        let mut alert = self.accessible_alert(user, id).await?;
        let now = Utc::now();
        alert.is_read = true;
        alert.read_at = Some(now);
        alert.read_by = Some(user.id);
        alert.updated_at = now;
        self.store.update_alert(&alert).await?;
        Ok(alert)
    }

    pub async fn resolve_alert(&self, user: &User, id: Uuid) -> Result<Alert> {
        require_carer(user, "resolve alerts")?;
        let mut alert = self.accessible_alert(user, id).await?;
        let now = Utc::now();
        alert.is_resolved = true;
        alert.resolved_at = Some(now);
        alert.updated_at = now;
        self.store.update_alert(&alert).await?;
        Ok(alert)
    }

    pub async fn alert_stats(&self, user: &User, patient_id: Option<Uuid>) -> Result<AlertStats> {
        let base = AlertQuery::for_patients(scoped_patients(user, patient_id)?);
        let count = |q: AlertQuery| async move { self.store.count_alerts(&q).await };

        Ok(AlertStats {
            total: count(base.clone()).await?,
            unread: count(AlertQuery {
                is_read: Some(false),
                ..base.clone()
            })
            .await?,
            critical: count(AlertQuery {
                alert_type: Some(AlertType::Critical),
                ..base.clone()
            })
            .await?,
            warning: count(AlertQuery {
                alert_type: Some(AlertType::Warning),
                ..base.clone()
            })
            .await?,
            resolved: count(AlertQuery {
                is_resolved: Some(true),
                ..base
            })
            .await?,
        })
    }

    // Dashboards

    pub async fn patient_dashboard(&self, user: &User) -> Result<PatientDashboard> {
        if user.role != Role::Patient {
            return Err(HealthError::forbidden("This endpoint is only for patients"));
        }
        let mine = AlertQuery::for_patients(vec![user.id]);
        let record = self.store.patient(user.id).await?;
        let since = Utc::now() - Duration::hours(24);

        Ok(PatientDashboard {
            user: user.to_info(),
            latest_vitals: self.store.latest_vitals(user.id).await?,
            total_alerts: self.store.count_alerts(&mine).await?,
            unread_alerts: self
                .store
                .count_alerts(&AlertQuery {
                    is_read: Some(false),
                    ..mine
                })
                .await?,
            device: DeviceStatus {
                calibrated: record.as_ref().is_some_and(|r| r.device_calibrated),
                device_id: record.as_ref().and_then(|r| r.device_id.clone()),
                last_calibration: record.as_ref().and_then(|r| r.last_calibration_date),
            },
            measurements_24h: self.store.count_vitals(&[user.id], since, false).await?,
        })
    }

    pub async fn caregiver_dashboard(&self, user: &User) -> Result<CaregiverDashboard> {
        if user.role != Role::Caregiver {
            return Err(HealthError::forbidden(
                "This endpoint is only for caregivers",
            ));
        }
        let assigned = AlertQuery::for_patients(user.assigned_patients.clone());
        let recent = self
            .store
            .alerts(&AlertQuery {
                limit: Some(RECENT_ALERTS),
                ..assigned.clone()
            })
            .await?;

        Ok(CaregiverDashboard {
            user: user.to_info(),
            patient_count: user.assigned_patients.len(),
            assigned_patient_ids: user.assigned_patients.clone(),
            total_alerts: self.store.count_alerts(&assigned).await?,
            unread_alerts: self
                .store
                .count_alerts(&AlertQuery {
                    is_read: Some(false),
                    ..assigned.clone()
                })
                .await?,
            critical_alerts: self
                .store
                .count_alerts(&AlertQuery {
                    alert_type: Some(AlertType::Critical),
                    is_resolved: Some(false),
                    ..assigned
                })
                .await?,
            recent_alerts: recent.iter().map(Alert::brief).collect(),
        })
    }

    pub async fn clinician_dashboard(&self, user: &User) -> Result<ClinicianDashboard> {
        if user.role != Role::Clinician {
            return Err(HealthError::forbidden(
                "This endpoint is only for clinicians",
            ));
        }
        let patients = &user.assigned_patients;
        let today = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
        let assigned = AlertQuery::for_patients(patients.clone());

        let measurements_today = self.store.count_vitals(patients, today, false).await?;
        let recent_critical = self
            .store
            .alerts(&AlertQuery {
                alert_type: Some(AlertType::Critical),
                limit: Some(RECENT_ALERTS),
                ..assigned.clone()
            })
            .await?;

        Ok(ClinicianDashboard {
            user: user.to_info(),
            patient_count: patients.len(),
            measurements_today,
            anomalies_today: self.store.count_vitals(patients, today, true).await?,
            total_alerts: self.store.count_alerts(&assigned).await?,
            critical_unresolved: self
                .store
                .count_alerts(&AlertQuery {
                    alert_type: Some(AlertType::Critical),
                    is_resolved: Some(false),
                    ..assigned
                })
                .await?,
            recent_critical: recent_critical.iter().map(Alert::brief).collect(),
            average_measurements_per_patient: if patients.is_empty() {
                0.0
            } else {
                round2(measurements_today as f64 / patients.len() as f64)
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use chrono::DateTime;

    use crate::memory::MemoryStore;
    use crate::models::{AnomalyType, Gender, Severity};

    const PASSWORD: &str = "hunter22";

    fn fake_hash(password: &str) -> String {
        format!("hashed:{password}")
    }

    fn monitor() -> Monitor<MemoryStore> {
        Monitor::new(MemoryStore::new())
    }

    async fn register(monitor: &Monitor<MemoryStore>, email: &str, role: Role) -> User {
        monitor
            .register(
                RegisterRequest {
                    email: email.into(),
                    password: PASSWORD.into(),
                    full_name: format!("{role} user"),
                    role,
                    phone: None,
                    device_id: None,
                },
                fake_hash(PASSWORD),
            )
            .await
            .unwrap()
    }

    /// Patient plus a caregiver assigned to them, both re-read from the store.
    async fn household(monitor: &Monitor<MemoryStore>) -> (User, User) {
        let patient = register(monitor, "pat@example.com", Role::Patient).await;
        let carer = register(monitor, "care@example.com", Role::Caregiver).await;
        monitor
            .store()
            .assign_patient(carer.id, patient.id)
            .await
            .unwrap();
        let carer = monitor.user(carer.id).await.unwrap();
        (patient, carer)
    }

    fn vitals(heart_rate: i32) -> NewVitals {
        NewVitals {
            heart_rate: Some(heart_rate),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_register_rejects_duplicates() {
        let monitor = monitor();
        let user = register(&monitor, "Ana@Example.com", Role::Patient).await;
        assert_eq!(user.email, "ana@example.com");
        assert!(monitor.store().patient(user.id).await.unwrap().is_some());

        let err = monitor
            .register(
                RegisterRequest {
                    email: "ana@example.com".into(),
                    password: PASSWORD.into(),
                    full_name: "Other".into(),
                    role: Role::Caregiver,
                    phone: None,
                    device_id: None,
                },
                fake_hash(PASSWORD),
            )
            .await
            .unwrap_err();
        assert_eq!(err, HealthError::Conflict("Email already registered".into()));
    }

    #[tokio::test]
    async fn test_register_carer_has_no_patient_record() {
        let monitor = monitor();
        let carer = register(&monitor, "c@example.com", Role::Clinician).await;
        assert!(monitor.store().patient(carer.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_keeps_patient_device() {
        let monitor = monitor();
        let user = monitor
            .register(
                RegisterRequest {
                    email: "dev@example.com".into(),
                    password: PASSWORD.into(),
                    full_name: "Device Owner".into(),
                    role: Role::Patient,
                    phone: None,
                    device_id: Some("HW-DEVICE-0042".into()),
                },
                fake_hash(PASSWORD),
            )
            .await
            .unwrap();
        let record = monitor.store().patient(user.id).await.unwrap().unwrap();
        assert_eq!(record.device_id.as_deref(), Some("HW-DEVICE-0042"));
        assert!(!record.device_calibrated);
    }

    #[tokio::test]
    async fn test_authenticate() {
        let monitor = monitor();
        register(&monitor, "ana@example.com", Role::Patient).await;

        let ok = monitor
            .authenticate("ANA@example.com", |hash| hash == fake_hash(PASSWORD))
            .await
            .unwrap();
        assert_eq!(ok.email, "ana@example.com");

        let wrong = monitor
            .authenticate("ana@example.com", |_| false)
            .await
            .unwrap_err();
        assert_eq!(wrong.to_string(), "Incorrect email or password");

        let unknown = monitor
            .authenticate("nobody@example.com", |_| true)
            .await
            .unwrap_err();
        assert_eq!(unknown, wrong);
    }

    #[tokio::test]
    async fn test_inactive_user_cannot_sign_in() {
        let monitor = monitor();
        let mut user = register(&monitor, "ana@example.com", Role::Patient).await;
        user.is_active = false;
        monitor.store().update_user(&user).await.unwrap();

        let err = monitor
            .authenticate("ana@example.com", |_| true)
            .await
            .unwrap_err();
        assert_eq!(err, HealthError::forbidden("User account is inactive"));
    }

    #[tokio::test]
    async fn test_submit_vitals_raises_linked_alerts() {
        let monitor = monitor();
        let (patient, _) = household(&monitor).await;

        let reading = monitor.submit_vitals(&patient, vitals(135)).await.unwrap();
        assert!(reading.is_anomaly);
        assert_eq!(reading.anomaly_type, Some(AnomalyType::High));

        let alerts = monitor
            .list_alerts(&patient, AlertFilter::default())
            .await
            .unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].vital_reading_id, Some(reading.id));
        assert_eq!(alerts[0].alert_type, AlertType::Critical);
        assert_eq!(alerts[0].severity, Severity::High);

        let calm = monitor.submit_vitals(&patient, vitals(72)).await.unwrap();
        assert!(!calm.is_anomaly);
        assert_eq!(
            monitor
                .list_alerts(&patient, AlertFilter::default())
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_submit_vitals_is_patient_only() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;
        let err = monitor.submit_vitals(&carer, vitals(80)).await.unwrap_err();
        assert!(matches!(err, HealthError::Forbidden(_)));

        let err = monitor
            .submit_vitals(&patient, NewVitals::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_custom_thresholds_are_used() {
        let monitor = monitor();
        let (patient, _) = household(&monitor).await;
        let mut record = monitor.store().patient(patient.id).await.unwrap().unwrap();
        record.thresholds.heart_rate_max = 150;
        monitor.store().update_patient(&record).await.unwrap();

        let reading = monitor.submit_vitals(&patient, vitals(135)).await.unwrap();
        assert!(!reading.is_anomaly);
    }

    #[tokio::test]
    async fn test_live_vitals_access() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;

        let err = monitor.live_vitals(&patient, None).await.unwrap_err();
        assert_eq!(err, HealthError::not_found("No vital signs found"));

        monitor.submit_vitals(&patient, vitals(70)).await.unwrap();
        monitor.submit_vitals(&patient, vitals(75)).await.unwrap();

        // A patient's own id wins over whatever is passed.
        let own = monitor
            .live_vitals(&patient, Some(Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(own.patient_id, patient.id);

        let err = monitor.live_vitals(&carer, None).await.unwrap_err();
        assert_eq!(
            err,
            HealthError::BadRequest("patient_id is required for caregivers/clinicians".into())
        );

        let seen = monitor.live_vitals(&carer, Some(patient.id)).await.unwrap();
        assert_eq!(seen.patient_id, patient.id);

        let stranger = register(&monitor, "x@example.com", Role::Clinician).await;
        let err = monitor
            .live_vitals(&stranger, Some(patient.id))
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_history_and_trends() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;
        for hr in [60, 62, 80, 85] {
            monitor.submit_vitals(&patient, vitals(hr)).await.unwrap();
        }

        let history = monitor
            .vitals_history(&carer, Some(patient.id), None, Some(3))
            .await
            .unwrap();
        assert_eq!(history.len(), 3);

        let err = monitor
            .vitals_history(&patient, None, Some(0), None)
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Validation(_)));

        let trends = monitor
            .vitals_trends(&patient, None, TrendPeriod::Day)
            .await
            .unwrap();
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].data_points, 4);
        assert_eq!(trends[0].average, 71.75);

        let stranger = register(&monitor, "x@example.com", Role::Caregiver).await;
        let err = monitor
            .vitals_trends(&stranger, Some(patient.id), TrendPeriod::Week)
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_alert_workflow() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;
        monitor.submit_vitals(&patient, vitals(45)).await.unwrap();
        let alert = monitor
            .list_alerts(&carer, AlertFilter::default())
            .await
            .unwrap()
            .remove(0);

        let err = monitor.resolve_alert(&patient, alert.id).await.unwrap_err();
        assert_eq!(
            err,
            HealthError::forbidden("Only caregivers and clinicians can resolve alerts")
        );

        let read = monitor.mark_alert_read(&patient, alert.id).await.unwrap();
        assert!(read.is_read);
        assert_eq!(read.read_by, Some(patient.id));

        let resolved = monitor.resolve_alert(&carer, alert.id).await.unwrap();
        assert!(resolved.is_resolved);
        assert!(resolved.resolved_at.is_some());

        let err = monitor
            .mark_alert_read(&carer, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err, HealthError::not_found("Alert not found"));

        let stranger = register(&monitor, "x@example.com", Role::Clinician).await;
        let err = monitor
            .mark_alert_read(&stranger, alert.id)
            .await
            .unwrap_err();
        assert_eq!(err, HealthError::forbidden("Access denied"));
    }

    #[tokio::test]
    async fn test_list_alert_filters() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;
        monitor.submit_vitals(&patient, vitals(45)).await.unwrap();
        monitor.submit_vitals(&patient, vitals(110)).await.unwrap();

        let critical = monitor
            .list_alerts(
                &carer,
                AlertFilter {
                    patient_id: Some(patient.id),
                    alert_type: Some(AlertType::Critical),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(critical.len(), 1);

        let err = monitor
            .list_alerts(
                &carer,
                AlertFilter {
                    patient_id: Some(Uuid::new_v4()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Forbidden(_)));

        let err = monitor
            .list_alerts(
                &patient,
                AlertFilter {
                    limit: Some(501),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_manual_alerts() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;
        let new = NewAlert {
            patient_id: patient.id,
            alert_type: AlertType::Info,
            severity: None,
            title: "Check-in".into(),
            message: "Call me after lunch".into(),
            vital_type: None,
            vital_value: None,
            threshold_crossed: None,
        };

        let err = monitor.create_alert(&patient, new.clone()).await.unwrap_err();
        assert!(matches!(err, HealthError::Forbidden(_)));

        let alert = monitor.create_alert(&carer, new.clone()).await.unwrap();
        assert_eq!(alert.severity, Severity::Low);
        assert!(alert.vital_reading_id.is_none());

        let stranger = register(&monitor, "x@example.com", Role::Clinician).await;
        let err = monitor.create_alert(&stranger, new).await.unwrap_err();
        assert_eq!(err, HealthError::forbidden("Access denied to this patient"));
    }

    #[tokio::test]
    async fn test_alert_stats_match_lists() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;
        monitor.submit_vitals(&patient, vitals(45)).await.unwrap();
        monitor.submit_vitals(&patient, vitals(110)).await.unwrap();
        monitor
            .submit_vitals(
                &patient,
                NewVitals {
                    heart_rate: Some(130),
                    temperature: Some(38.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let all = monitor
            .list_alerts(&carer, AlertFilter::default())
            .await
            .unwrap();
        monitor.mark_alert_read(&carer, all[0].id).await.unwrap();
        monitor.resolve_alert(&carer, all[1].id).await.unwrap();

        let stats = monitor.alert_stats(&carer, None).await.unwrap();
        assert_eq!(stats.total, all.len() as i64);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.unread, 3);
        assert_eq!(stats.resolved, 1);
        assert_eq!(
            stats.critical + stats.warning,
            all.iter()
                .filter(|a| a.alert_type != AlertType::Info)
                .count() as i64
        );

        assert_eq!(monitor.alert_stats(&patient, None).await.unwrap(), stats);

        let stranger = register(&monitor, "x@example.com", Role::Caregiver).await;
        assert_eq!(
            monitor.alert_stats(&stranger, None).await.unwrap(),
            AlertStats::default()
        );
    }

    #[tokio::test]
    async fn test_create_patient_links_carers() {
        let monitor = monitor();
        let clinician = register(&monitor, "doc@example.com", Role::Clinician).await;
        let caregiver = register(&monitor, "mum@example.com", Role::Caregiver).await;

        let created = monitor
            .create_patient(
                &clinician,
                NewPatient {
                    email: "Kid@Example.com".into(),
                    full_name: "Lucas Pereira".into(),
                    age: Some(12),
                    gender: Some(Gender::Male),
                    allergies: vec!["peanuts".into()],
                    assigned_caregiver_id: Some(caregiver.id),
                    assigned_clinician_id: Some(clinician.id),
                    ..Default::default()
                },
                |pw| Ok(fake_hash(pw)),
            )
            .await
            .unwrap();
        assert_eq!(created.temporary_password, "Lucas123!");
        assert_eq!(created.email, "kid@example.com");

        let patient = monitor.user(created.user_id).await.unwrap();
        assert_eq!(patient.role, Role::Patient);
        assert_eq!(patient.assigned_caregiver, Some(caregiver.id));
        assert_eq!(patient.password_hash, fake_hash("Lucas123!"));
        assert!(patient.date_of_birth.is_some());

        let record = monitor.store().patient(patient.id).await.unwrap().unwrap();
        assert_eq!(record.allergies, vec!["peanuts".to_string()]);

        let clinician = monitor.user(clinician.id).await.unwrap();
        let caregiver = monitor.user(caregiver.id).await.unwrap();
        assert!(clinician.is_assigned(patient.id));
        assert!(caregiver.is_assigned(patient.id));

        let listed = monitor.assigned_patients(&caregiver).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].full_name, "Lucas Pereira");
    }

    #[tokio::test]
    async fn test_create_patient_rules() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;
        let new = NewPatient {
            email: "pat@example.com".into(),
            full_name: "Dup".into(),
            ..Default::default()
        };

        let err = monitor
            .create_patient(&patient, new.clone(), |pw| Ok(fake_hash(pw)))
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Forbidden(_)));

        let err = monitor
            .create_patient(&carer, new, |pw| Ok(fake_hash(pw)))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            HealthError::BadRequest("A user with this email already exists".into())
        );

        // Unknown carer ids are skipped, creation still succeeds.
        let created = monitor
            .create_patient(
                &carer,
                NewPatient {
                    email: "new@example.com".into(),
                    full_name: "New Patient".into(),
                    assigned_clinician_id: Some(Uuid::new_v4()),
                    ..Default::default()
                },
                |pw| Ok(fake_hash(pw)),
            )
            .await
            .unwrap();
        assert_eq!(created.full_name, "New Patient");
    }

    /// Memory store whose patient writes fail while `failing` is set. A failed
    /// account write stores nothing, like a rolled back transaction.
    struct FlakyStore {
        inner: MemoryStore,
        failing: AtomicBool,
    }

    impl FlakyStore {
        fn failing() -> Self {
            Self {
                inner: MemoryStore::new(),
                failing: AtomicBool::new(true),
            }
        }

        fn recover(&self) {
            self.failing.store(false, Ordering::SeqCst);
        }

        fn check(&self) -> Result<()> {
            if self.failing.load(Ordering::SeqCst) {
                Err(HealthError::store("disk full"))
            } else {
                Ok(())
            }
        }
    }

    impl HealthStore for FlakyStore {
        async fn insert_user(&self, user: &User) -> Result<()> {
            self.inner.insert_user(user).await
        }
        async fn user(&self, id: Uuid) -> Result<Option<User>> {
            self.inner.user(id).await
        }
        async fn user_by_email(&self, email: &str) -> Result<Option<User>> {
            self.inner.user_by_email(email).await
        }
        async fn update_user(&self, user: &User) -> Result<()> {
            self.inner.update_user(user).await
        }
        async fn assign_patient(&self, carer_id: Uuid, patient_id: Uuid) -> Result<bool> {
            self.inner.assign_patient(carer_id, patient_id).await
        }
        async fn insert_patient(&self, record: &PatientRecord) -> Result<()> {
            self.check()?;
            self.inner.insert_patient(record).await
        }
        async fn insert_patient_account(&self, user: &User, record: &PatientRecord) -> Result<()> {
            self.check()?;
            self.inner.insert_patient_account(user, record).await
        }
        async fn patient(&self, user_id: Uuid) -> Result<Option<PatientRecord>> {
            self.inner.patient(user_id).await
        }
        async fn update_patient(&self, record: &PatientRecord) -> Result<()> {
            self.inner.update_patient(record).await
        }
        async fn insert_vitals(&self, reading: &VitalReading) -> Result<()> {
            self.inner.insert_vitals(reading).await
        }
        async fn latest_vitals(&self, patient_id: Uuid) -> Result<Option<VitalReading>> {
            self.inner.latest_vitals(patient_id).await
        }
        async fn vitals_since(
            &self,
            patient_ids: &[Uuid],
            since: DateTime<Utc>,
            limit: Option<i64>,
        ) -> Result<Vec<VitalReading>> {
            self.inner.vitals_since(patient_ids, since, limit).await
        }
        async fn count_vitals(
            &self,
            patient_ids: &[Uuid],
            since: DateTime<Utc>,
            anomalies_only: bool,
        ) -> Result<i64> {
            self.inner.count_vitals(patient_ids, since, anomalies_only).await
        }
        async fn insert_alert(&self, alert: &Alert) -> Result<()> {
            self.inner.insert_alert(alert).await
        }
        async fn alert(&self, id: Uuid) -> Result<Option<Alert>> {
            self.inner.alert(id).await
        }
        async fn update_alert(&self, alert: &Alert) -> Result<()> {
            self.inner.update_alert(alert).await
        }
        async fn alerts(&self, query: &AlertQuery) -> Result<Vec<Alert>> {
            self.inner.alerts(query).await
        }
        async fn count_alerts(&self, query: &AlertQuery) -> Result<i64> {
            self.inner.count_alerts(query).await
        }
    }

    #[tokio::test]
    async fn test_failed_registration_leaves_no_account() {
        let monitor = Monitor::new(FlakyStore::failing());
        let request = RegisterRequest {
            email: "ana@example.com".into(),
            password: PASSWORD.into(),
            full_name: "Ana Souza".into(),
            role: Role::Patient,
            phone: None,
            device_id: None,
        };

        let err = monitor
            .register(request.clone(), fake_hash(PASSWORD))
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Store(_)));
        assert!(monitor
            .find_user_by_email("ana@example.com")
            .await
            .unwrap()
            .is_none());

        monitor.store().recover();
        let user = monitor.register(request, fake_hash(PASSWORD)).await.unwrap();
        assert!(monitor.store().patient(user.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_failed_patient_creation_leaves_no_account() {
        let monitor = Monitor::new(FlakyStore::failing());
        let carer = monitor
            .register(
                RegisterRequest {
                    email: "care@example.com".into(),
                    password: PASSWORD.into(),
                    full_name: "Carla".into(),
                    role: Role::Caregiver,
                    phone: None,
                    device_id: None,
                },
                fake_hash(PASSWORD),
            )
            .await
            .unwrap();
        let new = NewPatient {
            email: "kid@example.com".into(),
            full_name: "Lucas Pereira".into(),
            ..Default::default()
        };

        let err = monitor
            .create_patient(&carer, new.clone(), |pw| Ok(fake_hash(pw)))
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Store(_)));
        assert!(monitor
            .find_user_by_email("kid@example.com")
            .await
            .unwrap()
            .is_none());

        monitor.store().recover();
        let created = monitor
            .create_patient(&carer, new, |pw| Ok(fake_hash(pw)))
            .await
            .unwrap();
        assert!(monitor
            .store()
            .patient(created.user_id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_profile_update() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;

        let profile = monitor
            .update_profile(
                &patient,
                ProfileUpdate {
                    phone: Some("555-0100".into()),
                    blood_type: Some("O+".into()),
                    medications: Some(vec!["metformin".into()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(profile.phone.as_deref(), Some("555-0100"));
        assert_eq!(profile.blood_type.as_deref(), Some("O+"));
        assert_eq!(profile.medications, vec!["metformin".to_string()]);

        // Medical fields are dropped for carers.
        let profile = monitor
            .update_profile(
                &carer,
                ProfileUpdate {
                    full_name: Some("Carla".into()),
                    blood_type: Some("A-".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(profile.full_name, "Carla");
        assert!(profile.blood_type.is_none());

        let err = monitor
            .update_profile(
                &carer,
                ProfileUpdate {
                    full_name: Some("  ".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_profile_fields_can_be_cleared() {
        let monitor = monitor();
        let (patient, _) = household(&monitor).await;

        monitor
            .update_profile(
                &patient,
                ProfileUpdate {
                    phone: Some("555".into()),
                    blood_type: Some("O+".into()),
                    emergency_contact_name: Some("Rita".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let profile = monitor
            .update_profile(
                &patient,
                ProfileUpdate {
                    phone: Some(String::new()),
                    blood_type: Some("  ".into()),
                    emergency_contact_name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(profile.phone.is_none());
        assert!(profile.blood_type.is_none());
        assert!(profile.emergency_contact_name.is_none());

        // Omitted fields stay as they are.
        let profile = monitor
            .update_profile(
                &patient,
                ProfileUpdate {
                    phone: Some("555-0199".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(profile.phone.as_deref(), Some("555-0199"));
        assert!(profile.emergency_contact_name.is_none());
    }

    #[tokio::test]
    async fn test_patients_overview() {
        let monitor = monitor();
        let (patient, mut carer) = household(&monitor).await;
        monitor.submit_vitals(&patient, vitals(130)).await.unwrap();
        carer.assigned_patients.push(Uuid::new_v4());

        let overview = monitor.patients_overview(&carer).await.unwrap();
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].heart_rate, Some(130));
        assert!(overview[0].is_anomaly);

        let err = monitor.patients_overview(&patient).await.unwrap_err();
        assert_eq!(
            err,
            HealthError::forbidden("Access denied. Required roles: caregiver, clinician")
        );
    }

    #[tokio::test]
    async fn test_calibration() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;

        let err = monitor
            .record_calibration(&patient, " ")
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::Validation(_)));
        assert!(monitor.record_calibration(&carer, "HW-1").await.is_err());

        let done = monitor.record_calibration(&patient, "HW-1").await.unwrap();
        assert_eq!(done.device_id, "HW-1");

        let dashboard = monitor.patient_dashboard(&patient).await.unwrap();
        assert!(dashboard.device.calibrated);
        assert_eq!(dashboard.device.device_id.as_deref(), Some("HW-1"));
        assert_eq!(dashboard.device.last_calibration, Some(done.calibrated_at));
    }

    #[tokio::test]
    async fn test_dashboards_are_role_restricted() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;
        let clinician = register(&monitor, "doc@example.com", Role::Clinician).await;

        assert!(monitor.patient_dashboard(&carer).await.is_err());
        assert!(monitor.caregiver_dashboard(&patient).await.is_err());
        assert!(monitor.caregiver_dashboard(&clinician).await.is_err());
        assert!(monitor.clinician_dashboard(&carer).await.is_err());
    }

    #[tokio::test]
    async fn test_dashboard_counts() {
        let monitor = monitor();
        let (patient, carer) = household(&monitor).await;
        let clinician = register(&monitor, "doc@example.com", Role::Clinician).await;
        monitor
            .store()
            .assign_patient(clinician.id, patient.id)
            .await
            .unwrap();
        let clinician = monitor.user(clinician.id).await.unwrap();

        monitor.submit_vitals(&patient, vitals(72)).await.unwrap();
        monitor.submit_vitals(&patient, vitals(135)).await.unwrap();
        monitor.submit_vitals(&patient, vitals(45)).await.unwrap();

        let mine = monitor.patient_dashboard(&patient).await.unwrap();
        assert_eq!(mine.measurements_24h, 3);
        assert_eq!(mine.total_alerts, 2);
        assert_eq!(mine.unread_alerts, 2);
        assert!(mine.latest_vitals.is_some());

        let care = monitor.caregiver_dashboard(&carer).await.unwrap();
        assert_eq!(care.patient_count, 1);
        assert_eq!(care.total_alerts, 2);
        assert_eq!(care.critical_alerts, 2);
        assert_eq!(care.recent_alerts.len(), 2);

        let clinic = monitor.clinician_dashboard(&clinician).await.unwrap();
        assert_eq!(clinic.measurements_today, 3);
        assert_eq!(clinic.anomalies_today, 2);
        assert_eq!(clinic.critical_unresolved, 2);
        assert_eq!(clinic.average_measurements_per_patient, 3.0);
    }
}
