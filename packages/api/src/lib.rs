//! # API crate: fullstack server functions for HyperWatch
//!
//! Every endpoint the dashboard calls is a Dioxus server function defined here.
//! Each one is compiled twice: the real body behind `#[cfg(feature = "server")]`
//! and a client stub behind `#[cfg(not(feature = "server"))]` that the macro
//! turns into an HTTP call.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Argon2 password hashing, session sign-in state |
//! | [`db`] | `server` | PostgreSQL pool, migrations and the `PgStore` |
//! | `settings` | `server` | Layered configuration (`config` crate) |
//!
//! ## Server functions
//!
//! - **Status**: `get_status`
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`
//! - **Users**: `get_profile`, `update_profile`, `list_patients`, `patients_overview`, `create_patient`
//! - **Vitals**: `submit_vitals`, `live_vitals`, `vitals_history`, `vitals_trends`, `calibrate_device`
//! - **Alerts**: `list_alerts`, `create_alert`, `mark_alert_read`, `resolve_alert`, `alert_stats`
//! - **Dashboards**: `patient_dashboard`, `caregiver_dashboard`, `clinician_dashboard`
//!
//! Domain failures reach the client as `ServerFnError` carrying the
//! [`HealthError`](health::HealthError) message.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod auth;
#[cfg(feature = "server")]
mod context;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod settings;

pub use health::models::{
    Alert, AlertFilter, AlertStats, Calibration, CaregiverDashboard, ClinicianDashboard,
    NewAlert, NewPatient, NewVitals, PatientCreated, PatientDashboard, PatientOverview,
    PatientSummary, ProfileUpdate, TrendPeriod, UserInfo, UserProfile, VitalReading, VitalsTrend,
};
pub use health::Role;

#[cfg(feature = "server")]
use crate::error::server_error;

/// Service status for health checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusInfo {
    pub name: String,
    pub version: String,
    pub status: String,
}

#[cfg(feature = "server")]
#[get("/api/status")]
pub async fn get_status() -> Result<StatusInfo, ServerFnError> {
    let settings = settings::Settings::new().map_err(server_error)?;
    Ok(StatusInfo {
        name: settings.app.name,
        version: settings.app.version,
        status: "healthy".into(),
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/status")]
pub async fn get_status() -> Result<StatusInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// Authentication

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let Some(user_id) = auth::session_user_id(&session)
        .await
        .map_err(server_error)?
    else {
        return Ok(None);
    };

    let monitor = context::monitor().await.map_err(server_error)?;
    match monitor.user(user_id).await {
        Ok(user) if user.is_active => Ok(Some(user.to_info())),
        Ok(_) | Err(health::HealthError::Unauthorized(_) | health::HealthError::NotFound(_)) => {
            Ok(None)
        }
        Err(e) => Err(server_error(e)),
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Create an account. The caller signs in separately.
#[cfg(feature = "server")]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    full_name: String,
    role: Role,
    phone: Option<String>,
    device_id: Option<String>,
) -> Result<UserInfo, ServerFnError> {
    use health::models::RegisterRequest;
    use health::validation::validate_registration;

    validate_registration(&full_name, &email, &password, &password).map_err(server_error)?;

    let password_hash = auth::hash_password(&password).map_err(server_error)?;
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = monitor
        .register(
            RegisterRequest {
                email,
                password,
                full_name,
                role,
                phone,
                device_id,
            },
            password_hash,
        )
        .await
        .map_err(server_error)?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    full_name: String,
    role: Role,
    phone: Option<String>,
    device_id: Option<String>,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    health::validation::validate_login(&email, &password).map_err(server_error)?;

    let monitor = context::monitor().await.map_err(server_error)?;
    let user = monitor
        .authenticate(&email, |hash| {
            auth::verify_password(&password, hash).unwrap_or(false)
        })
        .await
        .map_err(server_error)?;

    auth::sign_in(&session, user.id).await.map_err(server_error)?;
    tracing::info!(user_id = %user.id, role = %user.role, "user signed in");

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    auth::sign_out(&session).await.map_err(server_error)?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

// Users

#[cfg(feature = "server")]
#[get("/api/users/profile", session: tower_sessions::Session)]
pub async fn get_profile() -> Result<UserProfile, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor.profile(&user).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/users/profile")]
pub async fn get_profile() -> Result<UserProfile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/users/profile/update", session: tower_sessions::Session)]
pub async fn update_profile(update: ProfileUpdate) -> Result<UserProfile, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor
        .update_profile(&user, update)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/users/profile/update")]
pub async fn update_profile(update: ProfileUpdate) -> Result<UserProfile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Patients assigned to the signed-in caregiver or clinician.
#[cfg(feature = "server")]
#[get("/api/users/patients", session: tower_sessions::Session)]
pub async fn list_patients() -> Result<Vec<PatientSummary>, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor.assigned_patients(&user).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/users/patients")]
pub async fn list_patients() -> Result<Vec<PatientSummary>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Assigned patients with their latest reading.
#[cfg(feature = "server")]
#[get("/api/users/patients/overview", session: tower_sessions::Session)]
pub async fn patients_overview() -> Result<Vec<PatientOverview>, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor.patients_overview(&user).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/users/patients/overview")]
pub async fn patients_overview() -> Result<Vec<PatientOverview>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/users/patients/create", session: tower_sessions::Session)]
pub async fn create_patient(patient: NewPatient) -> Result<PatientCreated, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor
        .create_patient(&user, patient, |password| {
            auth::hash_password(password).map_err(health::HealthError::store)
        })
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/users/patients/create")]
pub async fn create_patient(patient: NewPatient) -> Result<PatientCreated, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// Vitals

/// Record a reading for the signed-in patient and raise any threshold alerts.
#[cfg(feature = "server")]
#[post("/api/vitals/submit", session: tower_sessions::Session)]
pub async fn submit_vitals(vitals: NewVitals) -> Result<VitalReading, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor
        .submit_vitals(&user, vitals)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/vitals/submit")]
pub async fn submit_vitals(vitals: NewVitals) -> Result<VitalReading, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Latest reading, or `None` when the patient has never submitted one.
#[cfg(feature = "server")]
#[post("/api/vitals/live", session: tower_sessions::Session)]
pub async fn live_vitals(patient_id: Option<Uuid>) -> Result<Option<VitalReading>, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    match monitor.live_vitals(&user, patient_id).await {
        Ok(reading) => Ok(Some(reading)),
        Err(health::HealthError::NotFound(_)) => Ok(None),
        Err(e) => Err(server_error(e)),
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/vitals/live")]
pub async fn live_vitals(patient_id: Option<Uuid>) -> Result<Option<VitalReading>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/vitals/history", session: tower_sessions::Session)]
pub async fn vitals_history(
    patient_id: Option<Uuid>,
    hours: Option<i64>,
    limit: Option<i64>,
) -> Result<Vec<VitalReading>, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor
        .vitals_history(&user, patient_id, hours, limit)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/vitals/history")]
pub async fn vitals_history(
    patient_id: Option<Uuid>,
    hours: Option<i64>,
    limit: Option<i64>,
) -> Result<Vec<VitalReading>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/vitals/trends", session: tower_sessions::Session)]
pub async fn vitals_trends(
    patient_id: Option<Uuid>,
    period: TrendPeriod,
) -> Result<Vec<VitalsTrend>, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor
        .vitals_trends(&user, patient_id, period)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/vitals/trends")]
pub async fn vitals_trends(
    patient_id: Option<Uuid>,
    period: TrendPeriod,
) -> Result<Vec<VitalsTrend>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mark the signed-in patient's device as calibrated now.
#[cfg(feature = "server")]
#[post("/api/vitals/calibrate", session: tower_sessions::Session)]
pub async fn calibrate_device(device_id: String) -> Result<Calibration, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor
        .record_calibration(&user, &device_id)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/vitals/calibrate")]
pub async fn calibrate_device(device_id: String) -> Result<Calibration, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// Alerts

#[cfg(feature = "server")]
#[post("/api/alerts", session: tower_sessions::Session)]
pub async fn list_alerts(filter: AlertFilter) -> Result<Vec<Alert>, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor.list_alerts(&user, filter).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/alerts")]
pub async fn list_alerts(filter: AlertFilter) -> Result<Vec<Alert>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Manual alert raised by a caregiver or clinician.
#[cfg(feature = "server")]
#[post("/api/alerts/create", session: tower_sessions::Session)]
pub async fn create_alert(alert: NewAlert) -> Result<Alert, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor.create_alert(&user, alert).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/alerts/create")]
pub async fn create_alert(alert: NewAlert) -> Result<Alert, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/alerts/read", session: tower_sessions::Session)]
pub async fn mark_alert_read(alert_id: Uuid) -> Result<Alert, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor
        .mark_alert_read(&user, alert_id)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/alerts/read")]
pub async fn mark_alert_read(alert_id: Uuid) -> Result<Alert, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/alerts/resolve", session: tower_sessions::Session)]
pub async fn resolve_alert(alert_id: Uuid) -> Result<Alert, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor
        .resolve_alert(&user, alert_id)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/alerts/resolve")]
pub async fn resolve_alert(alert_id: Uuid) -> Result<Alert, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/alerts/stats", session: tower_sessions::Session)]
pub async fn alert_stats(patient_id: Option<Uuid>) -> Result<AlertStats, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor
        .alert_stats(&user, patient_id)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/alerts/stats")]
pub async fn alert_stats(patient_id: Option<Uuid>) -> Result<AlertStats, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// Dashboards

#[cfg(feature = "server")]
#[get("/api/dashboard/patient", session: tower_sessions::Session)]
pub async fn patient_dashboard() -> Result<PatientDashboard, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor.patient_dashboard(&user).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/dashboard/patient")]
pub async fn patient_dashboard() -> Result<PatientDashboard, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/dashboard/caregiver", session: tower_sessions::Session)]
pub async fn caregiver_dashboard() -> Result<CaregiverDashboard, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor.caregiver_dashboard(&user).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/dashboard/caregiver")]
pub async fn caregiver_dashboard() -> Result<CaregiverDashboard, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/dashboard/clinician", session: tower_sessions::Session)]
pub async fn clinician_dashboard() -> Result<ClinicianDashboard, ServerFnError> {
    let monitor = context::monitor().await.map_err(server_error)?;
    let user = context::current_user(&session, &monitor)
        .await
        .map_err(server_error)?;
    monitor.clinician_dashboard(&user).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/dashboard/clinician")]
pub async fn clinician_dashboard() -> Result<ClinicianDashboard, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
