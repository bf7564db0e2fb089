use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::alert::AlertBrief;
use super::user::UserInfo;
use super::vitals::VitalReading;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub calibrated: bool,
    pub device_id: Option<String>,
    pub last_calibration: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientDashboard {
    pub user: UserInfo,
    pub latest_vitals: Option<VitalReading>,
    pub total_alerts: i64,
    pub unread_alerts: i64,
    pub device: DeviceStatus,
    pub measurements_24h: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaregiverDashboard {
    pub user: UserInfo,
    pub patient_count: usize,
    pub assigned_patient_ids: Vec<Uuid>,
    pub total_alerts: i64,
    pub unread_alerts: i64,
    /// Critical alerts not yet resolved.
    pub critical_alerts: i64,
    pub recent_alerts: Vec<AlertBrief>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClinicianDashboard {
    pub user: UserInfo,
    pub patient_count: usize,
    pub measurements_today: i64,
    pub anomalies_today: i64,
    pub total_alerts: i64,
    pub critical_unresolved: i64,
    pub recent_critical: Vec<AlertBrief>,
    pub average_measurements_per_patient: f64,
}
