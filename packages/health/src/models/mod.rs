pub mod alert;
pub mod dashboard;
pub mod user;
pub mod vitals;

pub use alert::{
    Alert, AlertBrief, AlertFilter, AlertQuery, AlertStats, AlertType, NewAlert, Severity,
    ThresholdCrossed,
};
pub use dashboard::{CaregiverDashboard, ClinicianDashboard, DeviceStatus, PatientDashboard};
pub use user::{
    Gender, NewPatient, PatientCreated, PatientOverview, PatientRecord, PatientSummary,
    ProfileUpdate, RegisterRequest, Thresholds, User, UserInfo, UserProfile,
};
pub use vitals::{
    AnomalyType, Calibration, MeasurementType, NewVitals, TrendDirection, TrendPeriod,
    VitalKind, VitalReading, VitalsTrend,
};
