mod widgets;
pub use widgets::{AlertBriefList, AlertList, TrendsTable, VitalsSnapshot, VitalsTable};

mod patient_dashboard;
pub use patient_dashboard::PatientDashboardView;

mod caregiver_dashboard;
pub use caregiver_dashboard::CaregiverDashboardView;

mod clinician_dashboard;
pub use clinician_dashboard::ClinicianDashboardView;

mod live;
pub use live::{LiveMonitorView, LiveVitalsPanel, VitalsForm, LIVE_REFRESH};

mod history;
pub use history::{HistoryView, VitalsHistoryPanel};

mod alerts;
pub use alerts::{AlertsPanel, AlertsView};

mod calibration;
pub use calibration::CalibrationView;

mod profile;
pub use profile::ProfileView;

mod patients;
pub use patients::PatientsView;

mod patient_detail;
pub use patient_detail::PatientDetailView;

mod add_patient;
pub use add_patient::AddPatientView;

mod analysis;
pub use analysis::{AnalysisView, TrendsPanel};
