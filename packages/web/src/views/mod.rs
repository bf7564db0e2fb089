mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod layouts;
pub use layouts::{CaregiverLayout, ClinicianLayout, PatientLayout};
