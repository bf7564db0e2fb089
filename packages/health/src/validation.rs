//! Input checks shared by the forms and the server functions.

use chrono::{Datelike, NaiveDate};

use crate::error::{HealthError, Result};
use crate::models::NewVitals;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const DEFAULT_ALERT_LIMIT: i64 = 50;
pub const MAX_ALERT_LIMIT: i64 = 500;
pub const DEFAULT_HISTORY_HOURS: i64 = 24;
pub const MAX_HISTORY_HOURS: i64 = 720;
pub const DEFAULT_HISTORY_LIMIT: i64 = 100;
pub const MAX_HISTORY_LIMIT: i64 = 1000;

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Loose address check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Registration form checks, in the order the form reports them.
pub fn validate_registration(
    full_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<()> {
    if [full_name, email, password, confirm_password]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(HealthError::Validation("Please fill in all fields".into()));
    }
    if !is_valid_email(email) {
        return Err(HealthError::Validation(
            "Please enter a valid email address".into(),
        ));
    }
    if password != confirm_password {
        return Err(HealthError::Validation(
            "Passwords do not match. Please try again.".into(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(HealthError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long."
        )));
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(HealthError::Validation("Please fill in all fields".into()));
    }
    Ok(())
}

fn check_range<T: PartialOrd + std::fmt::Display + Copy>(
    name: &str,
    value: Option<T>,
    min: T,
    max: T,
) -> Result<()> {
    match value {
        Some(v) if v < min || v > max => Err(HealthError::Validation(format!(
            "{name} must be between {min} and {max}"
        ))),
        _ => Ok(()),
    }
}

pub fn validate_vitals(vitals: &NewVitals) -> Result<()> {
    if vitals.heart_rate.is_none()
        && vitals.systolic_bp.is_none()
        && vitals.diastolic_bp.is_none()
        && vitals.oxygen_saturation.is_none()
        && vitals.temperature.is_none()
        && vitals.respiratory_rate.is_none()
    {
        return Err(HealthError::Validation(
            "At least one vital sign is required".into(),
        ));
    }
    check_range("Heart rate", vitals.heart_rate, 0, 300)?;
    check_range("Systolic BP", vitals.systolic_bp, 0, 300)?;
    check_range("Diastolic BP", vitals.diastolic_bp, 0, 200)?;
    check_range("Oxygen saturation", vitals.oxygen_saturation, 0.0, 100.0)?;
    check_range("Temperature", vitals.temperature, 30.0, 45.0)?;
    check_range("Respiratory rate", vitals.respiratory_rate, 0, 100)?;
    if vitals.oxygen_saturation.is_some_and(f64::is_nan) || vitals.temperature.is_some_and(f64::is_nan) {
        return Err(HealthError::Validation("Vital values must be numbers".into()));
    }
    Ok(())
}

fn bounded(name: &str, value: Option<i64>, default: i64, max: i64) -> Result<i64> {
    let value = value.unwrap_or(default);
    if !(1..=max).contains(&value) {
        return Err(HealthError::Validation(format!(
            "{name} must be between 1 and {max}"
        )));
    }
    Ok(value)
}

pub fn alert_limit(limit: Option<i64>) -> Result<i64> {
    bounded("limit", limit, DEFAULT_ALERT_LIMIT, MAX_ALERT_LIMIT)
}

pub fn history_hours(hours: Option<i64>) -> Result<i64> {
    bounded("hours", hours, DEFAULT_HISTORY_HOURS, MAX_HISTORY_HOURS)
}

pub fn history_limit(limit: Option<i64>) -> Result<i64> {
    bounded("limit", limit, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT)
}

/// Initial password handed out for carer-created patients: first name + `123!`.
pub fn temporary_password(full_name: &str) -> String {
    let first = full_name.split_whitespace().next().unwrap_or("Patient");
    format!("{first}123!")
}

/// Approximate birth date (January 1st) from an age in years.
pub fn birth_date_from_age(age: u32, today: NaiveDate) -> Result<NaiveDate> {
    if age > 150 {
        return Err(HealthError::Validation(
            "Age must be between 0 and 150".into(),
        ));
    }
    NaiveDate::from_ymd_opt(today.year() - age as i32, 1, 1)
        .ok_or_else(|| HealthError::Validation("Invalid age".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_messages() {
        let err = validate_registration("", "a@b.co", "secret1", "secret1").unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");

        let err = validate_registration("Ana", "not-an-email", "secret1", "secret1").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address");

        let err = validate_registration("Ana", "a@b.co", "secret1", "secret2").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match. Please try again.");

        let err = validate_registration("Ana", "a@b.co", "abc", "abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password must be at least 6 characters long."
        );

        assert!(validate_registration("Ana", "a@b.co", "secret1", "secret1").is_ok());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("nurse@clinic.example"));
        assert!(is_valid_email("  padded@example.com "));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert_eq!(normalize_email(" Ana@Example.COM "), "ana@example.com");
    }

    #[test]
    fn vitals_ranges() {
        assert!(validate_vitals(&NewVitals::default()).is_err());
        assert!(validate_vitals(&NewVitals {
            heart_rate: Some(72),
            ..Default::default()
        })
        .is_ok());
        assert!(validate_vitals(&NewVitals {
            temperature: Some(29.9),
            ..Default::default()
        })
        .is_err());
        assert!(validate_vitals(&NewVitals {
            oxygen_saturation: Some(100.0),
            diastolic_bp: Some(201),
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn query_limits() {
        assert_eq!(alert_limit(None).unwrap(), 50);
        assert_eq!(alert_limit(Some(500)).unwrap(), 500);
        assert!(alert_limit(Some(0)).is_err());
        assert!(alert_limit(Some(501)).is_err());
        assert_eq!(history_hours(None).unwrap(), 24);
        assert!(history_hours(Some(721)).is_err());
        assert_eq!(history_limit(None).unwrap(), 100);
        assert!(history_limit(Some(1001)).is_err());
    }

    #[test]
    fn temporary_password_uses_first_name() {
        assert_eq!(temporary_password("Maria Silva"), "Maria123!");
        assert_eq!(temporary_password("  Joe "), "Joe123!");
    }

    #[test]
    fn birth_date_is_january_first() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            birth_date_from_age(40, today).unwrap(),
            NaiveDate::from_ymd_opt(1986, 1, 1).unwrap()
        );
        assert!(birth_date_from_age(151, today).is_err());
    }
}
