//! Display and form-parsing helpers for the pages.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use health::models::{VitalKind, VitalReading};

pub const MISSING: &str = "--";

pub fn blood_pressure(systolic: Option<i32>, diastolic: Option<i32>) -> String {
    match (systolic, diastolic) {
        (Some(s), Some(d)) => format!("{s}/{d}"),
        (Some(s), None) => format!("{s}/{MISSING}"),
        (None, Some(d)) => format!("{MISSING}/{d}"),
        (None, None) => MISSING.to_string(),
    }
}

/// One vital with its unit, e.g. `"98.5 %"`.
pub fn vital(reading: &VitalReading, kind: VitalKind) -> String {
    match reading.value(kind) {
        Some(value) => format!("{} {}", number(value), kind.unit()),
        None => MISSING.to_string(),
    }
}

/// Whole numbers without a trailing `.0`, everything else to one decimal.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if elapsed.num_hours() < 24 {
        format!("{} h ago", elapsed.num_hours())
    } else {
        match elapsed.num_days() {
            1 => "1 day ago".to_string(),
            days => format!("{days} days ago"),
        }
    }
}

/// Empty input is `None`; anything else must parse.
pub fn parse_optional<T: FromStr>(input: &str, field: &str) -> Result<Option<T>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| format!("{field} must be a number"))
}

pub fn optional_text(input: &str) -> Option<String> {
    let input = input.trim();
    (!input.is_empty()).then(|| input.to_string())
}

/// Comma separated list, blanks dropped.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn blood_pressure_marks_missing_halves() {
        assert_eq!(blood_pressure(Some(120), Some(80)), "120/80");
        assert_eq!(blood_pressure(Some(120), None), "120/--");
        assert_eq!(blood_pressure(None, None), "--");
    }

    #[test]
    fn numbers_drop_trailing_zero() {
        assert_eq!(number(72.0), "72");
        assert_eq!(number(36.65), "36.6");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 min ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3 h ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_time(now - Duration::days(4), now), "4 days ago");
    }

    #[test]
    fn optional_numbers() {
        assert_eq!(parse_optional::<i32>("  ", "Heart rate"), Ok(None));
        assert_eq!(parse_optional::<i32>("72", "Heart rate"), Ok(Some(72)));
        assert_eq!(
            parse_optional::<i32>("fast", "Heart rate"),
            Err("Heart rate must be a number".to_string())
        );
    }

    #[test]
    fn lists_round_trip_through_text() {
        let items = split_list("penicillin, , latex ");
        assert_eq!(items, vec!["penicillin", "latex"]);
        assert_eq!(join_list(&items), "penicillin, latex");
    }
}
