//! Per-vital statistics over a trend period.

use crate::models::{TrendDirection, TrendPeriod, VitalKind, VitalReading, VitalsTrend};

/// Relative change between half-means below which a series counts as stable.
const STABLE_BAND: f64 = 0.02;

/// Summaries for every vital with at least one value in `readings`.
///
/// Readings may arrive in any order; direction is computed over them sorted
/// oldest first.
pub fn compute_trends(readings: &[VitalReading], period: TrendPeriod) -> Vec<VitalsTrend> {
    let mut ordered: Vec<&VitalReading> = readings.iter().collect();
    ordered.sort_by_key(|r| r.measured_at);

    VitalKind::ALL
        .iter()
        .filter_map(|&kind| {
            let values: Vec<f64> = ordered.iter().filter_map(|r| r.value(kind)).collect();
            summarize(kind, period, &values)
        })
        .collect()
}

fn summarize(kind: VitalKind, period: TrendPeriod, values: &[f64]) -> Option<VitalsTrend> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(VitalsTrend {
        vital: kind,
        period,
        average: round2(mean(values)),
        min,
        max,
        trend: direction(values),
        data_points: values.len(),
    })
}

fn direction(values: &[f64]) -> TrendDirection {
    if values.len() < 2 {
        return TrendDirection::Stable;
    }
    let (older, newer) = values.split_at(values.len() / 2);
    let before = mean(older);
    let after = mean(newer);
    if before == 0.0 {
        return TrendDirection::Stable;
    }
    let change = (after - before) / before.abs();
    if change > STABLE_BAND {
        TrendDirection::Increasing
    } else if change < -STABLE_BAND {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::models::NewVitals;

    fn series(heart_rates: &[i32]) -> Vec<VitalReading> {
        let patient = Uuid::new_v4();
        let start = Utc::now() - Duration::hours(heart_rates.len() as i64);
        heart_rates
            .iter()
            .enumerate()
            .map(|(i, &hr)| {
                VitalReading::from_new(
                    patient,
                    NewVitals {
                        heart_rate: Some(hr),
                        measured_at: Some(start + Duration::hours(i as i64)),
                        ..Default::default()
                    },
                    Utc::now(),
                )
            })
            .collect()
    }

    #[test]
    fn empty_input_has_no_trends() {
        assert!(compute_trends(&[], TrendPeriod::Day).is_empty());
    }

    #[test]
    fn only_measured_vitals_are_reported() {
        let trends = compute_trends(&series(&[70, 72, 74]), TrendPeriod::Week);
        assert_eq!(trends.len(), 1);
        let hr = &trends[0];
        assert_eq!(hr.vital, VitalKind::HeartRate);
        assert_eq!(hr.period, TrendPeriod::Week);
        assert_eq!(hr.average, 72.0);
        assert_eq!(hr.min, 70.0);
        assert_eq!(hr.max, 74.0);
        assert_eq!(hr.data_points, 3);
    }

    #[test]
    fn average_is_rounded() {
        let trends = compute_trends(&series(&[70, 71, 71]), TrendPeriod::Day);
        assert_eq!(trends[0].average, 70.67);
    }

    #[test]
    fn direction_compares_halves() {
        let rising = compute_trends(&series(&[60, 62, 80, 85]), TrendPeriod::Day);
        assert_eq!(rising[0].trend, TrendDirection::Increasing);

        let falling = compute_trends(&series(&[90, 88, 70, 65]), TrendPeriod::Day);
        assert_eq!(falling[0].trend, TrendDirection::Decreasing);

        let flat = compute_trends(&series(&[70, 71, 71, 70]), TrendPeriod::Day);
        assert_eq!(flat[0].trend, TrendDirection::Stable);

        let single = compute_trends(&series(&[70]), TrendPeriod::Day);
        assert_eq!(single[0].trend, TrendDirection::Stable);
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut readings = series(&[60, 62, 80, 85]);
        readings.reverse();
        let trends = compute_trends(&readings, TrendPeriod::Day);
        assert_eq!(trends[0].trend, TrendDirection::Increasing);
    }
}
