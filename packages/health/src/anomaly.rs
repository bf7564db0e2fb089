//! Threshold checks run on every submitted reading.
//!
//! Checks run in a fixed order (heart rate, systolic pressure, oxygen
//! saturation, temperature). Each breach produces one [`NewAlert`]; the reading's
//! `anomaly_type` is taken from the last breach found. Diastolic pressure and
//! respiratory rate are stored but not checked.

use uuid::Uuid;

use crate::models::{
    AlertType, AnomalyType, NewAlert, ThresholdCrossed, Thresholds, VitalReading,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnomalyReport {
    pub is_anomaly: bool,
    pub anomaly_type: Option<AnomalyType>,
    pub alerts: Vec<NewAlert>,
}

impl AnomalyReport {
    fn push(&mut self, direction: AnomalyType, alert: NewAlert) {
        self.is_anomaly = true;
        self.anomaly_type = Some(direction);
        self.alerts.push(alert);
    }
}

pub fn check_vitals(reading: &VitalReading, thresholds: &Thresholds) -> AnomalyReport {
    let mut report = AnomalyReport::default();
    let patient_id = reading.patient_id;

    if let Some(hr) = reading.heart_rate {
        let (min, max) = (thresholds.heart_rate_min, thresholds.heart_rate_max);
        if hr < min {
            report.push(
                AnomalyType::Low,
                vital_alert(
                    patient_id,
                    "heart_rate",
                    f64::from(hr),
                    ThresholdCrossed::BelowMin,
                    "Low Heart Rate Detected",
                    format!("Heart rate ({hr} BPM) is below minimum threshold ({min} BPM)"),
                    if hr >= min - 10 {
                        AlertType::Warning
                    } else {
                        AlertType::Critical
                    },
                ),
            );
        } else if hr > max {
            report.push(
                AnomalyType::High,
                vital_alert(
                    patient_id,
                    "heart_rate",
                    f64::from(hr),
                    ThresholdCrossed::AboveMax,
                    "High Heart Rate Detected",
                    format!("Heart rate ({hr} BPM) is above maximum threshold ({max} BPM)"),
                    if hr <= max + 20 {
                        AlertType::Warning
                    } else {
                        AlertType::Critical
                    },
                ),
            );
        }
    }

    if let Some(sys) = reading.systolic_bp {
        let (min, max) = (thresholds.systolic_bp_min, thresholds.systolic_bp_max);
        if sys < min {
            report.push(
                AnomalyType::Low,
                vital_alert(
                    patient_id,
                    "systolic_bp",
                    f64::from(sys),
                    ThresholdCrossed::BelowMin,
                    "Low Blood Pressure Detected",
                    format!("Systolic BP ({sys} mmHg) is below minimum threshold ({min} mmHg)"),
                    AlertType::Warning,
                ),
            );
        } else if sys > max {
            report.push(
                AnomalyType::High,
                vital_alert(
                    patient_id,
                    "systolic_bp",
                    f64::from(sys),
                    ThresholdCrossed::AboveMax,
                    "High Blood Pressure Detected",
                    format!("Systolic BP ({sys} mmHg) is above maximum threshold ({max} mmHg)"),
                    if sys > 180 {
                        AlertType::Critical
                    } else {
                        AlertType::Warning
                    },
                ),
            );
        }
    }

    if let Some(spo2) = reading.oxygen_saturation {
        let min = thresholds.oxygen_saturation_min;
        if spo2 < f64::from(min) {
            report.push(
                AnomalyType::Low,
                vital_alert(
                    patient_id,
                    "oxygen_saturation",
                    spo2,
                    ThresholdCrossed::BelowMin,
                    "Low Oxygen Saturation Detected",
                    format!("Oxygen saturation ({spo2}%) is below minimum threshold ({min}%)"),
                    if spo2 < 90.0 {
                        AlertType::Critical
                    } else {
                        AlertType::Warning
                    },
                ),
            );
        }
    }

    if let Some(temp) = reading.temperature {
        let (min, max) = (thresholds.temperature_min, thresholds.temperature_max);
        if temp < min {
            report.push(
                AnomalyType::Low,
                vital_alert(
                    patient_id,
                    "temperature",
                    temp,
                    ThresholdCrossed::BelowMin,
                    "Low Body Temperature Detected",
                    format!("Temperature ({temp}°C) is below minimum threshold ({min}°C)"),
                    AlertType::Warning,
                ),
            );
        } else if temp > max {
            report.push(
                AnomalyType::High,
                vital_alert(
                    patient_id,
                    "temperature",
                    temp,
                    ThresholdCrossed::AboveMax,
                    "High Body Temperature Detected",
                    format!("Temperature ({temp}°C) is above maximum threshold ({max}°C)"),
                    if temp > 39.0 {
                        AlertType::Critical
                    } else {
                        AlertType::Warning
                    },
                ),
            );
        }
    }

    report
}

fn vital_alert(
    patient_id: Uuid,
    vital_type: &str,
    vital_value: f64,
    threshold_crossed: ThresholdCrossed,
    title: &str,
    message: String,
    alert_type: AlertType,
) -> NewAlert {
    NewAlert {
        patient_id,
        alert_type,
        severity: Some(alert_type.into()),
        title: title.to_string(),
        message,
        vital_type: Some(vital_type.to_string()),
        vital_value: Some(vital_value),
        threshold_crossed: Some(threshold_crossed),
    }
}
