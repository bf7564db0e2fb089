use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementType {
    Manual,
    #[default]
    Automatic,
    Device,
}

impl MeasurementType {
    pub fn parse(s: &str) -> Option<MeasurementType> {
        match s {
            "manual" => Some(MeasurementType::Manual),
            "automatic" => Some(MeasurementType::Automatic),
            "device" => Some(MeasurementType::Device),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementType::Manual => "manual",
            MeasurementType::Automatic => "automatic",
            MeasurementType::Device => "device",
        }
    }
}

/// Direction of the most recent threshold breach on a reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyType {
    High,
    Low,
}

impl AnomalyType {
    pub fn parse(s: &str) -> Option<AnomalyType> {
        match s {
            "high" => Some(AnomalyType::High),
            "low" => Some(AnomalyType::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyType::High => "high",
            AnomalyType::Low => "low",
        }
    }
}

/// A reading as submitted by a patient or device.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewVitals {
    pub heart_rate: Option<i32>,
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    pub oxygen_saturation: Option<f64>,
    pub temperature: Option<f64>,
    pub respiratory_rate: Option<i32>,
    #[serde(default)]
    pub measurement_type: MeasurementType,
    pub device_id: Option<String>,
    pub notes: Option<String>,
    /// Defaults to the time of submission.
    pub measured_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub heart_rate: Option<i32>,
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    pub oxygen_saturation: Option<f64>,
    pub temperature: Option<f64>,
    pub respiratory_rate: Option<i32>,
    pub measurement_type: MeasurementType,
    pub device_id: Option<String>,
    pub is_anomaly: bool,
    pub anomaly_type: Option<AnomalyType>,
    pub notes: Option<String>,
    pub measured_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl VitalReading {
    pub fn from_new(patient_id: Uuid, new: NewVitals, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id,
            heart_rate: new.heart_rate,
            systolic_bp: new.systolic_bp,
            diastolic_bp: new.diastolic_bp,
            oxygen_saturation: new.oxygen_saturation,
            temperature: new.temperature,
            respiratory_rate: new.respiratory_rate,
            measurement_type: new.measurement_type,
            device_id: new.device_id,
            is_anomaly: false,
            anomaly_type: None,
            notes: new.notes,
            measured_at: new.measured_at.unwrap_or(now),
            created_at: now,
        }
    }

    /// Value of one vital as `f64`, if it was measured.
    pub fn value(&self, kind: VitalKind) -> Option<f64> {
        match kind {
            VitalKind::HeartRate => self.heart_rate.map(f64::from),
            VitalKind::SystolicBp => self.systolic_bp.map(f64::from),
            VitalKind::DiastolicBp => self.diastolic_bp.map(f64::from),
            VitalKind::OxygenSaturation => self.oxygen_saturation,
            VitalKind::Temperature => self.temperature,
            VitalKind::RespiratoryRate => self.respiratory_rate.map(f64::from),
        }
    }
}

/// The measured quantities of a reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    HeartRate,
    SystolicBp,
    DiastolicBp,
    OxygenSaturation,
    Temperature,
    RespiratoryRate,
}

impl VitalKind {
    pub const ALL: [VitalKind; 6] = [
        VitalKind::HeartRate,
        VitalKind::SystolicBp,
        VitalKind::DiastolicBp,
        VitalKind::OxygenSaturation,
        VitalKind::Temperature,
        VitalKind::RespiratoryRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VitalKind::HeartRate => "heart_rate",
            VitalKind::SystolicBp => "systolic_bp",
            VitalKind::DiastolicBp => "diastolic_bp",
            VitalKind::OxygenSaturation => "oxygen_saturation",
            VitalKind::Temperature => "temperature",
            VitalKind::RespiratoryRate => "respiratory_rate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VitalKind::HeartRate => "Heart Rate",
            VitalKind::SystolicBp => "Systolic BP",
            VitalKind::DiastolicBp => "Diastolic BP",
            VitalKind::OxygenSaturation => "SpO2",
            VitalKind::Temperature => "Temperature",
            VitalKind::RespiratoryRate => "Respiratory Rate",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            VitalKind::HeartRate => "BPM",
            VitalKind::SystolicBp | VitalKind::DiastolicBp => "mmHg",
            VitalKind::OxygenSaturation => "%",
            VitalKind::Temperature => "°C",
            VitalKind::RespiratoryRate => "breaths/min",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendPeriod {
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl TrendPeriod {
    pub const ALL: [TrendPeriod; 3] = [TrendPeriod::Day, TrendPeriod::Week, TrendPeriod::Month];

    pub fn parse(s: &str) -> Option<TrendPeriod> {
        match s {
            "24h" => Some(TrendPeriod::Day),
            "7d" => Some(TrendPeriod::Week),
            "30d" => Some(TrendPeriod::Month),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendPeriod::Day => "24h",
            TrendPeriod::Week => "7d",
            TrendPeriod::Month => "30d",
        }
    }

    pub fn hours(&self) -> i64 {
        match self {
            TrendPeriod::Day => 24,
            TrendPeriod::Week => 24 * 7,
            TrendPeriod::Month => 24 * 30,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

/// Summary statistics for one vital over a period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalsTrend {
    pub vital: VitalKind,
    pub period: TrendPeriod,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub trend: TrendDirection,
    pub data_points: usize,
}

/// Acknowledgement returned after recording a device calibration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub device_id: String,
    pub calibrated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_defaults_measured_at_to_now() {
        let now = Utc::now();
        let reading = VitalReading::from_new(
            Uuid::new_v4(),
            NewVitals {
                heart_rate: Some(72),
                ..Default::default()
            },
            now,
        );
        assert_eq!(reading.measured_at, now);
        assert_eq!(reading.measurement_type, MeasurementType::Automatic);
        assert_eq!(reading.value(VitalKind::HeartRate), Some(72.0));
        assert_eq!(reading.value(VitalKind::Temperature), None);
    }

    #[test]
    fn trend_period_hours() {
        assert_eq!(TrendPeriod::Day.hours(), 24);
        assert_eq!(TrendPeriod::Week.hours(), 168);
        assert_eq!(TrendPeriod::Month.hours(), 720);
        for period in TrendPeriod::ALL {
            assert_eq!(TrendPeriod::parse(period.as_str()), Some(period));
        }
    }
}
