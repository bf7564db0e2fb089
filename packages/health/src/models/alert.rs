//! Alerts raised by anomaly detection or by carers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Critical,
    Warning,
    Info,
}

impl AlertType {
    pub fn parse(s: &str) -> Option<AlertType> {
        match s {
            "critical" => Some(AlertType::Critical),
            "warning" => Some(AlertType::Warning),
            "info" => Some(AlertType::Info),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Critical => "critical",
            AlertType::Warning => "warning",
            AlertType::Info => "info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn parse(s: &str) -> Option<Severity> {
        match s {
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl From<AlertType> for Severity {
    fn from(kind: AlertType) -> Self {
        match kind {
            AlertType::Critical => Severity::High,
            AlertType::Warning => Severity::Medium,
            AlertType::Info => Severity::Low,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdCrossed {
    AboveMax,
    BelowMin,
}

impl ThresholdCrossed {
    pub fn parse(s: &str) -> Option<ThresholdCrossed> {
        match s {
            "above_max" => Some(ThresholdCrossed::AboveMax),
            "below_min" => Some(ThresholdCrossed::BelowMin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdCrossed::AboveMax => "above_max",
            ThresholdCrossed::BelowMin => "below_min",
        }
    }
}

/// An alert as raised, before it is stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewAlert {
    pub patient_id: Uuid,
    pub alert_type: AlertType,
    /// Derived from `alert_type` when absent.
    pub severity: Option<Severity>,
    pub title: String,
    pub message: String,
    pub vital_type: Option<String>,
    pub vital_value: Option<f64>,
    pub threshold_crossed: Option<ThresholdCrossed>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub vital_reading_id: Option<Uuid>,
    pub alert_type: AlertType,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub vital_type: Option<String>,
    pub vital_value: Option<f64>,
    pub threshold_crossed: Option<ThresholdCrossed>,
    pub is_read: bool,
    pub is_resolved: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub read_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Alert {
    pub fn from_new(new: NewAlert, vital_reading_id: Option<Uuid>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: new.patient_id,
            vital_reading_id,
            severity: new.severity.unwrap_or_else(|| new.alert_type.into()),
            alert_type: new.alert_type,
            title: new.title,
            message: new.message,
            vital_type: new.vital_type,
            vital_value: new.vital_value,
            threshold_crossed: new.threshold_crossed,
            is_read: false,
            is_resolved: false,
            read_at: None,
            resolved_at: None,
            read_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn brief(&self) -> AlertBrief {
        AlertBrief {
            id: self.id,
            patient_id: self.patient_id,
            alert_type: self.alert_type,
            title: self.title.clone(),
            message: self.message.clone(),
            created_at: self.created_at,
        }
    }
}

/// Filter sent by the alerts page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertFilter {
    pub patient_id: Option<Uuid>,
    pub alert_type: Option<AlertType>,
    pub is_read: Option<bool>,
    pub is_resolved: Option<bool>,
    pub limit: Option<i64>,
}

/// Store-level alert query. An empty `patient_ids` matches nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct AlertQuery {
    pub patient_ids: Vec<Uuid>,
    pub alert_type: Option<AlertType>,
    pub is_read: Option<bool>,
    pub is_resolved: Option<bool>,
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
}

impl AlertQuery {
    pub fn for_patients(patient_ids: Vec<Uuid>) -> Self {
        Self {
            patient_ids,
            alert_type: None,
            is_read: None,
            is_resolved: None,
            since: None,
            limit: None,
        }
    }

    pub fn matches(&self, alert: &Alert) -> bool {
        self.patient_ids.contains(&alert.patient_id)
            && self.alert_type.is_none_or(|t| t == alert.alert_type)
            && self.is_read.is_none_or(|r| r == alert.is_read)
            && self.is_resolved.is_none_or(|r| r == alert.is_resolved)
            && self.since.is_none_or(|s| alert.created_at >= s)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertStats {
    pub total: i64,
    pub unread: i64,
    pub critical: i64,
    pub warning: i64,
    pub resolved: i64,
}

/// Compact alert for dashboard lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertBrief {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
