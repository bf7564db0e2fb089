//! # PostgreSQL `HealthStore`
//!
//! Each table has a `*Row` struct deriving [`FromRow`] that mirrors its columns
//! one to one. Enum columns are stored as lowercase text and parsed back when a
//! row becomes a domain record; an unknown value surfaces as
//! [`HealthError::Store`] rather than being silently defaulted.
//!
//! A patient account (user row plus patient row) is written in one
//! transaction; dropping it on error rolls both back.
//!
//! Alert filters are expressed as nullable parameters
//! (`$2::text IS NULL OR alert_type = $2`) so listing and counting share one
//! `WHERE` clause.

use chrono::{DateTime, NaiveDate, Utc};
use health::models::{
    Alert, AlertQuery, AlertType, AnomalyType, Gender, MeasurementType, PatientRecord, Severity,
    ThresholdCrossed, Thresholds, User, VitalReading,
};
use health::{HealthError, HealthStore, Result, Role};
use sqlx::{FromRow, PgExecutor, PgPool};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(e: sqlx::Error) -> HealthError {
    tracing::error!("database error: {}", e);
    HealthError::store(e)
}

fn parse_column<T>(value: &str, column: &str, parse: fn(&str) -> Option<T>) -> Result<T> {
    parse(value).ok_or_else(|| HealthError::store(format!("unexpected {column} value '{value}'")))
}

fn parse_optional<T>(
    value: Option<String>,
    column: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>> {
    value.map(|v| parse_column(&v, column, parse)).transpose()
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    full_name: String,
    role: String,
    phone: Option<String>,
    date_of_birth: Option<NaiveDate>,
    gender: Option<String>,
    assigned_patients: Vec<Uuid>,
    assigned_caregiver: Option<Uuid>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = HealthError;

    fn try_from(row: UserRow) -> Result<Self> {
        Ok(User {
            role: parse_column(&row.role, "role", Role::parse)?,
            gender: parse_optional(row.gender, "gender", Gender::parse)?,
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            full_name: row.full_name,
            phone: row.phone,
            date_of_birth: row.date_of_birth,
            assigned_patients: row.assigned_patients,
            assigned_caregiver: row.assigned_caregiver,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PatientRow {
    user_id: Uuid,
    blood_type: Option<String>,
    allergies: Vec<String>,
    medications: Vec<String>,
    medical_conditions: Vec<String>,
    emergency_contact_name: Option<String>,
    emergency_contact_phone: Option<String>,
    emergency_contact_relationship: Option<String>,
    device_id: Option<String>,
    device_calibrated: bool,
    last_calibration_date: Option<DateTime<Utc>>,
    heart_rate_min: i32,
    heart_rate_max: i32,
    systolic_bp_min: i32,
    systolic_bp_max: i32,
    diastolic_bp_min: i32,
    diastolic_bp_max: i32,
    oxygen_saturation_min: i32,
    temperature_min: f64,
    temperature_max: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PatientRow> for PatientRecord {
    fn from(row: PatientRow) -> Self {
        PatientRecord {
            user_id: row.user_id,
            blood_type: row.blood_type,
            allergies: row.allergies,
            medications: row.medications,
            medical_conditions: row.medical_conditions,
            emergency_contact_name: row.emergency_contact_name,
            emergency_contact_phone: row.emergency_contact_phone,
            emergency_contact_relationship: row.emergency_contact_relationship,
            device_id: row.device_id,
            device_calibrated: row.device_calibrated,
            last_calibration_date: row.last_calibration_date,
            thresholds: Thresholds {
                heart_rate_min: row.heart_rate_min,
                heart_rate_max: row.heart_rate_max,
                systolic_bp_min: row.systolic_bp_min,
                systolic_bp_max: row.systolic_bp_max,
                diastolic_bp_min: row.diastolic_bp_min,
                diastolic_bp_max: row.diastolic_bp_max,
                oxygen_saturation_min: row.oxygen_saturation_min,
                temperature_min: row.temperature_min,
                temperature_max: row.temperature_max,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct VitalsRow {
    id: Uuid,
    patient_id: Uuid,
    heart_rate: Option<i32>,
    systolic_bp: Option<i32>,
    diastolic_bp: Option<i32>,
    oxygen_saturation: Option<f64>,
    temperature: Option<f64>,
    respiratory_rate: Option<i32>,
    measurement_type: String,
    device_id: Option<String>,
    is_anomaly: bool,
    anomaly_type: Option<String>,
    notes: Option<String>,
    measured_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl TryFrom<VitalsRow> for VitalReading {
    type Error = HealthError;

    fn try_from(row: VitalsRow) -> Result<Self> {
        Ok(VitalReading {
            measurement_type: parse_column(
                &row.measurement_type,
                "measurement_type",
                MeasurementType::parse,
            )?,
            anomaly_type: parse_optional(row.anomaly_type, "anomaly_type", AnomalyType::parse)?,
            id: row.id,
            patient_id: row.patient_id,
            heart_rate: row.heart_rate,
            systolic_bp: row.systolic_bp,
            diastolic_bp: row.diastolic_bp,
            oxygen_saturation: row.oxygen_saturation,
            temperature: row.temperature,
            respiratory_rate: row.respiratory_rate,
            device_id: row.device_id,
            is_anomaly: row.is_anomaly,
            notes: row.notes,
            measured_at: row.measured_at,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct AlertRow {
    id: Uuid,
    patient_id: Uuid,
    vital_reading_id: Option<Uuid>,
    alert_type: String,
    severity: String,
    title: String,
    message: String,
    vital_type: Option<String>,
    vital_value: Option<f64>,
    threshold_crossed: Option<String>,
    is_read: bool,
    is_resolved: bool,
    read_at: Option<DateTime<Utc>>,
    resolved_at: Option<DateTime<Utc>>,
    read_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AlertRow> for Alert {
    type Error = HealthError;

    fn try_from(row: AlertRow) -> Result<Self> {
        Ok(Alert {
            alert_type: parse_column(&row.alert_type, "alert_type", AlertType::parse)?,
            severity: parse_column(&row.severity, "severity", Severity::parse)?,
            threshold_crossed: parse_optional(
                row.threshold_crossed,
                "threshold_crossed",
                ThresholdCrossed::parse,
            )?,
            id: row.id,
            patient_id: row.patient_id,
            vital_reading_id: row.vital_reading_id,
            title: row.title,
            message: row.message,
            vital_type: row.vital_type,
            vital_value: row.vital_value,
            is_read: row.is_read,
            is_resolved: row.is_resolved,
            read_at: row.read_at,
            resolved_at: row.resolved_at,
            read_by: row.read_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

async fn write_user<'e, E: PgExecutor<'e>>(executor: E, user: &User) -> Result<()> {
    sqlx::query(
        "INSERT INTO users (id, email, password_hash, full_name, role, phone, date_of_birth,
                            gender, assigned_patients, assigned_caregiver, is_active,
                            created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.full_name)
    .bind(user.role.as_str())
    .bind(&user.phone)
    .bind(user.date_of_birth)
    .bind(user.gender.map(|g| g.as_str()))
    .bind(&user.assigned_patients)
    .bind(user.assigned_caregiver)
    .bind(user.is_active)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(executor)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            HealthError::Conflict("Email already registered".into())
        }
        e => db_error(e),
    })?;
    Ok(())
}

async fn write_patient<'e, E: PgExecutor<'e>>(executor: E, record: &PatientRecord) -> Result<()> {
    let t = &record.thresholds;
    sqlx::query(
        "INSERT INTO patients (user_id, blood_type, allergies, medications, medical_conditions,
                               emergency_contact_name, emergency_contact_phone,
                               emergency_contact_relationship, device_id, device_calibrated,
                               last_calibration_date, heart_rate_min, heart_rate_max,
                               systolic_bp_min, systolic_bp_max, diastolic_bp_min,
                               diastolic_bp_max, oxygen_saturation_min, temperature_min,
                               temperature_max, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                 $17, $18, $19, $20, $21, $22)",
    )
    .bind(record.user_id)
    .bind(&record.blood_type)
    .bind(&record.allergies)
    .bind(&record.medications)
    .bind(&record.medical_conditions)
    .bind(&record.emergency_contact_name)
    .bind(&record.emergency_contact_phone)
    .bind(&record.emergency_contact_relationship)
    .bind(&record.device_id)
    .bind(record.device_calibrated)
    .bind(record.last_calibration_date)
    .bind(t.heart_rate_min)
    .bind(t.heart_rate_max)
    .bind(t.systolic_bp_min)
    .bind(t.systolic_bp_max)
    .bind(t.diastolic_bp_min)
    .bind(t.diastolic_bp_max)
    .bind(t.oxygen_saturation_min)
    .bind(t.temperature_min)
    .bind(t.temperature_max)
    .bind(record.created_at)
    .bind(record.updated_at)
    .execute(executor)
    .await
    .map_err(db_error)?;
    Ok(())
}

const ALERT_FILTER: &str = "WHERE patient_id = ANY($1)
      AND ($2::text IS NULL OR alert_type = $2)
      AND ($3::boolean IS NULL OR is_read = $3)
      AND ($4::boolean IS NULL OR is_resolved = $4)
      AND ($5::timestamptz IS NULL OR created_at >= $5)";

impl HealthStore for PgStore {
    async fn insert_user(&self, user: &User) -> Result<()> {
        write_user(&self.pool, user).await
    }

    async fn user(&self, id: Uuid) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        row.map(User::try_from).transpose()
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        row.map(User::try_from).transpose()
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let result = sqlx::query(
            "UPDATE users SET full_name = $2, phone = $3, date_of_birth = $4, gender = $5,
                              assigned_patients = $6, assigned_caregiver = $7, is_active = $8,
                              updated_at = $9
             WHERE id = $1",
        )
        .bind(user.id)
        .bind(&user.full_name)
        .bind(&user.phone)
        .bind(user.date_of_birth)
        .bind(user.gender.map(|g| g.as_str()))
        .bind(&user.assigned_patients)
        .bind(user.assigned_caregiver)
        .bind(user.is_active)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(HealthError::not_found("User not found"));
        }
        Ok(())
    }

    async fn assign_patient(&self, carer_id: Uuid, patient_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE users
             SET assigned_patients = CASE
                     WHEN $2 = ANY(assigned_patients) THEN assigned_patients
                     ELSE array_append(assigned_patients, $2)
                 END,
                 updated_at = NOW()
             WHERE id = $1",
        )
        .bind(carer_id)
        .bind(patient_id)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(result.rows_affected() == 1)
    }

    async fn insert_patient(&self, record: &PatientRecord) -> Result<()> {
        write_patient(&self.pool, record).await
    }

    async fn insert_patient_account(&self, user: &User, record: &PatientRecord) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;
        write_user(&mut *tx, user).await?;
        write_patient(&mut *tx, record).await?;
        tx.commit().await.map_err(db_error)?;
        Ok(())
    }

    async fn patient(&self, user_id: Uuid) -> Result<Option<PatientRecord>> {
        let row: Option<PatientRow> = sqlx::query_as("SELECT * FROM patients WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(row.map(PatientRecord::from))
    }

    async fn update_patient(&self, record: &PatientRecord) -> Result<()> {
        let t = &record.thresholds;
        let result = sqlx::query(
            "UPDATE patients SET blood_type = $2, allergies = $3, medications = $4,
                                 medical_conditions = $5, emergency_contact_name = $6,
                                 emergency_contact_phone = $7, emergency_contact_relationship = $8,
                                 device_id = $9, device_calibrated = $10,
                                 last_calibration_date = $11, heart_rate_min = $12,
                                 heart_rate_max = $13, systolic_bp_min = $14, systolic_bp_max = $15,
                                 diastolic_bp_min = $16, diastolic_bp_max = $17,
                                 oxygen_saturation_min = $18, temperature_min = $19,
                                 temperature_max = $20, updated_at = $21
             WHERE user_id = $1",
        )
        .bind(record.user_id)
        .bind(&record.blood_type)
        .bind(&record.allergies)
        .bind(&record.medications)
        .bind(&record.medical_conditions)
        .bind(&record.emergency_contact_name)
        .bind(&record.emergency_contact_phone)
        .bind(&record.emergency_contact_relationship)
        .bind(&record.device_id)
        .bind(record.device_calibrated)
        .bind(record.last_calibration_date)
        .bind(t.heart_rate_min)
        .bind(t.heart_rate_max)
        .bind(t.systolic_bp_min)
        .bind(t.systolic_bp_max)
        .bind(t.diastolic_bp_min)
        .bind(t.diastolic_bp_max)
        .bind(t.oxygen_saturation_min)
        .bind(t.temperature_min)
        .bind(t.temperature_max)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(HealthError::not_found("Patient record not found"));
        }
        Ok(())
    }

    async fn insert_vitals(&self, reading: &VitalReading) -> Result<()> {
        sqlx::query(
            "INSERT INTO vitals (id, patient_id, heart_rate, systolic_bp, diastolic_bp,
                                 oxygen_saturation, temperature, respiratory_rate,
                                 measurement_type, device_id, is_anomaly, anomaly_type, notes,
                                 measured_at, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
        )
        .bind(reading.id)
        .bind(reading.patient_id)
        .bind(reading.heart_rate)
        .bind(reading.systolic_bp)
        .bind(reading.diastolic_bp)
        .bind(reading.oxygen_saturation)
        .bind(reading.temperature)
        .bind(reading.respiratory_rate)
        .bind(reading.measurement_type.as_str())
        .bind(&reading.device_id)
        .bind(reading.is_anomaly)
        .bind(reading.anomaly_type.map(|a| a.as_str()))
        .bind(&reading.notes)
        .bind(reading.measured_at)
        .bind(reading.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(())
    }

    async fn latest_vitals(&self, patient_id: Uuid) -> Result<Option<VitalReading>> {
        let row: Option<VitalsRow> = sqlx::query_as(
            "SELECT * FROM vitals WHERE patient_id = $1 ORDER BY measured_at DESC LIMIT 1",
        )
        .bind(patient_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;
        row.map(VitalReading::try_from).transpose()
    }

    async fn vitals_since(
        &self,
        patient_ids: &[Uuid],
        since: DateTime<Utc>,
        limit: Option<i64>,
    ) -> Result<Vec<VitalReading>> {
        let rows: Vec<VitalsRow> = sqlx::query_as(
            "SELECT * FROM vitals
             WHERE patient_id = ANY($1) AND measured_at >= $2
             ORDER BY measured_at DESC
             LIMIT $3",
        )
        .bind(patient_ids)
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;
        rows.into_iter().map(VitalReading::try_from).collect()
    }

    async fn count_vitals(
        &self,
        patient_ids: &[Uuid],
        since: DateTime<Utc>,
        anomalies_only: bool,
    ) -> Result<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM vitals
             WHERE patient_id = ANY($1) AND measured_at >= $2 AND (NOT $3 OR is_anomaly)",
        )
        .bind(patient_ids)
        .bind(since)
        .bind(anomalies_only)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)
    }

    async fn insert_alert(&self, alert: &Alert) -> Result<()> {
        sqlx::query(
            "INSERT INTO alerts (id, patient_id, vital_reading_id, alert_type, severity, title,
                                 message, vital_type, vital_value, threshold_crossed, is_read,
                                 is_resolved, read_at, resolved_at, read_by, created_at,
                                 updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)",
        )
        .bind(alert.id)
        .bind(alert.patient_id)
        .bind(alert.vital_reading_id)
        .bind(alert.alert_type.as_str())
        .bind(alert.severity.as_str())
        .bind(&alert.title)
        .bind(&alert.message)
        .bind(&alert.vital_type)
        .bind(alert.vital_value)
        .bind(alert.threshold_crossed.map(|t| t.as_str()))
        .bind(alert.is_read)
        .bind(alert.is_resolved)
        .bind(alert.read_at)
        .bind(alert.resolved_at)
        .bind(alert.read_by)
        .bind(alert.created_at)
        .bind(alert.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(())
    }

    async fn alert(&self, id: Uuid) -> Result<Option<Alert>> {
        let row: Option<AlertRow> = sqlx::query_as("SELECT * FROM alerts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        row.map(Alert::try_from).transpose()
    }

    async fn update_alert(&self, alert: &Alert) -> Result<()> {
        let result = sqlx::query(
            "UPDATE alerts SET is_read = $2, is_resolved = $3, read_at = $4, resolved_at = $5,
                               read_by = $6, updated_at = $7
             WHERE id = $1",
        )
        .bind(alert.id)
        .bind(alert.is_read)
        .bind(alert.is_resolved)
        .bind(alert.read_at)
        .bind(alert.resolved_at)
        .bind(alert.read_by)
        .bind(alert.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(HealthError::not_found("Alert not found"));
        }
        Ok(())
    }

    async fn alerts(&self, query: &AlertQuery) -> Result<Vec<Alert>> {
        let sql = format!("SELECT * FROM alerts {ALERT_FILTER} ORDER BY created_at DESC LIMIT $6");
        let rows: Vec<AlertRow> = sqlx::query_as(&sql)
            .bind(&query.patient_ids)
            .bind(query.alert_type.map(|t| t.as_str()))
            .bind(query.is_read)
            .bind(query.is_resolved)
            .bind(query.since)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;
        rows.into_iter().map(Alert::try_from).collect()
    }

    async fn count_alerts(&self, query: &AlertQuery) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM alerts {ALERT_FILTER}");
        sqlx::query_scalar(&sql)
            .bind(&query.patient_ids)
            .bind(query.alert_type.map(|t| t.as_str()))
            .bind(query.is_read)
            .bind(query.is_resolved)
            .bind(query.since)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_row(role: &str, gender: Option<&str>) -> UserRow {
        let now = Utc::now();
        UserRow {
            id: Uuid::new_v4(),
            email: "ana@example.com".into(),
            password_hash: "hash".into(),
            full_name: "Ana Souza".into(),
            role: role.into(),
            phone: None,
            date_of_birth: None,
            gender: gender.map(String::from),
            assigned_patients: Vec::new(),
            assigned_caregiver: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn vitals_row(measurement_type: &str, anomaly_type: Option<&str>) -> VitalsRow {
        let now = Utc::now();
        VitalsRow {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            heart_rate: Some(72),
            systolic_bp: None,
            diastolic_bp: None,
            oxygen_saturation: None,
            temperature: None,
            respiratory_rate: None,
            measurement_type: measurement_type.into(),
            device_id: None,
            is_anomaly: anomaly_type.is_some(),
            anomaly_type: anomaly_type.map(String::from),
            notes: None,
            measured_at: now,
            created_at: now,
        }
    }

    fn alert_row(alert_type: &str, severity: &str, threshold: Option<&str>) -> AlertRow {
        let now = Utc::now();
        AlertRow {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            vital_reading_id: None,
            alert_type: alert_type.into(),
            severity: severity.into(),
            title: "High Heart Rate Detected".into(),
            message: "Heart rate (130 BPM) is above maximum threshold (100 BPM)".into(),
            vital_type: Some("heart_rate".into()),
            vital_value: Some(130.0),
            threshold_crossed: threshold.map(String::from),
            is_read: false,
            is_resolved: false,
            read_at: None,
            resolved_at: None,
            read_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_user_row_enums() {
        let user = User::try_from(user_row("clinician", Some("female"))).unwrap();
        assert_eq!(user.role, Role::Clinician);
        assert_eq!(user.gender, Some(Gender::Female));

        assert!(matches!(
            User::try_from(user_row("admin", None)),
            Err(HealthError::Store(_))
        ));
        assert!(matches!(
            User::try_from(user_row("patient", Some("unknown"))),
            Err(HealthError::Store(_))
        ));
    }

    #[test]
    fn test_vitals_row_enums() {
        let reading = VitalReading::try_from(vitals_row("device", Some("high"))).unwrap();
        assert_eq!(reading.measurement_type, MeasurementType::Device);
        assert_eq!(reading.anomaly_type, Some(AnomalyType::High));

        assert!(matches!(
            VitalReading::try_from(vitals_row("sensor", None)),
            Err(HealthError::Store(_))
        ));
        assert!(matches!(
            VitalReading::try_from(vitals_row("manual", Some("extreme"))),
            Err(HealthError::Store(_))
        ));
    }

    #[test]
    fn test_alert_row_enums() {
        let alert = Alert::try_from(alert_row("critical", "high", Some("above_max"))).unwrap();
        assert_eq!(alert.alert_type, AlertType::Critical);
        assert_eq!(alert.severity, Severity::High);
        assert_eq!(alert.threshold_crossed, Some(ThresholdCrossed::AboveMax));

        let err = Alert::try_from(alert_row("urgent", "high", None)).unwrap_err();
        assert_eq!(
            err,
            HealthError::Store("unexpected alert_type value 'urgent'".into())
        );
        assert!(matches!(
            Alert::try_from(alert_row("info", "none", None)),
            Err(HealthError::Store(_))
        ));
        assert!(matches!(
            Alert::try_from(alert_row("info", "low", Some("sideways"))),
            Err(HealthError::Store(_))
        ));
    }
}
