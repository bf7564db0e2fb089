//! # Storage seam
//!
//! [`HealthStore`] is the persistence interface the [`Monitor`](crate::Monitor)
//! service runs against. It deals only in whole records: ids and timestamps are
//! chosen by the caller, and every access rule is enforced above this layer.
//!
//! Implementations: [`MemoryStore`](crate::MemoryStore) in this crate (tests,
//! local runs) and `PgStore` in the `api` crate (PostgreSQL via sqlx).
//!
//! Listing methods return records newest first.

use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Alert, AlertQuery, PatientRecord, User, VitalReading};

pub trait HealthStore: Send + Sync {
    fn insert_user(&self, user: &User) -> impl Future<Output = Result<()>> + Send;
    fn user(&self, id: Uuid) -> impl Future<Output = Result<Option<User>>> + Send;
    /// Lookup by normalised (lowercase) email.
    fn user_by_email(&self, email: &str) -> impl Future<Output = Result<Option<User>>> + Send;
    fn update_user(&self, user: &User) -> impl Future<Output = Result<()>> + Send;
    /// Add `patient_id` to a carer's assigned list. Returns `false` when the
    /// carer does not exist. Assigning twice is a no-op.
    fn assign_patient(
        &self,
        carer_id: Uuid,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<bool>> + Send;

    fn insert_patient(&self, record: &PatientRecord) -> impl Future<Output = Result<()>> + Send;
    /// Insert a patient user and their record together. Either both are
    /// stored or neither is.
    fn insert_patient_account(
        &self,
        user: &User,
        record: &PatientRecord,
    ) -> impl Future<Output = Result<()>> + Send;
    fn patient(&self, user_id: Uuid) -> impl Future<Output = Result<Option<PatientRecord>>> + Send;
    fn update_patient(&self, record: &PatientRecord) -> impl Future<Output = Result<()>> + Send;

    fn insert_vitals(&self, reading: &VitalReading) -> impl Future<Output = Result<()>> + Send;
    /// Most recent reading by `measured_at`.
    fn latest_vitals(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Option<VitalReading>>> + Send;
    /// Readings measured at or after `since`, newest first.
    fn vitals_since(
        &self,
        patient_ids: &[Uuid],
        since: DateTime<Utc>,
        limit: Option<i64>,
    ) -> impl Future<Output = Result<Vec<VitalReading>>> + Send;
    fn count_vitals(
        &self,
        patient_ids: &[Uuid],
        since: DateTime<Utc>,
        anomalies_only: bool,
    ) -> impl Future<Output = Result<i64>> + Send;

    fn insert_alert(&self, alert: &Alert) -> impl Future<Output = Result<()>> + Send;
    fn alert(&self, id: Uuid) -> impl Future<Output = Result<Option<Alert>>> + Send;
    fn update_alert(&self, alert: &Alert) -> impl Future<Output = Result<()>> + Send;
    /// Alerts matching `query`, newest first, truncated to `query.limit`.
    fn alerts(&self, query: &AlertQuery) -> impl Future<Output = Result<Vec<Alert>>> + Send;
    /// Number of alerts matching `query`. `query.limit` is ignored.
    fn count_alerts(&self, query: &AlertQuery) -> impl Future<Output = Result<i64>> + Send;
}
