use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{HealthError, Result};
use crate::models::{Alert, AlertQuery, PatientRecord, User, VitalReading};
use crate::store::HealthStore;

#[derive(Debug, Default)]
struct State {
    users: HashMap<Uuid, User>,
    patients: HashMap<Uuid, PatientRecord>,
    vitals: Vec<VitalReading>,
    alerts: HashMap<Uuid, Alert>,
}

/// In-memory HealthStore for tests and local runs without a database.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| HealthError::store("memory store lock poisoned"))
    }
}

fn limited<T>(mut items: Vec<T>, limit: Option<i64>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(usize::try_from(limit).unwrap_or(0));
    }
    items
}

impl HealthStore for MemoryStore {
    async fn insert_user(&self, user: &User) -> Result<()> {
        let mut state = self.lock()?;
        if state.users.values().any(|u| u.email == user.email) {
            return Err(HealthError::Conflict("Email already registered".into()));
        }
        state.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn user(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let mut state = self.lock()?;
        match state.users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(HealthError::not_found("User not found")),
        }
    }

    async fn assign_patient(&self, carer_id: Uuid, patient_id: Uuid) -> Result<bool> {
        let mut state = self.lock()?;
        let Some(carer) = state.users.get_mut(&carer_id) else {
            return Ok(false);
        };
        if !carer.assigned_patients.contains(&patient_id) {
            carer.assigned_patients.push(patient_id);
            carer.updated_at = Utc::now();
        }
        Ok(true)
    }

    async fn insert_patient(&self, record: &PatientRecord) -> Result<()> {
        self.lock()?.patients.insert(record.user_id, record.clone());
        Ok(())
    }

    async fn insert_patient_account(&self, user: &User, record: &PatientRecord) -> Result<()> {
        let mut state = self.lock()?;
        if state.users.values().any(|u| u.email == user.email) {
            return Err(HealthError::Conflict("Email already registered".into()));
        }
        state.users.insert(user.id, user.clone());
        state.patients.insert(record.user_id, record.clone());
        Ok(())
    }

    async fn patient(&self, user_id: Uuid) -> Result<Option<PatientRecord>> {
        Ok(self.lock()?.patients.get(&user_id).cloned())
    }

    async fn update_patient(&self, record: &PatientRecord) -> Result<()> {
        let mut state = self.lock()?;
        match state.patients.get_mut(&record.user_id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(HealthError::not_found("Patient record not found")),
        }
    }

    async fn insert_vitals(&self, reading: &VitalReading) -> Result<()> {
        self.lock()?.vitals.push(reading.clone());
        Ok(())
    }

    async fn latest_vitals(&self, patient_id: Uuid) -> Result<Option<VitalReading>> {
        Ok(self
            .lock()?
            .vitals
            .iter()
            .filter(|v| v.patient_id == patient_id)
            .max_by_key(|v| v.measured_at)
            .cloned())
    }

    async fn vitals_since(
        &self,
        patient_ids: &[Uuid],
        since: DateTime<Utc>,
        limit: Option<i64>,
    ) -> Result<Vec<VitalReading>> {
        let state = self.lock()?;
        let mut readings: Vec<VitalReading> = state
            .vitals
            .iter()
            .filter(|v| patient_ids.contains(&v.patient_id) && v.measured_at >= since)
            .cloned()
            .collect();
        readings.sort_by(|a, b| b.measured_at.cmp(&a.measured_at));
        Ok(limited(readings, limit))
    }

    async fn count_vitals(
        &self,
        patient_ids: &[Uuid],
        since: DateTime<Utc>,
        anomalies_only: bool,
    ) -> Result<i64> {
        let state = self.lock()?;
        let count = state
            .vitals
            .iter()
            .filter(|v| patient_ids.contains(&v.patient_id) && v.measured_at >= since)
            .filter(|v| !anomalies_only || v.is_anomaly)
            .count();
        Ok(count as i64)
    }

    async fn insert_alert(&self, alert: &Alert) -> Result<()> {
        self.lock()?.alerts.insert(alert.id, alert.clone());
        Ok(())
    }

    async fn alert(&self, id: Uuid) -> Result<Option<Alert>> {
        Ok(self.lock()?.alerts.get(&id).cloned())
    }

    async fn update_alert(&self, alert: &Alert) -> Result<()> {
        let mut state = self.lock()?;
        match state.alerts.get_mut(&alert.id) {
            Some(existing) => {
                *existing = alert.clone();
                Ok(())
            }
            None => Err(HealthError::not_found("Alert not found")),
        }
    }

    async fn alerts(&self, query: &AlertQuery) -> Result<Vec<Alert>> {
        let state = self.lock()?;
        let mut alerts: Vec<Alert> = state
            .alerts
            .values()
            .filter(|a| query.matches(a))
            .cloned()
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(limited(alerts, query.limit))
    }

    async fn count_alerts(&self, query: &AlertQuery) -> Result<i64> {
        let state = self.lock()?;
        Ok(state.alerts.values().filter(|a| query.matches(a)).count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::models::{AlertType, NewAlert, NewVitals};
    use crate::roles::Role;

    fn user(email: &str, role: Role) -> User {
        User::new(email.into(), "hash".into(), "Test User".into(), role, Utc::now())
    }

    fn reading(patient_id: Uuid, minutes_ago: i64, is_anomaly: bool) -> VitalReading {
        let mut reading = VitalReading::from_new(
            patient_id,
            NewVitals {
                heart_rate: Some(70),
                measured_at: Some(Utc::now() - Duration::minutes(minutes_ago)),
                ..Default::default()
            },
            Utc::now(),
        );
        reading.is_anomaly = is_anomaly;
        reading
    }

    #[tokio::test]
    async fn test_users_by_id_and_email() {
        let store = MemoryStore::new();
        let ana = user("ana@example.com", Role::Patient);
        store.insert_user(&ana).await.unwrap();

        assert_eq!(store.user(ana.id).await.unwrap(), Some(ana.clone()));
        assert_eq!(
            store.user_by_email("ana@example.com").await.unwrap().map(|u| u.id),
            Some(ana.id)
        );
        assert!(store.user_by_email("bob@example.com").await.unwrap().is_none());

        let dup = user("ana@example.com", Role::Caregiver);
        assert!(matches!(
            store.insert_user(&dup).await,
            Err(HealthError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_patient_account_is_all_or_nothing() {
        let store = MemoryStore::new();
        let ana = user("ana@example.com", Role::Patient);
        store
            .insert_patient_account(&ana, &PatientRecord::new(ana.id, Utc::now()))
            .await
            .unwrap();
        assert!(store.user(ana.id).await.unwrap().is_some());
        assert!(store.patient(ana.id).await.unwrap().is_some());

        let dup = user("ana@example.com", Role::Patient);
        assert!(matches!(
            store
                .insert_patient_account(&dup, &PatientRecord::new(dup.id, Utc::now()))
                .await,
            Err(HealthError::Conflict(_))
        ));
        assert!(store.user(dup.id).await.unwrap().is_none());
        assert!(store.patient(dup.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_assign_patient_is_idempotent() {
        let store = MemoryStore::new();
        let carer = user("carer@example.com", Role::Caregiver);
        store.insert_user(&carer).await.unwrap();
        let patient_id = Uuid::new_v4();

        assert!(store.assign_patient(carer.id, patient_id).await.unwrap());
        assert!(store.assign_patient(carer.id, patient_id).await.unwrap());
        assert!(!store.assign_patient(Uuid::new_v4(), patient_id).await.unwrap());

        let carer = store.user(carer.id).await.unwrap().unwrap();
        assert_eq!(carer.assigned_patients, vec![patient_id]);
    }

    #[tokio::test]
    async fn test_vitals_ordering_and_windows() {
        let store = MemoryStore::new();
        let patient = Uuid::new_v4();
        let other = Uuid::new_v4();
        store.insert_vitals(&reading(patient, 30, false)).await.unwrap();
        store.insert_vitals(&reading(patient, 5, true)).await.unwrap();
        store.insert_vitals(&reading(patient, 60 * 48, false)).await.unwrap();
        store.insert_vitals(&reading(other, 1, true)).await.unwrap();

        let latest = store.latest_vitals(patient).await.unwrap().unwrap();
        assert!(latest.is_anomaly);

        let since = Utc::now() - Duration::hours(24);
        let recent = store.vitals_since(&[patient], since, None).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].measured_at > recent[1].measured_at);

        let one = store.vitals_since(&[patient], since, Some(1)).await.unwrap();
        assert_eq!(one.len(), 1);

        assert_eq!(store.count_vitals(&[patient], since, false).await.unwrap(), 2);
        assert_eq!(store.count_vitals(&[patient], since, true).await.unwrap(), 1);
        assert_eq!(
            store.count_vitals(&[patient, other], since, true).await.unwrap(),
            2
        );
        assert_eq!(store.count_vitals(&[], since, false).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_alert_queries() {
        let store = MemoryStore::new();
        let patient = Uuid::new_v4();
        for (i, kind) in [AlertType::Critical, AlertType::Warning, AlertType::Info]
            .into_iter()
            .enumerate()
        {
            let mut alert = Alert::from_new(
                NewAlert {
                    patient_id: patient,
                    alert_type: kind,
                    severity: None,
                    title: format!("alert {i}"),
                    message: String::new(),
                    vital_type: None,
                    vital_value: None,
                    threshold_crossed: None,
                },
                None,
                Utc::now() - Duration::minutes(10 - i as i64),
            );
            alert.is_read = kind == AlertType::Info;
            store.insert_alert(&alert).await.unwrap();
        }

        let all = store
            .alerts(&AlertQuery::for_patients(vec![patient]))
            .await
            .unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].title, "alert 2");

        let mut unread = AlertQuery::for_patients(vec![patient]);
        unread.is_read = Some(false);
        unread.limit = Some(1);
        assert_eq!(store.alerts(&unread).await.unwrap().len(), 1);
        assert_eq!(store.count_alerts(&unread).await.unwrap(), 2);

        let mut alert = all[0].clone();
        alert.is_resolved = true;
        store.update_alert(&alert).await.unwrap();
        assert!(store.alert(alert.id).await.unwrap().unwrap().is_resolved);
    }
}
