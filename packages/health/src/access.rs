//! # Role-based access control
//!
//! Two layers live here. The route layer is a per-role allow-list of page
//! prefixes ([`role_routes`]) checked by [`can_access_route`] and enforced by
//! layouts through [`enforce_role_access`]. The data layer answers whether a
//! signed-in user may read a given patient's vitals and alerts
//! ([`can_access_patient_data`]).
//!
//! Route checks are prefix matches, so `/caregiver/patients/<id>` is covered by
//! the `/caregiver/patients` entry.

use uuid::Uuid;

use crate::models::User;
use crate::roles::Role;

const PATIENT_ROUTES: &[&str] = &[
    "/patient/dashboard",
    "/patient/alerts",
    "/patient/live",
    "/patient/history",
    "/patient/calibration",
    "/patient/profile",
];

const CAREGIVER_ROUTES: &[&str] = &[
    "/caregiver/dashboard",
    "/caregiver/patients",
    "/caregiver/alerts",
    "/caregiver/add-patient",
    "/caregiver/profile",
];

const CLINICIAN_ROUTES: &[&str] = &[
    "/clinician/dashboard",
    "/clinician/patients",
    "/clinician/alerts",
    "/clinician/analysis",
    "/clinician/add-patient",
    "/clinician/profile",
];

/// Page prefixes a role may visit.
pub fn role_routes(role: Role) -> &'static [&'static str] {
    match role {
        Role::Patient => PATIENT_ROUTES,
        Role::Caregiver => CAREGIVER_ROUTES,
        Role::Clinician => CLINICIAN_ROUTES,
    }
}

pub fn can_access_route(role: Option<Role>, path: &str) -> bool {
    let Some(role) = role else {
        return false;
    };
    role_routes(role).iter().any(|route| path.starts_with(route))
}

pub fn check_user_role(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    RoleDenied(Role),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect { to: &'static str, reason: DenyReason },
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }
}

/// Decide whether a layout guarding `allowed` roles may render `path`.
pub fn enforce_role_access(role: Option<Role>, allowed: &[Role], path: &str) -> Access {
    let Some(role) = role else {
        tracing::warn!("[RBAC] Unauthenticated access attempt to {}", path);
        return Access::Redirect {
            to: "/login",
            reason: DenyReason::Unauthenticated,
        };
    };

    if !check_user_role(role, allowed) {
        tracing::warn!("[RBAC] Role '{}' denied access to {}", role, path);
        return Access::Redirect {
            to: "/login",
            reason: DenyReason::RoleDenied(role),
        };
    }

    tracing::debug!("[RBAC] Role '{}' granted access to {}", role, path);
    Access::Granted
}

/// Patients see only themselves; carers see only their assigned patients.
pub fn can_access_patient_data(viewer: &User, patient_id: Uuid) -> bool {
    match viewer.role {
        Role::Patient => viewer.id == patient_id,
        Role::Caregiver | Role::Clinician => viewer.is_assigned(patient_id),
    }
}

pub fn accessible_patient_ids(viewer: &User) -> Vec<Uuid> {
    match viewer.role {
        Role::Patient => vec![viewer.id],
        Role::Caregiver | Role::Clinician => viewer.assigned_patients.clone(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn user(role: Role) -> User {
        User::new(
            format!("{}@example.com", role),
            String::new(),
            "Test".into(),
            role,
            Utc::now(),
        )
    }

    #[test]
    fn no_role_reaches_nothing() {
        for role in Role::ALL {
            for route in role_routes(role) {
                assert!(!can_access_route(None, route));
            }
        }
    }

    #[test]
    fn roles_stay_in_their_prefix() {
        for role in Role::ALL {
            for other in Role::ALL {
                let allowed = can_access_route(Some(role), other.dashboard_route());
                assert_eq!(allowed, role == other, "{role} -> {other}");
            }
        }
    }

    #[test]
    fn nested_paths_match_by_prefix() {
        assert!(can_access_route(
            Some(Role::Caregiver),
            "/caregiver/patients/0d6f3e4c"
        ));
        assert!(!can_access_route(Some(Role::Patient), "/patient"));
        assert!(!can_access_route(Some(Role::Clinician), "/clinician/reports"));
    }

    #[test]
    fn enforce_redirects_to_login() {
        assert_eq!(
            enforce_role_access(None, &[Role::Patient], "/patient/dashboard"),
            Access::Redirect {
                to: "/login",
                reason: DenyReason::Unauthenticated
            }
        );
        assert_eq!(
            enforce_role_access(Some(Role::Caregiver), &[Role::Patient], "/patient/live"),
            Access::Redirect {
                to: "/login",
                reason: DenyReason::RoleDenied(Role::Caregiver)
            }
        );
        assert!(enforce_role_access(
            Some(Role::Clinician),
            &[Role::Caregiver, Role::Clinician],
            "/clinician/patients"
        )
        .is_granted());
    }

    #[test]
    fn patient_sees_only_self() {
        let patient = user(Role::Patient);
        assert!(can_access_patient_data(&patient, patient.id));
        assert!(!can_access_patient_data(&patient, Uuid::new_v4()));
        assert_eq!(accessible_patient_ids(&patient), vec![patient.id]);
    }

    #[test]
    fn carers_see_assigned_patients() {
        let patient = user(Role::Patient);
        let mut carer = user(Role::Clinician);
        assert!(!can_access_patient_data(&carer, patient.id));
        assert!(accessible_patient_ids(&carer).is_empty());

        carer.assigned_patients.push(patient.id);
        assert!(can_access_patient_data(&carer, patient.id));
        assert!(!can_access_patient_data(&carer, carer.id));
        assert_eq!(accessible_patient_ids(&carer), vec![patient.id]);
    }
}
