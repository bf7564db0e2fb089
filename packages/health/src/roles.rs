//! The three account roles and the facts that hang off them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role. Stored and serialised in lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Caregiver,
    Clinician,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Caregiver, Role::Clinician];

    /// Parse a stored role string. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "patient" => Some(Role::Patient),
            "caregiver" => Some(Role::Caregiver),
            "clinician" => Some(Role::Clinician),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Caregiver => "caregiver",
            Role::Clinician => "clinician",
        }
    }

    /// Human-facing name used in headers and the sidebar.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Caregiver => "Family Caregiver",
            Role::Clinician => "Medical Authority",
        }
    }

    /// Landing page after login.
    pub fn dashboard_route(&self) -> &'static str {
        match self {
            Role::Patient => "/patient/dashboard",
            Role::Caregiver => "/caregiver/dashboard",
            Role::Clinician => "/clinician/dashboard",
        }
    }

    /// Caregivers and clinicians look after assigned patients.
    pub fn is_carer(&self) -> bool {
        matches!(self, Role::Caregiver | Role::Clinician)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
