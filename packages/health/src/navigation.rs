//! Sidebar menu per role.

use crate::roles::Role;

/// Icon slot for a menu entry. The UI maps each variant to a concrete glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Live,
    History,
    Alerts,
    Calibration,
    Profile,
    Patients,
    AddPatient,
    Analysis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
}

const fn item(label: &'static str, href: &'static str, icon: NavIcon) -> NavItem {
    NavItem { label, href, icon }
}

const PATIENT_NAV: &[NavItem] = &[
    item("Dashboard", "/patient/dashboard", NavIcon::Dashboard),
    item("Live Monitoring", "/patient/live", NavIcon::Live),
    item("History", "/patient/history", NavIcon::History),
    item("Alerts", "/patient/alerts", NavIcon::Alerts),
    item("Calibration", "/patient/calibration", NavIcon::Calibration),
    item("Profile", "/patient/profile", NavIcon::Profile),
];

const CAREGIVER_NAV: &[NavItem] = &[
    item("Dashboard", "/caregiver/dashboard", NavIcon::Dashboard),
    item("Patients", "/caregiver/patients", NavIcon::Patients),
    item("Add Patient", "/caregiver/add-patient", NavIcon::AddPatient),
    item("Alerts", "/caregiver/alerts", NavIcon::Alerts),
    item("Profile", "/caregiver/profile", NavIcon::Profile),
];

const CLINICIAN_NAV: &[NavItem] = &[
    item("Dashboard", "/clinician/dashboard", NavIcon::Dashboard),
    item("Patients", "/clinician/patients", NavIcon::Patients),
    item("Add Patient", "/clinician/add-patient", NavIcon::AddPatient),
    item("Alerts", "/clinician/alerts", NavIcon::Alerts),
    item("Analysis", "/clinician/analysis", NavIcon::Analysis),
    item("Profile", "/clinician/profile", NavIcon::Profile),
];

/// Menu entries for a role, empty when nobody is signed in.
pub fn navigation_for(role: Option<Role>) -> &'static [NavItem] {
    match role {
        None => &[],
        Some(Role::Patient) => PATIENT_NAV,
        Some(Role::Caregiver) => CAREGIVER_NAV,
        Some(Role::Clinician) => CLINICIAN_NAV,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::can_access_route;

    #[test]
    fn every_entry_is_reachable_by_its_role() {
        for role in Role::ALL {
            let nav = navigation_for(Some(role));
            assert!(!nav.is_empty());
            for entry in nav {
                assert!(can_access_route(Some(role), entry.href), "{}", entry.href);
            }
        }
    }

    #[test]
    fn signed_out_has_no_menu() {
        assert!(navigation_for(None).is_empty());
    }

    #[test]
    fn first_entry_is_the_dashboard() {
        for role in Role::ALL {
            assert_eq!(navigation_for(Some(role))[0].href, role.dashboard_route());
        }
    }
}
