//! Domain core for HyperWatch: roles, access rules, models, anomaly detection
//! and the [`Monitor`] service, independent of any server or UI framework.

pub mod access;
pub mod anomaly;
pub mod error;
pub mod models;
pub mod navigation;
pub mod roles;
pub mod service;
pub mod store;
pub mod trends;
pub mod validation;

mod memory;
pub use memory::MemoryStore;

pub use access::{can_access_route, enforce_role_access, Access, DenyReason};
pub use error::{HealthError, Result};
pub use navigation::{navigation_for, NavIcon, NavItem};
pub use roles::Role;
pub use service::Monitor;
pub use store::HealthStore;
