//! # Database module: PostgreSQL pool and the `HealthStore` backed by it
//!
//! Entirely gated behind `#[cfg(feature = "server")]` so client (WASM) builds
//! never pull in SQLx or Tokio networking code.
//!
//! - [`get_pool`] returns a lazily created, process-wide `&'static PgPool`
//!   sized from [`Settings`](crate::settings::Settings).
//! - [`run_migrations`] applies `packages/api/migrations`.
//! - [`PgStore`] implements [`health::HealthStore`] with plain SQL over the pool.

#[cfg(feature = "server")]
mod pg_store;
#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pg_store::PgStore;
#[cfg(feature = "server")]
pub use pool::{get_pool, run_migrations};
