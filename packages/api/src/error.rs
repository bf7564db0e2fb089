//! Server-side failures that are not domain errors, and the conversion of
//! everything into `ServerFnError` at the server function boundary.

use dioxus::prelude::ServerFnError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("{0}")]
    Password(String),
}

pub(crate) fn server_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(e.to_string())
}
