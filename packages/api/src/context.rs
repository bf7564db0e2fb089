//! Per-request plumbing shared by the server functions.

use health::models::User;
use health::{HealthError, Monitor};
use tower_sessions::Session;

use crate::auth::session_user_id;
use crate::db::{get_pool, PgStore};
use crate::error::ApiError;

pub type PgMonitor = Monitor<PgStore>;

pub async fn monitor() -> Result<PgMonitor, ApiError> {
    let pool = get_pool().await?;
    Ok(Monitor::new(PgStore::new(pool.clone())))
}

/// The signed-in user, or `Unauthorized` when the session carries none.
pub async fn current_user(session: &Session, monitor: &PgMonitor) -> Result<User, HealthError> {
    let user_id = session_user_id(session)
        .await
        .map_err(HealthError::store)?
        .ok_or_else(|| HealthError::Unauthorized("Not authenticated".into()))?;
    let user = monitor.user(user_id).await?;
    PgMonitor::ensure_active(&user)?;
    Ok(user)
}
