//! Session-backed sign-in state.

use tower_sessions::Session;
use uuid::Uuid;

use crate::error::ApiError;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

pub async fn session_user_id(session: &Session) -> Result<Option<Uuid>, ApiError> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;
    // An unparseable id is treated as signed out.
    Ok(user_id.and_then(|id| Uuid::parse_str(&id).ok()))
}

pub async fn sign_in(session: &Session, user_id: Uuid) -> Result<(), ApiError> {
    // New id on privilege change.
    session.cycle_id().await?;
    session
        .insert(SESSION_USER_ID_KEY, user_id.to_string())
        .await?;
    Ok(())
}

pub async fn sign_out(session: &Session) -> Result<(), ApiError> {
    session.flush().await?;
    Ok(())
}
