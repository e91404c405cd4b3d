//! Session checks that always consult the database
//!
//! A session only records a user id. Role and existence are re-read here on
//! every call so that demotions and deletions apply to live sessions.

use super::errors::CoordinationError;
use crate::session::get_user_from_session;
use crate::userdb::User;

/// Resolve a session to its user, or `Unauthorized`
pub async fn validate_user_session(session_id: &str) -> Result<User, CoordinationError> {
    get_user_from_session(session_id).await.map_err(|e| {
        tracing::debug!(error = %e, "Session rejected");
        CoordinationError::Unauthorized
    })
}

/// Validates that a session belongs to an admin user by checking fresh database state.
///
/// # Returns
/// * `Ok(User)` - The admin user as currently stored
/// * `Err(CoordinationError::Unauthorized)` - No valid session, or the user is not an admin
pub async fn validate_admin_session(session_id: &str) -> Result<User, CoordinationError> {
    let user = validate_user_session(session_id).await?;

    if !user.is_admin {
        tracing::debug!(user_id = user.id, "User is not authorized (not an admin)");
        return Err(CoordinationError::Unauthorized);
    }

    tracing::debug!(user_id = user.id, "Admin session validated successfully");
    Ok(user)
}
