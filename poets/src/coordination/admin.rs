use crate::userdb::{User, UserStore};

use super::errors::CoordinationError;

fn user_not_found(user_id: i64) -> CoordinationError {
    CoordinationError::ResourceNotFound {
        resource_type: "User".to_string(),
        resource_id: user_id.to_string(),
    }
    .log()
}

pub async fn get_all_users() -> Result<Vec<User>, CoordinationError> {
    UserStore::get_all_users()
        .await
        .map_err(|e| CoordinationError::Database(e.to_string()).log())
}

pub async fn get_user(user_id: i64) -> Result<User, CoordinationError> {
    UserStore::get_user(user_id)
        .await
        .map_err(|e| CoordinationError::Database(e.to_string()).log())?
        .ok_or_else(|| user_not_found(user_id))
}

/// Delete a user and return the row as it was
///
/// Callers are expected to have validated the admin session already.
pub async fn delete_user_account_admin(user_id: i64) -> Result<User, CoordinationError> {
    let user = UserStore::delete_user(user_id)
        .await?
        .ok_or_else(|| user_not_found(user_id))?;

    tracing::info!(user_id, "Deleted user account");
    Ok(user)
}

pub async fn update_user_admin_status(
    admin_user: &User,
    user_id: i64,
    is_admin: bool,
) -> Result<User, CoordinationError> {
    if !admin_user.is_admin {
        tracing::debug!("User is not authorized to update admin status");
        return Err(CoordinationError::Unauthorized.log());
    }

    let user = UserStore::update_admin_status(user_id, is_admin)
        .await?
        .ok_or_else(|| user_not_found(user_id))?;

    tracing::info!(
        admin_id = admin_user.id,
        user_id,
        is_admin,
        "Updated user admin status"
    );
    Ok(user)
}
