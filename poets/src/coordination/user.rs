use http::HeaderMap;
use serde::Deserialize;

use crate::session::renew_session_header;
use crate::userdb::{
    NewUser, User, UserError, UserSearchField, UserStore, hash_password, verify_password,
};

use super::errors::CoordinationError;

const DUPLICATE_EMAIL: &str = "User with this email already exists.";

/// Registration form as posted by clients
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn required_email(request: &RegisterRequest) -> Result<&str, CoordinationError> {
    non_empty(&request.email)
        .ok_or_else(|| CoordinationError::Validation("Missing email.".to_string()))
}

/// Password checks, run only once the email is known to be free
fn checked_password(request: &RegisterRequest) -> Result<&str, CoordinationError> {
    let password = non_empty(&request.password)
        .ok_or_else(|| CoordinationError::Validation("Missing password.".to_string()))?;

    if request.confirm_password.as_deref() != Some(password) {
        return Err(CoordinationError::Validation(
            "Passwords do not match".to_string(),
        ));
    }

    Ok(password)
}

/// Register a regular (non-admin) user from the public form
///
/// A taken email is reported before anything about the password fields.
#[tracing::instrument(skip(request))]
pub async fn register_user(request: RegisterRequest) -> Result<User, CoordinationError> {
    let email = required_email(&request).map_err(CoordinationError::log)?;
    ensure_email_free(email).await?;
    let password = checked_password(&request).map_err(CoordinationError::log)?;

    insert_new(email, password, false).await
}

/// Create a user with an explicit admin flag
///
/// Used for bootstrapping the first administrator and for seeding data.
pub async fn create_user_account(new_user: NewUser) -> Result<User, CoordinationError> {
    if new_user.email.is_empty() {
        return Err(CoordinationError::Validation("Missing email.".to_string()));
    }
    ensure_email_free(&new_user.email).await?;
    if new_user.password.is_empty() {
        return Err(CoordinationError::Validation(
            "Missing password.".to_string(),
        ));
    }

    insert_new(&new_user.email, &new_user.password, new_user.is_admin).await
}

async fn ensure_email_free(email: &str) -> Result<(), CoordinationError> {
    if UserStore::get_user_by(UserSearchField::Email(email.to_string()))
        .await?
        .is_some()
    {
        return Err(CoordinationError::Validation(DUPLICATE_EMAIL.to_string()).log());
    }
    Ok(())
}

async fn insert_new(email: &str, password: &str, is_admin: bool) -> Result<User, CoordinationError> {
    let password_hash = hash_password(password)?;

    // A concurrent registration can still win the race to the unique index
    match UserStore::create_user(email, &password_hash, is_admin).await {
        Ok(user) => Ok(user),
        Err(UserError::DuplicateEmail) => {
            Err(CoordinationError::Validation(DUPLICATE_EMAIL.to_string()).log())
        }
        Err(e) => Err(e.into()),
    }
}

/// Check credentials and open a new session
///
/// Returns the user together with the `Set-Cookie` headers for the session.
/// Every credential failure is reported as `InvalidCredentials`.
#[tracing::instrument(skip(request, previous_session_id))]
pub async fn login_user(
    request: LoginRequest,
    previous_session_id: Option<&str>,
) -> Result<(User, HeaderMap), CoordinationError> {
    let (Some(email), Some(password)) = (non_empty(&request.email), non_empty(&request.password))
    else {
        return Err(CoordinationError::InvalidCredentials.log());
    };

    let user = UserStore::get_user_by(UserSearchField::Email(email.to_string()))
        .await?
        .ok_or_else(|| CoordinationError::InvalidCredentials.log())?;

    if !verify_password(password, &user.password_hash)? {
        return Err(CoordinationError::InvalidCredentials.log());
    }

    let headers = renew_session_header(user.id, previous_session_id).await?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok((user, headers))
}

/// Make sure an administrator with this email exists
///
/// An existing account with the email is left as it is.
pub async fn ensure_admin_account(email: &str, password: &str) -> Result<User, CoordinationError> {
    if let Some(user) = UserStore::get_user_by(UserSearchField::Email(email.to_string())).await? {
        tracing::info!(user_id = user.id, "Bootstrap admin already present");
        return Ok(user);
    }

    let user = create_user_account(NewUser {
        email: email.to_string(),
        password: password.to_string(),
        is_admin: true,
    })
    .await?;
    tracing::info!(user_id = user.id, "Bootstrap admin created");

    Ok(user)
}
