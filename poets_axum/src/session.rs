use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    response::{IntoResponse, Response},
};
use axum_extra::{TypedHeader, headers};
use http::request::Parts;

use poets::{SESSION_COOKIE_NAME, User, validate_admin_session};

use crate::error::ApiError;

/// Rejection for protected routes; always 403 "Unauthorized"
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        ApiError::unauthorized().into_response()
    }
}

/// An administrator, resolved from the session cookie against the database
///
/// Use it as the first extractor of a handler so that callers without an
/// admin session are turned away before the path or body is looked at.
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use poets_axum::AdminUser;
///
/// async fn dashboard(admin: AdminUser) -> String {
///     format!("Hello, {}!", admin.user.email)
/// }
///
/// let app: Router = Router::new().route("/dashboard", get(dashboard));
/// ```
#[derive(Clone, Debug)]
pub struct AdminUser {
    pub user: User,
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let cookies: TypedHeader<headers::Cookie> = parts.extract().await.map_err(|_| {
            tracing::debug!("No cookies on protected request");
            AuthRejection
        })?;

        let session_id = cookies.get(SESSION_COOKIE_NAME.as_str()).ok_or_else(|| {
            tracing::debug!(
                cookie = SESSION_COOKIE_NAME.as_str(),
                "Session cookie missing"
            );
            AuthRejection
        })?;

        let user = validate_admin_session(session_id)
            .await
            .map_err(|_| AuthRejection)?;

        Ok(AdminUser { user })
    }
}

/// Session id carried by the request, if any
pub(crate) fn session_id(cookies: &Option<TypedHeader<headers::Cookie>>) -> Option<&str> {
    cookies
        .as_ref()
        .and_then(|c| c.get(SESSION_COOKIE_NAME.as_str()))
}
