use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::{HeaderMap, StatusCode},
};
use axum_extra::{TypedHeader, headers};
use serde::Deserialize;

use poets::{
    LoginRequest, RegisterRequest, delete_user_account_admin, get_all_users, get_user, login_user,
    prepare_logout_response, register_user, update_user_admin_status,
};

use crate::error::{ApiError, IntoResponseError};
use crate::response::{EmptyPayload, Envelope, UserPayload, UsersPayload, envelope};
use crate::session::{AdminUser, session_id};

type ApiResult<T> = Result<(StatusCode, Json<Envelope<T>>), ApiError>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateUserRequest {
    is_admin: Option<bool>,
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ApiError::bad_request("Invalid request body.")
    })
}

fn user_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|e| {
        tracing::debug!(error = %e, "Rejected user id");
        ApiError::bad_request("Invalid user id.")
    })
}

pub(crate) async fn create_user(
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<UserPayload> {
    let request = json_body(body)?;
    let user = register_user(request).await.into_response_error()?;

    Ok(envelope(
        StatusCode::CREATED,
        "User created",
        UserPayload { user },
    ))
}

pub(crate) async fn login(
    cookies: Option<TypedHeader<headers::Cookie>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, HeaderMap, Json<Envelope<UserPayload>>), ApiError> {
    let request = json_body(body)?;
    let (user, headers) = login_user(request, session_id(&cookies))
        .await
        .into_response_error()?;

    let (status, body) = envelope(
        StatusCode::OK,
        "Logged in successfully!",
        UserPayload { user },
    );
    Ok((status, headers, body))
}

pub(crate) async fn logout(
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> Result<(StatusCode, HeaderMap, Json<Envelope<EmptyPayload>>), ApiError> {
    let headers = prepare_logout_response(session_id(&cookies))
        .await
        .into_response_error()?;

    let (status, body) = envelope(StatusCode::OK, "Logged out!", EmptyPayload {});
    Ok((status, headers, body))
}

pub(crate) async fn list_users(_admin: AdminUser) -> ApiResult<UsersPayload> {
    let users = get_all_users().await.into_response_error()?;

    Ok(envelope(StatusCode::OK, "All users", UsersPayload { users }))
}

pub(crate) async fn show_user(
    _admin: AdminUser,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<UserPayload> {
    let id = user_id(path)?;
    let user = get_user(id).await.into_response_error()?;

    Ok(envelope(StatusCode::OK, "User retrieved", UserPayload { user }))
}

pub(crate) async fn update_user(
    admin: AdminUser,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<UserPayload> {
    let id = user_id(path)?;
    let is_admin = body
        .ok()
        .and_then(|Json(request)| request.is_admin)
        .ok_or_else(|| ApiError::bad_request("Missing isAdmin."))?;

    let user = update_user_admin_status(&admin.user, id, is_admin)
        .await
        .into_response_error()?;

    Ok(envelope(StatusCode::OK, "User updated", UserPayload { user }))
}

pub(crate) async fn delete_user(
    _admin: AdminUser,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<UserPayload> {
    let id = user_id(path)?;
    let user = delete_user_account_admin(id).await.into_response_error()?;

    Ok(envelope(StatusCode::OK, "User deleted", UserPayload { user }))
}
