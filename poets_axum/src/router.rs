//! Routes for user accounts and sessions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::user::{create_user, delete_user, list_users, login, logout, show_user, update_user};

/// Router with every user and session endpoint, wrapped in HTTP tracing
///
/// - `POST /users`, `POST /login`, `GET /logout` are public
/// - `GET /users`, `GET|PUT|DELETE /users/{id}` require an admin session
pub fn poets_router() -> Router {
    poets_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same routes as [`poets_router`] without the tracing middleware
pub fn poets_router_no_trace() -> Router {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/{id}",
            get(show_user).put(update_user).delete(delete_user),
        )
        .route("/login", post(login))
        .route("/logout", get(logout))
}
