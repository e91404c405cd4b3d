use axum::{Json, Router, http::StatusCode, routing::get};
use dotenvy::dotenv;
use std::{env, sync::LazyLock};

use poets_axum::{EmptyPayload, Envelope, poets_router};

mod server;
use server::{init_tracing, spawn_http_server};

static PORT: LazyLock<u16> = LazyLock::new(|| {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000)
});

async fn health() -> (StatusCode, Json<Envelope<EmptyPayload>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            message: "OK".to_string(),
            payload: EmptyPayload {},
        }),
    )
}

fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(poets_router())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_tracing("poets-server");

    poets_axum::init().await?;

    let http_server = spawn_http_server(*PORT, app());
    http_server.await??;
    Ok(())
}
