//! HTTP/JSON transport (`http` feature).
//!
//! - `POST /:command` dispatches a command (e.g. `/student.add`) with the JSON
//!   body as input.
//! - `GET /health` reports `{ "ok": true, "commands": [...] }`.
//!
//! Business failures (duplicate email, unknown id, missing field) are `200`
//! responses whose body carries `success: false` or `found: false`. Only a
//! `HandlerError` produces another status, with an `{ "error": ... }` body.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use super::error::HandlerError;
use super::service::Service;

type SharedService<F> = State<Arc<Service<F>>>;

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self, "command dispatch failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn router<F: Send + Sync + 'static>(service: Arc<Service<F>>) -> Router {
    Router::new()
        .route("/health", get(health::<F>))
        .route("/:command", post(dispatch::<F>))
        .with_state(service)
}

/// Bind `addr` and serve until the listener fails.
pub async fn serve<F: Send + Sync + 'static>(
    service: Arc<Service<F>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr, "HTTP transport listening");
    axum::serve(listener, router(service)).await
}

async fn health<F: Send + Sync + 'static>(State(service): SharedService<F>) -> Json<Value> {
    Json(json!({ "ok": true, "commands": service.commands() }))
}

async fn dispatch<F: Send + Sync + 'static>(
    State(service): SharedService<F>,
    Path(command): Path<String>,
    Json(input): Json<Value>,
) -> Result<Json<Value>, HandlerError> {
    service.dispatch(&command, input).map(Json)
}
