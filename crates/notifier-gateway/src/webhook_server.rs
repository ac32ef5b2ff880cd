//! Webhook server bootstrap and router wiring.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use notifier_events::parse_webhook_event;
use notifier_slack::{HandleEventStatus, NotificationHandler};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub const WEBHOOK_ENDPOINT: &str = "/webhook";
pub const ROOT_ENDPOINT: &str = "/";
pub const HEALTHZ_ENDPOINT: &str = "/healthz";

#[derive(Clone)]
pub struct NotifierServerConfig {
    pub bind: String,
    pub handler: NotificationHandler,
}

pub async fn run_notifier_server(config: NotifierServerConfig) -> Result<()> {
    let bind_addr = config
        .bind
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid --bind '{}'", config.bind))?;
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind notifier server on {bind_addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve bound notifier server address")?;
    info!(addr = %local_addr, endpoint = WEBHOOK_ENDPOINT, "notifier server listening");

    let app = build_notifier_router(Arc::new(config.handler));
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("notifier server exited unexpectedly")?;
    info!("notifier server stopped");
    Ok(())
}

pub fn build_notifier_router(handler: Arc<NotificationHandler>) -> Router {
    Router::new()
        .route(WEBHOOK_ENDPOINT, post(handle_webhook))
        .route(ROOT_ENDPOINT, post(handle_webhook))
        .route(HEALTHZ_ENDPOINT, get(handle_healthz))
        .with_state(handler)
}

async fn handle_webhook(
    State(handler): State<Arc<NotificationHandler>>,
    body: Bytes,
) -> Response {
    let event = match parse_webhook_event(&body) {
        Ok(event) => event,
        Err(error) => {
            warn!(error = %error, bytes = body.len(), "rejected webhook payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(HandleEventStatus::error(error.to_string())),
            )
                .into_response();
        }
    };
    let status = handler.handle(&event).await;
    (StatusCode::OK, Json(status)).into_response()
}

async fn handle_healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
