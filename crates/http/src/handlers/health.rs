use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use objscope_core::HEALTH_PING_TIMEOUT;

use crate::AppState;
use crate::response_types::{DbStatus, HealthResponse, VersionResponse};

/// Liveness probe. Always 200; only `db` reflects store health.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let db = match state.store.as_ref() {
        Some(store) => match store.ping(HEALTH_PING_TIMEOUT).await {
            Ok(()) => DbStatus::Ok,
            Err(e) => {
                tracing::warn!(error = %e, "health check: store ping failed");
                DbStatus::Unavailable
            },
        },
        None => DbStatus::Unavailable,
    };
    Json(HealthResponse { status: "ok".to_owned(), db })
}

pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION").to_owned() })
}
