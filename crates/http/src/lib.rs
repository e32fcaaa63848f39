//! HTTP API server for objscope.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod response_types;

use std::sync::Arc;

use axum::{Router, routing::get};
use objscope_storage::ObjectStore;
use tower_http::trace::TraceLayer;

pub use response_types::{DbStatus, HealthResponse, PackageObjectsResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// The store is optional so the router can run (and report the store as
/// unavailable) without a database.
pub struct AppState {
    pub store: Option<Arc<dyn ObjectStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn without_store() -> Self {
        Self { store: None }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/version", get(handlers::health::version))
        .route("/packages/{package_id}/objects", get(handlers::packages::count_package_objects))
        // Empty segment never binds `{package_id}`.
        .route("/packages//objects", get(handlers::packages::missing_package_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
