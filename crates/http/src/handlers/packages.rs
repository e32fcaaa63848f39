use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use objscope_core::OBJECT_COUNT_TIMEOUT;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::PackageObjectsResponse;

const PACKAGE_ID_REQUIRED: &str = "package id is required";
const STORE_NOT_CONFIGURED: &str = "database not configured";

pub async fn count_package_objects(
    State(state): State<Arc<AppState>>,
    Path(package_id): Path<String>,
) -> Result<Json<PackageObjectsResponse>, ApiError> {
    if package_id.trim().is_empty() {
        return Err(ApiError::BadRequest(PACKAGE_ID_REQUIRED.to_owned()));
    }
    let store = state
        .store
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable(STORE_NOT_CONFIGURED.to_owned()))?;

    let types = store.count_object_types(&package_id, OBJECT_COUNT_TIMEOUT).await?;
    Ok(Json(PackageObjectsResponse { package_id, types }))
}

pub async fn missing_package_id() -> ApiError {
    ApiError::BadRequest(PACKAGE_ID_REQUIRED.to_owned())
}
