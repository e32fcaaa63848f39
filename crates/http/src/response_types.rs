//! Response types (Serialize)

use objscope_core::ObjectTypeCount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbStatus {
    Ok,
    Unavailable,
}

/// Body of `GET /health`. `status` is always `"ok"` while the process serves.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub db: DbStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PackageObjectsResponse {
    pub package_id: String,
    pub types: Vec<ObjectTypeCount>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}
