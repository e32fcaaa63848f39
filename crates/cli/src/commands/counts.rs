use anyhow::{Result, bail};
use objscope_core::{OBJECT_COUNT_TIMEOUT, ServiceConfig};
use objscope_http::PackageObjectsResponse;
use objscope_storage::ObjectStore;

use super::open_store;

pub(crate) async fn run(config: ServiceConfig, package_id: String) -> Result<()> {
    if package_id.trim().is_empty() {
        bail!("package id is required");
    }
    let storage = open_store(&config).await?;
    let types = storage.count_object_types(&package_id, OBJECT_COUNT_TIMEOUT).await;
    storage.close().await;

    let response = PackageObjectsResponse { package_id, types: types? };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
