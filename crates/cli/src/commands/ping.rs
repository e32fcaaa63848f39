use anyhow::Result;
use objscope_core::ServiceConfig;

use super::open_store;

pub(crate) async fn run(config: ServiceConfig) -> Result<()> {
    let storage = open_store(&config).await?;
    println!("ok");
    storage.close().await;
    Ok(())
}
