//! # Redis
//!
//! The Catalog Store: one hash, field = `objectID`, value = the item's JSON
//! document. Consulted read-only here; the loader crate fills it.

use std::{collections::HashMap, time::Duration};

use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

use crate::error::AppError;

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();

    client
        .get_connection_manager_with_config(config)
        .await
        .unwrap()
}

/// Full-store read for the scan. Enumeration order is whatever the hash
/// yields, not stable across calls.
pub async fn fetch_catalog(
    mut connection: ConnectionManager,
    store_key: &str,
) -> Result<HashMap<String, String>, AppError> {
    let items: HashMap<String, String> = connection.hgetall(store_key).await?;

    Ok(items)
}
