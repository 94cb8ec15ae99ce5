//! MongoDB connection management

use mongodb::{Client, Database};
use teambot_common::StoreConfig;

/// Connect to the record store and select the configured database.
///
/// The driver connects lazily; a failure here means the connection string
/// itself is invalid, while an unreachable server surfaces on first use.
pub async fn connect(config: &StoreConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.uri).await?;
    Ok(client.database(&config.database))
}
