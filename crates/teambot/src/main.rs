//! Team bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p teambot
//! ```
//!
//! Configuration is loaded from environment variables (see `BotConfig`).

use teambot_common::{try_init_tracing, BotConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the bot
    if let Err(e) = run().await {
        error!(error = %e, "Bot failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting team bot...");

    // Load configuration
    let config = BotConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(guild_id = config.discord.guild_id, "Configuration loaded");

    teambot::run(config).await?;

    Ok(())
}
