//! Bot configuration
//!
//! Loads configuration from environment variables, with `.env` support.
//! Everything is read once at startup; there is no runtime reconfiguration.

use std::env;

/// Main bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord: DiscordConfig,
    pub store: StoreConfig,
}

/// Discord client configuration
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    /// Bot authentication token
    pub token: String,
    /// Application id the slash commands belong to
    pub application_id: u64,
    /// The single guild the commands are registered against
    pub guild_id: u64,
}

/// Record store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string
    pub uri: String,
    /// Database holding the team collection
    pub database: String,
}

fn default_database() -> String {
    "teambot".to_string()
}

impl BotConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required environment variable is missing or
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            discord: DiscordConfig {
                token: env::var("DISCORD_TOKEN")
                    .map_err(|_| ConfigError::MissingVar("DISCORD_TOKEN"))?,
                application_id: require_u64("DISCORD_APPLICATION_ID")?,
                guild_id: require_u64("DISCORD_GUILD_ID")?,
            },
            store: StoreConfig {
                uri: env::var("MONGODB_URI").map_err(|_| ConfigError::MissingVar("MONGODB_URI"))?,
                database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| default_database()),
            },
        })
    }
}

fn require_u64(name: &'static str) -> Result<u64, ConfigError> {
    let raw = env::var(name).map_err(|_| ConfigError::MissingVar(name))?;
    raw.parse()
        .map_err(|_| ConfigError::InvalidValue(name, raw))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
