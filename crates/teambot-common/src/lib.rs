//! # teambot-common
//!
//! Shared utilities: environment-based configuration and tracing setup.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{BotConfig, ConfigError, DiscordConfig, StoreConfig};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
