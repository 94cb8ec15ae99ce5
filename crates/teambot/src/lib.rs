//! # teambot
//!
//! The bot binary crate: serenity client setup, the command registry, the
//! four slash-command handlers, and the service layer gluing Discord side
//! effects to the record store.

pub mod commands;
pub mod discord;
pub mod render;
pub mod service;

use std::sync::Arc;

use serenity::all::{ApplicationId, Client, GatewayIntents, GuildId};
use teambot_common::BotConfig;
use teambot_core::TeamRepository;
use teambot_store::MongoTeamRepository;
use tracing::info;

use crate::commands::CommandRegistry;
use crate::discord::Handler;
use crate::service::BotContext;

/// Connect the record store, build the command registry, and run the
/// gateway client until it stops.
pub async fn run(config: BotConfig) -> anyhow::Result<()> {
    let database = teambot_store::connect(&config.store).await?;
    let teams: Arc<dyn TeamRepository> = Arc::new(MongoTeamRepository::new(&database));
    info!(database = %config.store.database, "Record store connected");

    let registry = CommandRegistry::new(BotContext::new(config.discord.guild_id, teams));
    let handler = Handler::new(registry, GuildId::new(config.discord.guild_id));

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;
    let mut client = Client::builder(&config.discord.token, intents)
        .application_id(ApplicationId::new(config.discord.application_id))
        .event_handler(handler)
        .await?;

    client.start().await?;
    Ok(())
}
