//! Command registry
//!
//! One map from command name to handler drives both guild registration
//! and interaction dispatch.

use std::collections::HashMap;

use serenity::all::{CommandInteraction, Context, GuildId};
use tracing::{debug, error, info};

use crate::service::BotContext;

use super::create_team::CreateTeam;
use super::show_all_teams::ShowAllTeams;
use super::show_team::ShowTeam;
use super::update_team::UpdateTeam;
use super::CommandHandler;

/// Name-to-handler map for every slash command the bot serves.
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Build the registry with every handler wired to the shared context.
    pub fn new(ctx: BotContext) -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(CreateTeam::new(ctx.clone())),
            Box::new(ShowTeam::new(ctx.clone())),
            Box::new(UpdateTeam::new(ctx.clone())),
            Box::new(ShowAllTeams::new(ctx)),
        ];

        Self {
            handlers: handlers.into_iter().map(|h| (h.name(), h)).collect(),
        }
    }

    /// Register every command against the target guild.
    pub async fn register_all(&self, ctx: &Context, guild_id: GuildId) -> anyhow::Result<()> {
        let commands: Vec<_> = self.handlers.values().map(|h| h.register()).collect();
        let registered = guild_id.set_commands(&ctx.http, commands).await?;

        info!(count = registered.len(), "Registered guild slash commands");
        Ok(())
    }

    /// Route one command interaction to its handler.
    ///
    /// Unknown command names are ignored without a reply.
    pub async fn dispatch(&self, ctx: &Context, command: &CommandInteraction) {
        match self.handlers.get(command.data.name.as_str()) {
            Some(handler) => {
                if let Err(e) = handler.run(ctx, command).await {
                    error!(command = %command.data.name, error = ?e, "Command handler failed");
                }
            }
            None => {
                debug!(command = %command.data.name, "Ignoring unrecognized command");
            }
        }
    }
}
