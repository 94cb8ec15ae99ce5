//! Gateway event handler

use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use tracing::{error, info};

use crate::commands::CommandRegistry;

/// Serenity event handler: registers the slash commands once on ready and
/// routes command interactions into the registry.
pub struct Handler {
    registry: CommandRegistry,
    guild_id: GuildId,
}

impl Handler {
    /// Create a new Handler for the configured guild.
    pub fn new(registry: CommandRegistry, guild_id: GuildId) -> Self {
        Self { registry, guild_id }
    }
}

#[serenity::async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "Logged in");

        if let Err(e) = self.registry.register_all(&ctx, self.guild_id).await {
            error!(error = ?e, "Failed to register slash commands");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            self.registry.dispatch(&ctx, &command).await;
        }
    }
}
