//! Bot context - dependency container for command handlers
//!
//! Holds the injected record store and the target guild; handlers derive a
//! per-invocation `TeamService` from it.

use std::sync::Arc;

use serenity::all::{GuildId, Http};
use teambot_core::TeamRepository;

use crate::discord::DiscordRolePlatform;

use super::team_service::TeamService;

/// Dependencies shared by all command handlers.
#[derive(Clone)]
pub struct BotContext {
    guild_id: u64,
    teams: Arc<dyn TeamRepository>,
}

impl BotContext {
    /// Create a new bot context for the configured guild.
    pub fn new(guild_id: u64, teams: Arc<dyn TeamRepository>) -> Self {
        Self { guild_id, teams }
    }

    /// The guild the commands are registered against.
    pub fn guild_id(&self) -> GuildId {
        GuildId::new(self.guild_id)
    }

    /// Build a `TeamService` bound to this invocation's HTTP handle.
    pub fn team_service(&self, http: &Arc<Http>) -> TeamService {
        let platform = DiscordRolePlatform::new(Arc::clone(http), self.guild_id());
        TeamService::new(
            self.guild_id.to_string(),
            Arc::clone(&self.teams),
            Arc::new(platform),
        )
    }
}

impl std::fmt::Debug for BotContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotContext")
            .field("guild_id", &self.guild_id)
            .field("teams", &"TeamRepository")
            .finish()
    }
}
