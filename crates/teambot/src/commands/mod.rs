//! Slash commands
//!
//! Each command is a [`CommandHandler`]: it declares its registration
//! payload and implements its runtime behavior. The [`CommandRegistry`]
//! maps command names to handlers, so registration and dispatch cannot
//! drift apart.

mod confirm;
mod create_team;
mod options;
mod registry;
mod show_all_teams;
mod show_team;
mod update_team;

pub use registry::CommandRegistry;

use serenity::all::{CommandInteraction, Context, CreateCommand};

/// A single slash command: its declaration and its behavior.
#[serenity::async_trait]
pub trait CommandHandler: Send + Sync {
    /// The command name as registered with Discord.
    fn name(&self) -> &'static str;

    /// Build the registration payload.
    fn register(&self) -> CreateCommand;

    /// Handle one invocation.
    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> anyhow::Result<()>;
}
