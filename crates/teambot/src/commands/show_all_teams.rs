//! `/showallteams` - list every team in the guild

use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::render;
use crate::service::BotContext;

use super::CommandHandler;

pub struct ShowAllTeams {
    ctx: BotContext,
}

impl ShowAllTeams {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }
}

#[serenity::async_trait]
impl CommandHandler for ShowAllTeams {
    fn name(&self) -> &'static str {
        "showallteams"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Show details of all teams")
    }

    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> anyhow::Result<()> {
        command.defer(&ctx.http).await?;

        let reply = self.ctx.team_service(&ctx.http).show_all_teams().await?;

        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().embed(render::embed(&reply)),
            )
            .await?;
        Ok(())
    }
}
