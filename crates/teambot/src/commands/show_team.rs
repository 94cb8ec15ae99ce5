//! `/showteam` - show one team's record

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse,
};

use crate::render;
use crate::service::BotContext;

use super::options::require_string_option;
use super::CommandHandler;

pub struct ShowTeam {
    ctx: BotContext,
}

impl ShowTeam {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }
}

#[serenity::async_trait]
impl CommandHandler for ShowTeam {
    fn name(&self) -> &'static str {
        "showteam"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Show details of a team")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "team_name", "Name of the team")
                    .required(true),
            )
    }

    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> anyhow::Result<()> {
        command.defer(&ctx.http).await?;

        let query = require_string_option(command, "team_name")?;
        let reply = self.ctx.team_service(&ctx.http).show_team(query).await?;

        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().embed(render::embed(&reply)),
            )
            .await?;
        Ok(())
    }
}
