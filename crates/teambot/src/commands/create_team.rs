//! `/create_team` - create a role-backed team record

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse,
};

use crate::render;
use crate::service::{BotContext, CreateTeamInput};

use super::options::{get_string_option, require_string_option};
use super::CommandHandler;

pub struct CreateTeam {
    ctx: BotContext,
}

impl CreateTeam {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }
}

#[serenity::async_trait]
impl CommandHandler for CreateTeam {
    fn name(&self) -> &'static str {
        "create_team"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Create a team with role, channels, and permissions")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "team_name", "Name of the team")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "members",
                    "Mentioned Discord members (space separated)",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "devpost",
                    "Devpost usernames (comma separated)",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "github", "GitHub repo URL")
                    .required(false),
            )
    }

    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> anyhow::Result<()> {
        command.defer(&ctx.http).await?;

        let input = CreateTeamInput {
            team_name: require_string_option(command, "team_name")?.to_string(),
            members: require_string_option(command, "members")?.to_string(),
            devpost: require_string_option(command, "devpost")?.to_string(),
            github: get_string_option(command, "github").map(str::to_string),
        };

        let reply = self
            .ctx
            .team_service(&ctx.http)
            .create_team(command.user.id.get(), input)
            .await?;

        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().embed(render::embed(&reply)),
            )
            .await?;
        Ok(())
    }
}
