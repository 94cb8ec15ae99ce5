//! `/updateteam` - overwrite team fields behind a confirm/cancel prompt
//!
//! The whole exchange is ephemeral. No store or role mutation happens
//! until the invoking user presses the confirm button; cancel and the
//! 60-second timeout leave everything untouched.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};

use crate::render;
use crate::service::{BotContext, UpdateTeamInput};

use super::confirm::{self, Decision};
use super::options::{get_string_option, require_string_option};
use super::CommandHandler;

pub struct UpdateTeam {
    ctx: BotContext,
}

impl UpdateTeam {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }
}

#[serenity::async_trait]
impl CommandHandler for UpdateTeam {
    fn name(&self) -> &'static str {
        "updateteam"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Update team members, devpost usernames, or github repo")
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
                .required(false),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "devpost",
                    "Devpost usernames (comma separated)",
                )
                .required(false),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "github", "GitHub repo URL")
                    .required(false),
            )
    }

    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> anyhow::Result<()> {
        command.defer_ephemeral(&ctx.http).await?;

        let input = UpdateTeamInput {
            team_name: require_string_option(command, "team_name")?.to_string(),
            members: get_string_option(command, "members").map(str::to_string),
            devpost: get_string_option(command, "devpost").map(str::to_string),
            github: get_string_option(command, "github").map(str::to_string),
        };

        let prompt = command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new()
                    .content(confirm::PROMPT)
                    .components(vec![confirm::action_row(false)]),
            )
            .await?;

        match confirm::await_confirmation(ctx, &prompt, command.user.id).await {
            Decision::Confirmed(press) => {
                press
                    .create_response(
                        &ctx.http,
                        CreateInteractionResponse::UpdateMessage(
                            CreateInteractionResponseMessage::new()
                                .components(vec![confirm::action_row(true)]),
                        ),
                    )
                    .await?;

                let reply = self.ctx.team_service(&ctx.http).update_team(input).await?;

                command
                    .edit_response(
                        &ctx.http,
                        EditInteractionResponse::new().embed(render::embed(&reply)),
                    )
                    .await?;
            }
            Decision::Cancelled(press) => {
                press
                    .create_response(
                        &ctx.http,
                        CreateInteractionResponse::UpdateMessage(
                            CreateInteractionResponseMessage::new()
                                .content("Deletion cancelled.")
                                .components(vec![confirm::action_row(true)]),
                        ),
                    )
                    .await?;
            }
            Decision::TimedOut => {
                command
                    .edit_response(
                        &ctx.http,
                        EditInteractionResponse::new()
                            .content("Confirmation not received in time, action cancelled.")
                            .components(vec![confirm::action_row(true)]),
                    )
                    .await?;
            }
        }
        Ok(())
    }
}
