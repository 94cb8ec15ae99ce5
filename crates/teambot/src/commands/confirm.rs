//! Confirm/cancel button flow for destructive updates

use std::time::Duration;

use serenity::all::{
    ButtonStyle, ComponentInteraction, Context, CreateActionRow, CreateButton, Message, UserId,
};

pub const CONFIRM_ID: &str = "confirm_button";
pub const CANCEL_ID: &str = "cancel_button";

/// Warning shown above the confirm/cancel buttons.
pub const PROMPT: &str =
    "Are you absolutely sure you want to update team data? This action will delete all previous data!";

const CONFIRM_TIMEOUT: Duration = Duration::from_secs(60);

/// Outcome of the confirmation wait.
///
/// Button presses carry the component interaction so the caller can
/// acknowledge the press on the same message.
pub enum Decision {
    Confirmed(ComponentInteraction),
    Cancelled(ComponentInteraction),
    TimedOut,
}

/// The confirm/cancel button row. Rendered disabled once a decision is
/// reached so the buttons cannot be pressed again.
pub fn action_row(disabled: bool) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(CONFIRM_ID)
            .label("Yes, update details")
            .style(ButtonStyle::Danger)
            .disabled(disabled),
        CreateButton::new(CANCEL_ID)
            .label("Cancel")
            .style(ButtonStyle::Secondary)
            .disabled(disabled),
    ])
}

/// Wait up to 60 seconds for the invoking user to press a button on the
/// prompt message. Presses by other users are filtered out.
pub async fn await_confirmation(ctx: &Context, prompt: &Message, user_id: UserId) -> Decision {
    let Some(press) = prompt
        .await_component_interaction(&ctx.shard)
        .author_id(user_id)
        .timeout(CONFIRM_TIMEOUT)
        .await
    else {
        return Decision::TimedOut;
    };

    if press.data.custom_id == CONFIRM_ID {
        Decision::Confirmed(press)
    } else {
        Decision::Cancelled(press)
    }
}
