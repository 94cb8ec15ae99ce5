//! View model → serenity embed conversion

use serenity::all::CreateEmbed;

use super::view::EmbedView;

/// Convert a view into the serenity builder.
pub fn to_embed(view: EmbedView) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title(view.title).colour(view.color);
    if let Some(description) = view.description {
        embed = embed.description(description);
    }
    for field in view.fields {
        embed = embed.field(field.name, field.value, field.inline);
    }
    embed
}
