//! Reply rendering
//!
//! Every `TeamReply` variant maps to exactly one embed shape. The mapping
//! is done on a plain [`EmbedView`] first so the formatting rules (mention
//! rendering, field truncation, optional github field) stay unit-testable;
//! the serenity conversion is a thin final step.

mod embed;
mod view;

pub use embed::to_embed;
pub use view::{truncate_field, EmbedView, FieldView, EMBED_FIELD_LIMIT};

use serenity::all::CreateEmbed;

use crate::service::TeamReply;

/// Render a command outcome into a Discord embed.
pub fn embed(reply: &TeamReply) -> CreateEmbed {
    to_embed(EmbedView::from(reply))
}
