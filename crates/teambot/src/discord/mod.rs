//! Serenity-facing adapters: the gateway event handler and the
//! `RolePlatform` implementation.

mod handler;
mod roles;

pub use handler::Handler;
pub use roles::DiscordRolePlatform;
