//! Application service layer
//!
//! `TeamService` implements the command semantics against two injected
//! ports: the record store (`TeamRepository`, from teambot-core) and the
//! Discord role side effects (`RolePlatform`). Handlers construct it per
//! invocation; tests construct it with in-memory fakes.

mod context;
mod error;
mod platform;
mod reply;
mod team_service;

pub use context::BotContext;
pub use error::{ServiceError, ServiceResult};
pub use platform::{PlatformError, RolePlatform, SkippedMember};
pub use reply::TeamReply;
pub use team_service::{CreateTeamInput, TeamService, UpdateTeamInput};
