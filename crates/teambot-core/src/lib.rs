//! # teambot-core
//!
//! Domain layer containing the team entity, value objects, and the record
//! store port. This crate has zero dependencies on infrastructure (Discord
//! client, database driver, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Team, TeamUpdate};
pub use error::DomainError;
pub use traits::{RepoResult, TeamRepository};
pub use value_objects::{
    parse_devpost_usernames, parse_mentions, strip_mention_prefix, MentionToken, TeamName,
};
