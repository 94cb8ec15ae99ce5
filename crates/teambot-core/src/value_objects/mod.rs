//! Value objects for the team domain

mod devpost;
mod mention;
mod team_name;

pub use devpost::parse_devpost_usernames;
pub use mention::{parse_mentions, MentionToken};
pub use team_name::{strip_mention_prefix, TeamName};
