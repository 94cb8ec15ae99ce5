//! Domain entities

mod team;

pub use team::{Team, TeamUpdate};
