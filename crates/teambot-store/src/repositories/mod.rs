//! Repository implementations

mod error;
mod team;

pub use team::MongoTeamRepository;
