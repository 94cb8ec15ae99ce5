//! Document models

mod team;

pub use team::TeamDocument;
