//! Ports - traits implemented by the infrastructure layer

mod repository;

pub use repository::{RepoResult, TeamRepository};
