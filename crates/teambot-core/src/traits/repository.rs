//! Repository trait (port) - defines the interface for record store access
//!
//! The domain layer defines what it needs; the store layer provides the
//! implementation.

use async_trait::async_trait;

use crate::entities::Team;
use crate::error::DomainError;
use crate::value_objects::TeamName;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Access to the persistent team record collection.
///
/// All queries are scoped by guild id; `(guild id, lowercased name)` is the
/// natural key.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find a team by its natural key
    async fn find(&self, guild_id: &str, name: &TeamName) -> RepoResult<Option<Team>>;

    /// List every team recorded for a guild
    async fn find_by_guild(&self, guild_id: &str) -> RepoResult<Vec<Team>>;

    /// Insert a team, replacing any existing record under the same key
    async fn upsert(&self, team: &Team) -> RepoResult<()>;

    /// Persist changes to an existing team record
    async fn save(&self, team: &Team) -> RepoResult<()>;
}
