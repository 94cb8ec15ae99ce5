//! MongoDB implementation of TeamRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use tracing::instrument;

use teambot_core::{RepoResult, Team, TeamName, TeamRepository};

use crate::models::TeamDocument;

use super::error::map_store_error;

const COLLECTION: &str = "teams";

/// MongoDB implementation of TeamRepository
#[derive(Clone)]
pub struct MongoTeamRepository {
    collection: Collection<TeamDocument>,
}

impl MongoTeamRepository {
    /// Create a new MongoTeamRepository over the `teams` collection
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl TeamRepository for MongoTeamRepository {
    #[instrument(skip(self))]
    async fn find(&self, guild_id: &str, name: &TeamName) -> RepoResult<Option<Team>> {
        let result = self
            .collection
            .find_one(doc! { "guildId": guild_id, "teamName": name.as_str() })
            .await
            .map_err(map_store_error)?;

        Ok(result.map(Team::from))
    }

    #[instrument(skip(self))]
    async fn find_by_guild(&self, guild_id: &str) -> RepoResult<Vec<Team>> {
        let documents: Vec<TeamDocument> = self
            .collection
            .find(doc! { "guildId": guild_id })
            .await
            .map_err(map_store_error)?
            .try_collect()
            .await
            .map_err(map_store_error)?;

        Ok(documents.into_iter().map(Team::from).collect())
    }

    #[instrument(skip(self, team))]
    async fn upsert(&self, team: &Team) -> RepoResult<()> {
        let document = TeamDocument::from(team);
        self.collection
            .replace_one(
                doc! { "guildId": &team.guild_id, "teamName": team.name.as_str() },
                &document,
            )
            .upsert(true)
            .await
            .map_err(map_store_error)?;

        Ok(())
    }

    #[instrument(skip(self, team))]
    async fn save(&self, team: &Team) -> RepoResult<()> {
        let document = TeamDocument::from(team);
        self.collection
            .replace_one(
                doc! { "guildId": &team.guild_id, "teamName": team.name.as_str() },
                &document,
            )
            .await
            .map_err(map_store_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MongoTeamRepository>();
    }
}
