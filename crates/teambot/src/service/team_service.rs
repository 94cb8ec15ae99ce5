//! Team service
//!
//! Implements the semantics of the four commands: validation order, role
//! side effects, and record store writes.

use std::sync::Arc;

use teambot_core::{
    parse_devpost_usernames, parse_mentions, strip_mention_prefix, MentionToken, Team, TeamName,
    TeamRepository, TeamUpdate,
};
use tracing::{info, instrument, warn};

use super::error::ServiceResult;
use super::platform::{RolePlatform, SkippedMember};
use super::reply::TeamReply;

/// Raw option values for `create_team`.
#[derive(Debug, Clone)]
pub struct CreateTeamInput {
    pub team_name: String,
    pub members: String,
    pub devpost: String,
    pub github: Option<String>,
}

/// Raw option values for `updateteam`; `None` means "not supplied".
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamInput {
    pub team_name: String,
    pub members: Option<String>,
    pub devpost: Option<String>,
    pub github: Option<String>,
}

/// Team service
pub struct TeamService {
    guild_id: String,
    teams: Arc<dyn TeamRepository>,
    platform: Arc<dyn RolePlatform>,
}

impl TeamService {
    /// Create a new TeamService over the injected ports.
    pub fn new(
        guild_id: String,
        teams: Arc<dyn TeamRepository>,
        platform: Arc<dyn RolePlatform>,
    ) -> Self {
        Self {
            guild_id,
            teams,
            platform,
        }
    }

    /// Create a team: validate, create the role, grant it, upsert the record.
    ///
    /// Validation short-circuits in order (permission, members, devpost)
    /// with no side effects.
    #[instrument(skip(self, input), fields(team_name = %input.team_name))]
    pub async fn create_team(
        &self,
        caller_id: u64,
        input: CreateTeamInput,
    ) -> ServiceResult<TeamReply> {
        if !self.platform.caller_outranks_bot(caller_id).await? {
            return Ok(TeamReply::PermissionDenied);
        }

        let mentions = parse_mentions(&input.members);
        if mentions.is_empty() {
            return Ok(TeamReply::MissingMembers);
        }

        let devpost = parse_devpost_usernames(&input.devpost);
        if devpost.is_empty() {
            return Ok(TeamReply::MissingDevpost);
        }

        let name = TeamName::new(&input.team_name);

        // Re-creating a team replaces its record; drop the old role rather
        // than leaving it orphaned.
        if let Some(previous) = self.teams.find(&self.guild_id, &name).await? {
            if let Err(e) = self.platform.delete_role(&previous.role_id).await {
                warn!(role_id = %previous.role_id, error = %e, "Failed to delete replaced team role");
            }
        }

        let role_id = self.platform.create_team_role(&input.team_name).await?;
        let skipped = self.grant_to_members(&mentions, &role_id).await;

        let team = Team::new(
            self.guild_id.clone(),
            name,
            role_id,
            mentions,
            devpost,
            input.github,
        );
        self.teams.upsert(&team).await?;

        info!(team = %team.name, role_id = %team.role_id, "Team created");

        Ok(TeamReply::Created {
            name: input.team_name,
            team,
            skipped,
        })
    }

    /// Look up one team by name. A miss is a normal outcome.
    #[instrument(skip(self))]
    pub async fn show_team(&self, query: &str) -> ServiceResult<TeamReply> {
        let name = TeamName::from_query(query);
        let display = strip_mention_prefix(query).to_string();

        match self.teams.find(&self.guild_id, &name).await? {
            Some(team) => Ok(TeamReply::Details {
                name: display,
                team,
            }),
            None => Ok(TeamReply::TeamNotFound { name: display }),
        }
    }

    /// Apply a confirmed update: replace role membership if members were
    /// supplied, overwrite supplied fields, and save.
    #[instrument(skip(self, input), fields(team_name = %input.team_name))]
    pub async fn update_team(&self, input: UpdateTeamInput) -> ServiceResult<TeamReply> {
        let name = TeamName::from_query(&input.team_name);
        let display = strip_mention_prefix(&input.team_name).to_string();

        let Some(mut team) = self.teams.find(&self.guild_id, &name).await? else {
            return Ok(TeamReply::TeamNotFound { name: display });
        };

        let mut skipped = Vec::new();
        let members = match input.members.as_deref() {
            Some(raw) => {
                let mentions = parse_mentions(raw);
                self.revoke_from_holders(&team.role_id).await?;
                skipped = self.grant_to_members(&mentions, &team.role_id).await;
                Some(mentions)
            }
            None => None,
        };

        let update = TeamUpdate {
            members,
            devpost: input.devpost.as_deref().map(parse_devpost_usernames),
            github: input.github,
        };

        if !team.apply_update(update) {
            return Ok(TeamReply::NothingToUpdate);
        }

        self.teams.save(&team).await?;

        info!(team = %team.name, "Team updated");

        Ok(TeamReply::Updated {
            name: display,
            team,
            skipped,
        })
    }

    /// List every team recorded for the guild.
    #[instrument(skip(self))]
    pub async fn show_all_teams(&self) -> ServiceResult<TeamReply> {
        let teams = self.teams.find_by_guild(&self.guild_id).await?;
        if teams.is_empty() {
            Ok(TeamReply::NoTeams)
        } else {
            Ok(TeamReply::AllTeams { teams })
        }
    }

    /// Grant the role to each mentioned member, best-effort.
    ///
    /// Failures are collected for the reply instead of aborting the whole
    /// operation.
    async fn grant_to_members(
        &self,
        mentions: &[MentionToken],
        role_id: &str,
    ) -> Vec<SkippedMember> {
        let mut skipped = Vec::new();
        for mention in mentions {
            let Some(user_id) = mention.user_id() else {
                skipped.push(SkippedMember {
                    mention: mention.clone(),
                    reason: "invalid mention".to_string(),
                });
                continue;
            };
            if let Err(e) = self.platform.grant_role(user_id, role_id).await {
                warn!(user_id, role_id, error = %e, "Failed to grant team role");
                skipped.push(SkippedMember {
                    mention: mention.clone(),
                    reason: e.to_string(),
                });
            }
        }
        skipped
    }

    /// Revoke the role from everyone currently holding it, best-effort per
    /// member. Enumerating the holders is load-bearing and propagates.
    async fn revoke_from_holders(&self, role_id: &str) -> ServiceResult<()> {
        for holder in self.platform.role_holders(role_id).await? {
            if let Err(e) = self.platform.revoke_role(holder, role_id).await {
                warn!(user_id = holder, role_id, error = %e, "Failed to revoke team role");
            }
        }
        Ok(())
    }
}
