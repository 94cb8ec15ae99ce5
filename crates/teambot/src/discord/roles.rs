//! Serenity-backed RolePlatform implementation

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{EditRole, GuildId, Http, Member, Role, RoleId, UserId};

use crate::service::{PlatformError, RolePlatform};

/// Discord role operations for a single guild, over the REST API.
pub struct DiscordRolePlatform {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl DiscordRolePlatform {
    /// Create a new DiscordRolePlatform bound to one guild.
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }

    async fn member(&self, user_id: u64) -> Result<Member, PlatformError> {
        self.guild_id
            .member(&self.http, UserId::new(user_id))
            .await
            .map_err(map_api_error)
    }
}

#[async_trait]
impl RolePlatform for DiscordRolePlatform {
    async fn caller_outranks_bot(&self, caller_id: u64) -> Result<bool, PlatformError> {
        let bot_user = self.http.get_current_user().await.map_err(map_api_error)?;
        let bot = self.member(bot_user.id.get()).await?;
        let caller = self.member(caller_id).await?;
        let roles = self.guild_id.roles(&self.http).await.map_err(map_api_error)?;

        Ok(highest_position(&caller, &roles) > highest_position(&bot, &roles))
    }

    async fn create_team_role(&self, team_name: &str) -> Result<String, PlatformError> {
        let reason = format!("Team role for {team_name}");
        let role = self
            .guild_id
            .create_role(
                &self.http,
                EditRole::new()
                    .name(team_name)
                    .mentionable(true)
                    .audit_log_reason(&reason),
            )
            .await
            .map_err(map_api_error)?;

        Ok(role.id.to_string())
    }

    async fn delete_role(&self, role_id: &str) -> Result<(), PlatformError> {
        let role_id = parse_role_id(role_id)?;
        self.guild_id
            .delete_role(&self.http, role_id)
            .await
            .map_err(map_api_error)
    }

    async fn grant_role(&self, user_id: u64, role_id: &str) -> Result<(), PlatformError> {
        let role_id = parse_role_id(role_id)?;
        let member = self.member(user_id).await?;
        member
            .add_role(&self.http, role_id)
            .await
            .map_err(map_api_error)
    }

    async fn revoke_role(&self, user_id: u64, role_id: &str) -> Result<(), PlatformError> {
        let role_id = parse_role_id(role_id)?;
        let member = self.member(user_id).await?;
        member
            .remove_role(&self.http, role_id)
            .await
            .map_err(map_api_error)
    }

    async fn role_holders(&self, role_id: &str) -> Result<Vec<u64>, PlatformError> {
        let target = parse_role_id(role_id)?;
        let mut holders = Vec::new();
        let mut after: Option<UserId> = None;

        // The member list endpoint is paged; walk it with the last member's
        // id as the cursor until a short batch signals the end.
        loop {
            let batch = self
                .guild_id
                .members(&self.http, Some(MEMBER_PAGE_SIZE), after)
                .await
                .map_err(map_api_error)?;

            holders.extend(
                batch
                    .iter()
                    .filter(|member| member.roles.contains(&target))
                    .map(|member| member.user.id.get()),
            );

            after = next_page_after(batch.len(), batch.last().map(|m| m.user.id));
            if after.is_none() {
                break;
            }
        }

        Ok(holders)
    }
}

const MEMBER_PAGE_SIZE: u64 = 1000;

/// Cursor for the next member page: `None` once a batch comes back shorter
/// than a full page, otherwise the last member's id.
fn next_page_after(batch_len: usize, last_id: Option<UserId>) -> Option<UserId> {
    if batch_len < MEMBER_PAGE_SIZE as usize {
        None
    } else {
        last_id
    }
}

fn highest_position(member: &Member, roles: &HashMap<RoleId, Role>) -> u16 {
    member
        .roles
        .iter()
        .filter_map(|id| roles.get(id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0)
}

fn map_api_error(e: serenity::Error) -> PlatformError {
    PlatformError::Api(e.to_string())
}

fn parse_role_id(raw: &str) -> Result<RoleId, PlatformError> {
    raw.parse::<u64>()
        .map(RoleId::new)
        .map_err(|_| PlatformError::InvalidRoleId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_id() {
        assert!(parse_role_id("123456789").is_ok());
        assert!(parse_role_id("not-a-number").is_err());
    }

    #[test]
    fn test_member_paging_continues_on_full_pages_only() {
        let last = Some(UserId::new(42));

        // A full page means more members may follow
        assert_eq!(next_page_after(1000, last), last);
        // A short (or empty) batch ends the walk
        assert_eq!(next_page_after(999, last), None);
        assert_eq!(next_page_after(0, None), None);
    }
}
