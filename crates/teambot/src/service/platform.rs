//! Role platform port - Discord side effects behind a trait
//!
//! The domain never talks to serenity directly; the serenity-backed
//! implementation lives in `crate::discord`, and tests substitute fakes.

use async_trait::async_trait;
use teambot_core::MentionToken;
use thiserror::Error;

/// Platform side-effect failures
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Discord API error: {0}")]
    Api(String),

    #[error("Invalid role id: {0}")]
    InvalidRoleId(String),
}

/// Discord role operations needed by the team commands.
///
/// All ids are the opaque strings stored in team records; user ids are the
/// numeric ids extracted from mention tokens.
#[async_trait]
pub trait RolePlatform: Send + Sync {
    /// Proxy permission check: is the caller's highest role strictly above
    /// the bot's highest role?
    async fn caller_outranks_bot(&self, caller_id: u64) -> Result<bool, PlatformError>;

    /// Create a mentionable role named after the team; returns its id.
    async fn create_team_role(&self, team_name: &str) -> Result<String, PlatformError>;

    /// Delete a role.
    async fn delete_role(&self, role_id: &str) -> Result<(), PlatformError>;

    /// Grant a role to one guild member.
    async fn grant_role(&self, user_id: u64, role_id: &str) -> Result<(), PlatformError>;

    /// Revoke a role from one guild member.
    async fn revoke_role(&self, user_id: u64, role_id: &str) -> Result<(), PlatformError>;

    /// Ids of every guild member currently holding the role.
    async fn role_holders(&self, role_id: &str) -> Result<Vec<u64>, PlatformError>;
}

/// A member whose role grant was skipped, and why.
///
/// Per-member grant failures do not abort the operation; they are collected
/// and surfaced in the success reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMember {
    pub mention: MentionToken,
    pub reason: String,
}
