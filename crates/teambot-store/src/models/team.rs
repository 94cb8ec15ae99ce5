//! Team document model

use serde::{Deserialize, Serialize};

/// BSON document stored in the `teams` collection, one per team.
///
/// Field names are camelCase to stay compatible with collections written by
/// earlier deployments of the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDocument {
    pub guild_id: String,
    /// Lowercased; `(guildId, teamName)` is the natural key.
    pub team_name: String,
    pub role_id: String,
    #[serde(default)]
    pub text_channel_id: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub devpost: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
}
