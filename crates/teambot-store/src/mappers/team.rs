//! Team entity ↔ document mapping

use teambot_core::{MentionToken, Team, TeamName};

use crate::models::TeamDocument;

impl From<&Team> for TeamDocument {
    fn from(team: &Team) -> Self {
        Self {
            guild_id: team.guild_id.clone(),
            team_name: team.name.as_str().to_string(),
            role_id: team.role_id.clone(),
            text_channel_id: team.text_channel_id.clone(),
            members: team.members.iter().map(|m| m.as_str().to_string()).collect(),
            devpost: team.devpost.clone(),
            github: team.github.clone(),
        }
    }
}

impl From<TeamDocument> for Team {
    fn from(doc: TeamDocument) -> Self {
        Self {
            guild_id: doc.guild_id,
            name: TeamName::new(&doc.team_name),
            role_id: doc.role_id,
            text_channel_id: doc.text_channel_id,
            members: doc.members.into_iter().map(MentionToken::new).collect(),
            devpost: doc.devpost,
            github: doc.github,
        }
    }
}
