//! Team entity - a named group bound to a Discord role

use crate::value_objects::{MentionToken, TeamName};

/// A team record, uniquely identified by `(guild_id, name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub guild_id: String,
    pub name: TeamName,
    pub role_id: String,
    /// Reserved for a future per-team text channel; never populated today.
    pub text_channel_id: Option<String>,
    pub members: Vec<MentionToken>,
    pub devpost: Vec<String>,
    pub github: Option<String>,
}

impl Team {
    /// Create a new team record with no text channel assigned.
    pub fn new(
        guild_id: impl Into<String>,
        name: TeamName,
        role_id: impl Into<String>,
        members: Vec<MentionToken>,
        devpost: Vec<String>,
        github: Option<String>,
    ) -> Self {
        Self {
            guild_id: guild_id.into(),
            name,
            role_id: role_id.into(),
            text_channel_id: None,
            members,
            devpost,
            github,
        }
    }

    /// Overwrite only the fields an update explicitly supplies.
    ///
    /// Returns `true` if any field changed, `false` for an empty update.
    pub fn apply_update(&mut self, update: TeamUpdate) -> bool {
        let mut changed = false;

        if let Some(members) = update.members {
            self.members = members;
            changed = true;
        }
        if let Some(devpost) = update.devpost {
            self.devpost = devpost;
            changed = true;
        }
        if let Some(github) = update.github {
            self.github = Some(github);
            changed = true;
        }

        changed
    }
}

/// Partial update for a team record; `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct TeamUpdate {
    pub members: Option<Vec<MentionToken>>,
    pub devpost: Option<Vec<String>>,
    pub github: Option<String>,
}

impl TeamUpdate {
    /// `true` when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.members.is_none() && self.devpost.is_none() && self.github.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::parse_mentions;

    fn sample_team() -> Team {
        Team::new(
            "guild-1",
            TeamName::new("Rocket"),
            "role-1",
            parse_mentions("<@111> <@222>"),
            vec!["userA".to_string(), "userB".to_string()],
            None,
        )
    }

    #[test]
    fn test_new_team_has_no_text_channel() {
        assert_eq!(sample_team().text_channel_id, None);
    }

    #[test]
    fn test_name_is_lowercased() {
        assert_eq!(sample_team().name.as_str(), "rocket");
    }

    #[test]
    fn test_github_only_update_leaves_rest_unchanged() {
        let mut team = sample_team();
        let before_members = team.members.clone();
        let before_devpost = team.devpost.clone();

        let changed = team.apply_update(TeamUpdate {
            github: Some("https://github.com/acme/rocket".to_string()),
            ..TeamUpdate::default()
        });

        assert!(changed);
        assert_eq!(team.members, before_members);
        assert_eq!(team.devpost, before_devpost);
        assert_eq!(team.github.as_deref(), Some("https://github.com/acme/rocket"));
    }

    #[test]
    fn test_members_update_replaces_list() {
        let mut team = sample_team();
        let changed = team.apply_update(TeamUpdate {
            members: Some(parse_mentions("<@333>")),
            ..TeamUpdate::default()
        });

        assert!(changed);
        assert_eq!(team.members.len(), 1);
        assert_eq!(team.members[0].as_str(), "<@333>");
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut team = sample_team();
        let before = team.clone();

        let update = TeamUpdate::default();
        assert!(update.is_empty());
        assert!(!team.apply_update(update));
        assert_eq!(team, before);
    }
}
