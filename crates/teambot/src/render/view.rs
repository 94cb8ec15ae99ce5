//! Embed view model
//!
//! A plain representation of the reply embed: title, description, color,
//! and fields. Building it is pure, so the formatting rules are covered by
//! unit tests without a Discord client.

use teambot_core::Team;

use crate::service::{SkippedMember, TeamReply};

/// Discord caps embed field values at this many characters.
pub const EMBED_FIELD_LIMIT: usize = 1024;

const ERROR_RED: u32 = 0xff_00_00;
const CREATED_GREEN: u32 = 0x00_ff_99;
const DETAILS_BLUE: u32 = 0x33_99_ff;
const UPDATED_CYAN: u32 = 0x00_cc_ff;
const LIST_BLUE: u32 = 0x00_bf_ff;
const WARNING_YELLOW: u32 = 0xff_cc_00;

/// A single embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Plain embed representation, independent of the Discord client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedView {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<FieldView>,
}

impl EmbedView {
    fn notice(title: &str, description: &str, color: u32) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.to_string()),
            color,
            fields: Vec::new(),
        }
    }
}

impl From<&TeamReply> for EmbedView {
    fn from(reply: &TeamReply) -> Self {
        match reply {
            TeamReply::PermissionDenied => Self::notice(
                "Permission Denied",
                "You don't have permission to use this command.",
                ERROR_RED,
            ),
            TeamReply::MissingMembers => Self::notice(
                "Missing Members",
                "Please mention at least one member.",
                ERROR_RED,
            ),
            TeamReply::MissingDevpost => Self::notice(
                "Missing Devpost Usernames",
                "Please provide at least one Devpost username.",
                ERROR_RED,
            ),
            TeamReply::TeamNotFound { name } => Self::notice(
                "Team Not Found",
                &format!("No team found with the name \"{name}\"."),
                ERROR_RED,
            ),
            TeamReply::NothingToUpdate => Self::notice(
                "Nothing to Update",
                "Please provide members and/or devpost usernames and/or github repo to update.",
                WARNING_YELLOW,
            ),
            TeamReply::NoTeams => Self::notice(
                "No Teams Found",
                "There are no teams in this server.",
                ERROR_RED,
            ),
            TeamReply::Created {
                name,
                team,
                skipped,
            } => created_view(name, team, skipped),
            TeamReply::Details { name, team } => {
                record_view(&format!("Team \"{name}\" Details"), team, &[], DETAILS_BLUE)
            }
            TeamReply::Updated {
                name,
                team,
                skipped,
            } => record_view(&format!("Team \"{name}\" Updated"), team, skipped, UPDATED_CYAN),
            TeamReply::AllTeams { teams } => all_teams_view(teams),
        }
    }
}

fn created_view(name: &str, team: &Team, skipped: &[SkippedMember]) -> EmbedView {
    let mut fields = vec![
        FieldView {
            name: "Role".to_string(),
            value: role_mention(&team.role_id),
            inline: true,
        },
        FieldView {
            name: "Devpost Usernames".to_string(),
            value: team.devpost.join(", "),
            inline: false,
        },
    ];
    if let Some(github) = &team.github {
        fields.push(FieldView {
            name: "GitHub Repo".to_string(),
            value: github.clone(),
            inline: false,
        });
    }
    push_skipped(&mut fields, skipped);

    EmbedView {
        title: format!("Team \"{name}\" Created"),
        description: None,
        color: CREATED_GREEN,
        fields,
    }
}

fn record_view(title: &str, team: &Team, skipped: &[SkippedMember], color: u32) -> EmbedView {
    let mut fields = vec![
        FieldView {
            name: "Role".to_string(),
            value: role_mention(&team.role_id),
            inline: true,
        },
        FieldView {
            name: "Text Channel".to_string(),
            value: text_channel(team),
            inline: true,
        },
        FieldView {
            name: "Members".to_string(),
            value: members_line(team),
            inline: false,
        },
        FieldView {
            name: "Devpost Usernames".to_string(),
            value: team.devpost.join(", "),
            inline: false,
        },
    ];
    if let Some(github) = &team.github {
        fields.push(FieldView {
            name: "GitHub Repo".to_string(),
            value: github.clone(),
            inline: false,
        });
    }
    push_skipped(&mut fields, skipped);

    EmbedView {
        title: title.to_string(),
        description: None,
        color,
        fields,
    }
}

fn all_teams_view(teams: &[Team]) -> EmbedView {
    let fields = teams
        .iter()
        .map(|team| {
            let mut value = format!(
                "Role: {}\nText: {}\nMembers: {}\nDevpost: {}",
                role_mention(&team.role_id),
                text_channel(team),
                members_line(team),
                team.devpost.join(", "),
            );
            if let Some(github) = &team.github {
                value.push_str("\nGitHub: ");
                value.push_str(github);
            }
            FieldView {
                name: team.name.as_str().to_string(),
                value: truncate_field(&value),
                inline: false,
            }
        })
        .collect();

    EmbedView {
        title: "All Teams".to_string(),
        description: None,
        color: LIST_BLUE,
        fields,
    }
}

fn push_skipped(fields: &mut Vec<FieldView>, skipped: &[SkippedMember]) {
    if skipped.is_empty() {
        return;
    }
    let value = skipped
        .iter()
        .map(|s| format!("{} ({})", s.mention, s.reason))
        .collect::<Vec<_>>()
        .join("\n");
    fields.push(FieldView {
        name: "Skipped Members".to_string(),
        value: truncate_field(&value),
        inline: false,
    });
}

fn role_mention(role_id: &str) -> String {
    format!("<@&{role_id}>")
}

fn text_channel(team: &Team) -> String {
    match &team.text_channel_id {
        Some(id) => format!("<#{id}>"),
        None => "N/A".to_string(),
    }
}

fn members_line(team: &Team) -> String {
    if team.members.is_empty() {
        return "N/A".to_string();
    }
    team.members
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate a field value to the Discord limit, marking the cut with an
/// ellipsis so the total is exactly [`EMBED_FIELD_LIMIT`] characters.
pub fn truncate_field(value: &str) -> String {
    if value.chars().count() <= EMBED_FIELD_LIMIT {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(EMBED_FIELD_LIMIT - 3).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use teambot_core::{parse_mentions, TeamName};

    use super::*;

    fn rocket() -> Team {
        Team::new(
            "g1",
            TeamName::new("Rocket"),
            "42",
            parse_mentions("<@111> <@222>"),
            vec!["userA".to_string(), "userB".to_string()],
            None,
        )
    }

    #[test]
    fn test_truncate_leaves_short_values_alone() {
        assert_eq!(truncate_field("short"), "short");
        let exact = "x".repeat(EMBED_FIELD_LIMIT);
        assert_eq!(truncate_field(&exact), exact);
    }

    #[test]
    fn test_truncate_is_exactly_the_limit() {
        let long = "x".repeat(2000);
        let truncated = truncate_field(&long);
        assert_eq!(truncated.chars().count(), EMBED_FIELD_LIMIT);
        assert!(truncated.ends_with("..."));
        assert_eq!(&truncated[..EMBED_FIELD_LIMIT - 3], &long[..EMBED_FIELD_LIMIT - 3]);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let long = "é".repeat(2000);
        let truncated = truncate_field(&long);
        assert_eq!(truncated.chars().count(), EMBED_FIELD_LIMIT);
    }

    #[test]
    fn test_created_embed_without_github_has_no_github_field() {
        let reply = TeamReply::Created {
            name: "Rocket".to_string(),
            team: rocket(),
            skipped: Vec::new(),
        };
        let view = EmbedView::from(&reply);

        assert_eq!(view.title, "Team \"Rocket\" Created");
        let names: Vec<_> = view.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Role", "Devpost Usernames"]);
        assert_eq!(view.fields[0].value, "<@&42>");
        assert_eq!(view.fields[1].value, "userA, userB");
    }

    #[test]
    fn test_created_embed_with_github_and_skips() {
        let mut team = rocket();
        team.github = Some("https://github.com/acme/rocket".to_string());
        let reply = TeamReply::Created {
            name: "Rocket".to_string(),
            team,
            skipped: vec![SkippedMember {
                mention: parse_mentions("<@222>").remove(0),
                reason: "Unknown Member".to_string(),
            }],
        };
        let view = EmbedView::from(&reply);

        let names: Vec<_> = view.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Role", "Devpost Usernames", "GitHub Repo", "Skipped Members"]
        );
        assert_eq!(view.fields[3].value, "<@222> (Unknown Member)");
    }

    #[test]
    fn test_details_embed_shape() {
        let reply = TeamReply::Details {
            name: "Rocket".to_string(),
            team: rocket(),
        };
        let view = EmbedView::from(&reply);

        assert_eq!(view.title, "Team \"Rocket\" Details");
        let names: Vec<_> = view.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Role", "Text Channel", "Members", "Devpost Usernames"]
        );
        assert_eq!(view.fields[1].value, "N/A");
        assert_eq!(view.fields[2].value, "<@111> <@222>");
    }

    #[test]
    fn test_all_teams_one_field_per_team_with_truncation() {
        let mut big = rocket();
        big.devpost = vec!["d".repeat(2000)];
        let reply = TeamReply::AllTeams {
            teams: vec![rocket(), big],
        };
        let view = EmbedView::from(&reply);

        assert_eq!(view.title, "All Teams");
        assert_eq!(view.fields.len(), 2);
        assert_eq!(view.fields[0].name, "rocket");
        assert!(view.fields[0].value.starts_with("Role: <@&42>\nText: N/A\n"));
        assert_eq!(view.fields[1].value.chars().count(), EMBED_FIELD_LIMIT);
        assert!(view.fields[1].value.ends_with("..."));
    }

    #[test]
    fn test_error_notices_are_red() {
        let view = EmbedView::from(&TeamReply::TeamNotFound {
            name: "Ghost".to_string(),
        });
        assert_eq!(view.title, "Team Not Found");
        assert_eq!(view.color, 0xff_00_00);
        assert_eq!(
            view.description.as_deref(),
            Some("No team found with the name \"Ghost\".")
        );
    }

    #[test]
    fn test_nothing_to_update_is_yellow() {
        let view = EmbedView::from(&TeamReply::NothingToUpdate);
        assert_eq!(view.color, 0xff_cc_00);
    }
}
