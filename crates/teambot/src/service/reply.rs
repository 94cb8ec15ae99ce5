//! Command outcomes
//!
//! Every handler reply is one of these variants; `crate::render` maps each
//! to exactly one embed shape.

use teambot_core::Team;

use super::platform::SkippedMember;

/// The user-visible outcome of a team command.
///
/// `name` fields carry the name as the user typed it (minus a leading `@`),
/// for echoing back in titles; the stored key is always lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamReply {
    /// Caller's highest role does not outrank the bot's
    PermissionDenied,
    /// Members option contained no valid mention tokens
    MissingMembers,
    /// Devpost option contained no usernames
    MissingDevpost,
    /// Lookup miss; a normal outcome, not an error
    TeamNotFound { name: String },
    /// Update confirmed but no field was supplied
    NothingToUpdate,
    /// Guild has no team records at all
    NoTeams,
    Created {
        name: String,
        team: Team,
        skipped: Vec<SkippedMember>,
    },
    Details {
        name: String,
        team: Team,
    },
    Updated {
        name: String,
        team: Team,
        skipped: Vec<SkippedMember>,
    },
    AllTeams {
        teams: Vec<Team>,
    },
}
