//! Team name value object
//!
//! Team names are stored lowercased; `(guild id, lowercased name)` is the
//! uniqueness key for team records.

use std::fmt;

/// A normalized team name, always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamName(String);

impl TeamName {
    /// Normalize a raw team name as supplied to `create_team`.
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// Normalize a lookup query as supplied to `showteam` / `updateteam`.
    ///
    /// Users often paste a role mention-ish `@name`, so a leading `@` is
    /// stripped (and the remainder trimmed) before normalizing.
    pub fn from_query(raw: &str) -> Self {
        Self::new(strip_mention_prefix(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip a leading `@` (trimming the remainder) without changing case.
///
/// Used for echoing the queried name back in reply titles.
pub fn strip_mention_prefix(raw: &str) -> &str {
    match raw.strip_prefix('@') {
        Some(rest) => rest.trim(),
        None => raw,
    }
}
