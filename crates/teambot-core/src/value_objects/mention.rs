//! User mention tokens parsed from raw command input

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `<@123>` and the legacy nickname form `<@!123>`.
static MENTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@!?(\d+)>").expect("mention pattern is valid"));

/// A raw Discord user mention, e.g. `<@123456789>`.
///
/// Tokens are stored verbatim so they render as clickable mentions when
/// echoed back into a message. The numeric user id can be extracted for
/// role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MentionToken(String);

impl MentionToken {
    /// Wrap a raw mention token. Callers are expected to pass tokens
    /// produced by [`parse_mentions`].
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the numeric user id, or `None` if the token is malformed.
    pub fn user_id(&self) -> Option<u64> {
        MENTION_PATTERN
            .captures(&self.0)
            .and_then(|caps| caps.get(1))
            .and_then(|id| id.as_str().parse().ok())
    }
}

impl fmt::Display for MentionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract every user mention from a raw option value, in input order.
///
/// Anything that is not a `<@digits>` or `<@!digits>` token is ignored, so
/// a members string with no valid mentions yields an empty vector.
pub fn parse_mentions(input: &str) -> Vec<MentionToken> {
    MENTION_PATTERN
        .find_iter(input)
        .map(|m| MentionToken::new(m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_mentions() {
        let tokens = parse_mentions("<@111> <@222>");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].as_str(), "<@111>");
        assert_eq!(tokens[1].as_str(), "<@222>");
    }

    #[test]
    fn test_parse_nickname_form() {
        let tokens = parse_mentions("<@!333>");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].user_id(), Some(333));
    }

    #[test]
    fn test_parse_mixed_with_noise() {
        let tokens = parse_mentions("please add <@111>, <@!222> and also bob");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].user_id(), Some(111));
        assert_eq!(tokens[1].user_id(), Some(222));
    }

    #[test]
    fn test_no_valid_mentions() {
        assert!(parse_mentions("alice bob @charlie <@not-a-number>").is_empty());
        assert!(parse_mentions("").is_empty());
    }

    #[test]
    fn test_user_id_extraction() {
        assert_eq!(MentionToken::new("<@987654321>").user_id(), Some(987_654_321));
        assert_eq!(MentionToken::new("<@!42>").user_id(), Some(42));
        assert_eq!(MentionToken::new("garbage").user_id(), None);
    }

    #[test]
    fn test_preserves_input_order() {
        let tokens = parse_mentions("<@3> <@1> <@2>");
        let ids: Vec<_> = tokens.iter().filter_map(MentionToken::user_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
