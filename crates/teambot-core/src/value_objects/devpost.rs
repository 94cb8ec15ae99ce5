//! Devpost username list parsing

/// Split a comma-separated devpost option value into usernames.
///
/// Entries are trimmed and empty ones dropped, so `"a, ,b,"` yields
/// `["a", "b"]`.
pub fn parse_devpost_usernames(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
