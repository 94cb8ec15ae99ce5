//! Option extraction helpers

use anyhow::anyhow;
use serenity::all::CommandInteraction;

/// Get a string option by name, if the caller supplied it.
pub fn get_string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

/// Get a string option Discord guarantees to be present.
pub fn require_string_option<'a>(
    command: &'a CommandInteraction,
    name: &str,
) -> anyhow::Result<&'a str> {
    get_string_option(command, name)
        .ok_or_else(|| anyhow!("required option {name} missing from {}", command.data.name))
}
