//! Command options as they appear inside interactions and autocomplete
//! callbacks.

use crate::types::application::locale::Locale;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum CommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
}

/// Option the user filled in when invoking a chat input command.
///
/// Subcommands and subcommand groups carry nested `options` instead of a
/// `value`. During autocomplete the option being typed has `focused` set and
/// its `value` is the partial input.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CommandDataOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<bool>,
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<CommandDataOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl CommandDataOption {
    /// The option the user is currently typing, searching nested
    /// subcommands.
    pub fn find_focused(options: &[CommandDataOption]) -> Option<&CommandDataOption> {
        options.iter().find_map(|option| {
            if option.focused == Some(true) {
                return Some(option);
            }

            option.options.as_deref().and_then(Self::find_focused)
        })
    }
}

/// Choice offered to the user, as returned by an autocomplete callback.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CommandOptionChoice {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<HashMap<Locale, String>>,
    pub value: CommandOptionChoiceValue,
}

/// Value of a [`CommandOptionChoice`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOptionChoiceValue {
    String(String),
    Integer(i64),
    Number(f64),
}
