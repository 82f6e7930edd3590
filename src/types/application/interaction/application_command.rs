//! Application command and autocomplete interactions.
//!
//! Both interaction types carry [`ApplicationCommandData`], which is itself
//! discriminated by its `type` field: chat input commands (1), user context
//! menus (2), and message context menus (3).

use super::{
    context::{ChannelContext, ContextKind, GuildContext, InteractionContext},
    resolved::ResolvedData,
    InteractionScope,
};
use crate::types::{
    application::command::CommandDataOption,
    error::DecodeError,
    id::{
        marker::{CommandMarker, GenericMarker, GuildMarker},
        Id,
    },
    util::{discriminant, into_object, take_field, JsonObject, MustBeU8, ValueExt},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Application command interaction, in a guild or a direct message.
pub type ApplicationCommandInteraction =
    InteractionScope<GuildCommandInteraction, ChannelCommandInteraction>;

/// Autocomplete interaction, in a guild or a direct message.
pub type AutocompleteInteraction =
    InteractionScope<GuildAutocompleteInteraction, ChannelAutocompleteInteraction>;

/// Type of an application command, the discriminant of
/// [`ApplicationCommandData`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum CommandType {
    ChatInput = 1,
    User = 2,
    Message = 3,
}

impl TryFrom<u64> for CommandType {
    type Error = u64;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::ChatInput,
            2 => Self::User,
            3 => Self::Message,
            other => return Err(other),
        })
    }
}

/// Type of a context menu command.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ContextMenuType {
    User = 2,
    Message = 3,
}

/// Data of an application command or autocomplete interaction.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApplicationCommandData {
    ChatInput(ChatInputCommandData),
    ContextMenu(ContextMenuCommandData),
}

impl ApplicationCommandData {
    /// Decode command data, selecting the shape by its `type`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeErrorType::UnknownDiscriminant`] if `type` isn't 1, 2,
    /// or 3, and [`DecodeErrorType::ShapeMismatch`] if the fields don't match
    /// the selected shape.
    ///
    /// [`DecodeErrorType::ShapeMismatch`]: crate::types::error::DecodeErrorType::ShapeMismatch
    /// [`DecodeErrorType::UnknownDiscriminant`]: crate::types::error::DecodeErrorType::UnknownDiscriminant
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let object = into_object(value)?;
        let kind = CommandType::try_from(discriminant(&object, "type")?)
            .map_err(|value| DecodeError::unknown_discriminant("type", value))?;

        match kind {
            CommandType::ChatInput => object.deserialize_into().map(Self::ChatInput),
            CommandType::User | CommandType::Message => {
                object.deserialize_into().map(Self::ContextMenu)
            }
        }
    }

    pub const fn kind(&self) -> CommandType {
        match self {
            Self::ChatInput(_) => CommandType::ChatInput,
            Self::ContextMenu(data) => match data.kind {
                ContextMenuType::User => CommandType::User,
                ContextMenuType::Message => CommandType::Message,
            },
        }
    }

    pub const fn id(&self) -> Id<CommandMarker> {
        match self {
            Self::ChatInput(data) => data.id,
            Self::ContextMenu(data) => data.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::ChatInput(data) => &data.name,
            Self::ContextMenu(data) => &data.name,
        }
    }

    pub const fn resolved(&self) -> Option<&ResolvedData> {
        match self {
            Self::ChatInput(data) => data.resolved.as_ref(),
            Self::ContextMenu(data) => data.resolved.as_ref(),
        }
    }
}

impl<'de> Deserialize<'de> for ApplicationCommandData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Data of a chat input (slash) command.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChatInputCommandData {
    /// Guild the command is registered in, absent for global commands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    pub id: Id<CommandMarker>,
    #[serde(rename = "type")]
    pub kind: MustBeU8<1>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<CommandDataOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ResolvedData>,
}

/// Data of a user or message context menu command.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ContextMenuCommandData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    pub id: Id<CommandMarker>,
    #[serde(rename = "type")]
    pub kind: ContextMenuType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ResolvedData>,
    /// User or message the menu was opened on, depending on `kind`.
    pub target_id: Id<GenericMarker>,
}

/// Application command interaction (type 2) in a guild.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GuildCommandInteraction {
    #[serde(flatten)]
    pub context: GuildContext,
    pub data: ApplicationCommandData,
    #[serde(rename = "type")]
    pub kind: MustBeU8<2>,
}

/// Application command interaction (type 2) in a direct message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelCommandInteraction {
    #[serde(flatten)]
    pub context: ChannelContext,
    pub data: ApplicationCommandData,
    #[serde(rename = "type")]
    pub kind: MustBeU8<2>,
}

/// Autocomplete interaction (type 4) in a guild.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GuildAutocompleteInteraction {
    #[serde(flatten)]
    pub context: GuildContext,
    pub data: ApplicationCommandData,
    #[serde(rename = "type")]
    pub kind: MustBeU8<4>,
}

/// Autocomplete interaction (type 4) in a direct message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelAutocompleteInteraction {
    #[serde(flatten)]
    pub context: ChannelContext,
    pub data: ApplicationCommandData,
    #[serde(rename = "type")]
    pub kind: MustBeU8<4>,
}

impl ApplicationCommandInteraction {
    pub const fn data(&self) -> &ApplicationCommandData {
        match self {
            Self::Guild(interaction) => &interaction.data,
            Self::Channel(interaction) => &interaction.data,
        }
    }

    pub const fn context(&self) -> InteractionContext<'_> {
        match self {
            Self::Guild(interaction) => InteractionContext::Guild(&interaction.context),
            Self::Channel(interaction) => InteractionContext::Channel(&interaction.context),
        }
    }

    pub(super) fn decode(mut object: JsonObject) -> Result<Self, DecodeError> {
        let scope = ContextKind::classify(&object)?;
        let data = ApplicationCommandData::from_value(take_field(&mut object, "data")?)?;

        Ok(match scope {
            ContextKind::Guild => Self::Guild(GuildCommandInteraction {
                context: object.deserialize_into()?,
                data,
                kind: MustBeU8,
            }),
            ContextKind::Channel => Self::Channel(ChannelCommandInteraction {
                context: object.deserialize_into()?,
                data,
                kind: MustBeU8,
            }),
        })
    }
}

impl AutocompleteInteraction {
    pub const fn data(&self) -> &ApplicationCommandData {
        match self {
            Self::Guild(interaction) => &interaction.data,
            Self::Channel(interaction) => &interaction.data,
        }
    }

    pub const fn context(&self) -> InteractionContext<'_> {
        match self {
            Self::Guild(interaction) => InteractionContext::Guild(&interaction.context),
            Self::Channel(interaction) => InteractionContext::Channel(&interaction.context),
        }
    }

    pub(super) fn decode(mut object: JsonObject) -> Result<Self, DecodeError> {
        let scope = ContextKind::classify(&object)?;
        let data = ApplicationCommandData::from_value(take_field(&mut object, "data")?)?;

        Ok(match scope {
            ContextKind::Guild => Self::Guild(GuildAutocompleteInteraction {
                context: object.deserialize_into()?,
                data,
                kind: MustBeU8,
            }),
            ContextKind::Channel => Self::Channel(ChannelAutocompleteInteraction {
                context: object.deserialize_into()?,
                data,
                kind: MustBeU8,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ApplicationCommandData, ApplicationCommandInteraction, CommandType, ContextMenuType,
        GuildCommandInteraction,
    };
    use crate::types::{
        error::DecodeErrorType,
        id::{marker::UserMarker, Id},
        test,
        util::into_object,
    };
    use serde_json::json;
    use static_assertions::assert_impl_all;
    use std::fmt::Debug;

    assert_impl_all!(ApplicationCommandData: Clone, Debug, PartialEq, Send, Sync);

    #[test]
    fn command_type_closed_set() {
        for value in 1..=3_u64 {
            assert!(CommandType::try_from(value).is_ok());
        }

        assert_eq!(CommandType::try_from(0_u64), Err(0));
        assert_eq!(CommandType::try_from(4_u64), Err(4));
    }

    #[test]
    fn chat_input_data() {
        let data = ApplicationCommandData::from_value(json!({
            "id": "123",
            "name": "ban",
            "type": 1,
            "options": [{ "name": "user", "type": 6, "value": "789" }],
            "resolved": { "users": { "789": test::user_json() } },
        }))
        .unwrap();

        assert_eq!(data.kind(), CommandType::ChatInput);
        assert_eq!(data.name(), "ban");
        let users = data.resolved().and_then(|resolved| resolved.users.as_ref()).unwrap();
        assert!(users.contains_key(&Id::new(789)));
    }

    #[test]
    fn user_context_menu_data() {
        let data = ApplicationCommandData::from_value(json!({
            "id": "124",
            "name": "Profile",
            "type": 2,
            "target_id": "789",
        }))
        .unwrap();

        assert_eq!(data.kind(), CommandType::User);
        let ApplicationCommandData::ContextMenu(menu) = data else {
            panic!("expected context menu data");
        };
        assert_eq!(menu.kind, ContextMenuType::User);
        assert_eq!(menu.target_id.cast::<UserMarker>(), Id::new(789));
        assert!(menu.resolved.is_none());
    }

    #[test]
    fn message_context_menu_requires_target() {
        let err = ApplicationCommandData::from_value(json!({
            "id": "125",
            "name": "Quote",
            "type": 3,
        }))
        .unwrap_err();

        assert!(matches!(err.kind(), DecodeErrorType::ShapeMismatch));
    }

    #[test]
    fn unknown_command_type() {
        let err = ApplicationCommandData::from_value(json!({
            "id": "126",
            "name": "Launch",
            "type": 4,
        }))
        .unwrap_err();

        assert!(matches!(
            err.kind(),
            DecodeErrorType::UnknownDiscriminant {
                field: "type",
                value: 4
            }
        ));
    }

    #[test]
    fn chat_input_shape_rejects_context_menu_type() {
        let result = serde_json::from_value::<super::ChatInputCommandData>(json!({
            "id": "124",
            "name": "Profile",
            "type": 2,
        }));

        assert!(result.is_err());
    }

    #[test]
    fn decode_reports_nested_discriminant() {
        let object = into_object(test::guild_interaction(
            2,
            json!({ "id": "1", "name": "x", "type": 9 }),
        ))
        .unwrap();
        let err = ApplicationCommandInteraction::decode(object).unwrap_err();

        assert!(matches!(
            err.kind(),
            DecodeErrorType::UnknownDiscriminant { value: 9, .. }
        ));
    }

    #[test]
    fn guild_shape_deserializes_directly() {
        let interaction: GuildCommandInteraction =
            serde_json::from_value(test::guild_interaction(2, test::command_data_json()))
                .unwrap();

        assert_eq!(interaction.context.guild_id, Id::new(1));
        assert_eq!(interaction.data.id(), Id::new(123));
    }

    #[test]
    fn guild_shape_rejects_other_interaction_type() {
        let result = serde_json::from_value::<GuildCommandInteraction>(test::guild_interaction(
            4,
            test::command_data_json(),
        ));

        assert!(result.is_err());
    }
}
