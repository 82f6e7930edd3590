//! Inbound interactions.
//!
//! An [`Interaction`] is selected by its `type`. Every type except ping then
//! forks into a guild or direct message shape ([`InteractionScope`]) by
//! which context fields it carries, and its `data` is itself a family with
//! its own discriminant:
//!
//! | `type` | Variant | `data` |
//! |---|---|---|
//! | 1 | [`Interaction::Ping`] | none |
//! | 2 | [`Interaction::ApplicationCommand`] | [`ApplicationCommandData`] |
//! | 3 | [`Interaction::MessageComponent`] | [`ComponentInteractionData`] |
//! | 4 | [`Interaction::Autocomplete`] | [`ApplicationCommandData`] |
//! | 5 | [`Interaction::ModalSubmit`] | [`ModalSubmitData`] |

pub mod application_command;
pub mod message_component;
pub mod modal;
pub mod resolved;

mod context;
mod message_interaction;

pub use self::{
    application_command::{
        ApplicationCommandData, ApplicationCommandInteraction, AutocompleteInteraction,
        ChatInputCommandData, CommandType, ContextMenuCommandData, ContextMenuType,
    },
    context::{ChannelContext, GuildContext, InteractionContext},
    message_component::{
        ButtonInteractionData, ComponentInteraction, ComponentInteractionData,
        SelectMenuInteractionData,
    },
    message_interaction::{MessageInteraction, MessageInteractionType},
    modal::{ModalInteraction, ModalSubmitData},
    resolved::ResolvedData,
};

use self::context::ContextKind;
use crate::types::{
    error::DecodeError,
    guild::GuildMember,
    id::{
        marker::{ApplicationMarker, GuildMarker, InteractionMarker},
        Id,
    },
    user::User,
    util::{discriminant, into_object, MustBeU8, ValueExt},
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Type of an [`Interaction`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutocomplete = 4,
    ModalSubmit = 5,
}

impl InteractionType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ping => "Ping",
            Self::ApplicationCommand => "ApplicationCommand",
            Self::MessageComponent => "MessageComponent",
            Self::ApplicationCommandAutocomplete => "ApplicationCommandAutocomplete",
            Self::ModalSubmit => "ModalSubmit",
        }
    }
}

impl TryFrom<u64> for InteractionType {
    type Error = u64;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::ApplicationCommandAutocomplete,
            5 => Self::ModalSubmit,
            other => return Err(other),
        })
    }
}

/// Ping sent by Discord to check that an endpoint is alive.
///
/// Pings carry no `data` and no context. Every other field is optional so
/// that the bare `{"type":1}` decodes.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PingInteraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Id<ApplicationMarker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<InteractionMarker>>,
    #[serde(rename = "type")]
    pub kind: MustBeU8<1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u8>,
}

/// Interaction that happened either in a guild or in a direct message.
///
/// A payload with any of `app_permissions`, `guild_id`, `guild_locale` or
/// `member` is a guild interaction; one with `user` is a direct message
/// interaction. Payloads with both or neither are rejected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InteractionScope<G, C> {
    Guild(G),
    Channel(C),
}

impl<G, C> InteractionScope<G, C> {
    pub const fn is_guild(&self) -> bool {
        matches!(self, Self::Guild(_))
    }

    pub const fn as_guild(&self) -> Option<&G> {
        match self {
            Self::Guild(guild) => Some(guild),
            Self::Channel(_) => None,
        }
    }

    pub const fn as_channel(&self) -> Option<&C> {
        match self {
            Self::Guild(_) => None,
            Self::Channel(channel) => Some(channel),
        }
    }
}

impl<'de, G: DeserializeOwned, C: DeserializeOwned> Deserialize<'de> for InteractionScope<G, C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let decode = || -> Result<Self, DecodeError> {
            let object = into_object(value)?;

            match ContextKind::classify(&object)? {
                ContextKind::Guild => object.deserialize_into().map(Self::Guild),
                ContextKind::Channel => object.deserialize_into().map(Self::Channel),
            }
        };

        decode().map_err(serde::de::Error::custom)
    }
}

/// Payload sent by Discord when a user interacts with the application.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Interaction {
    Ping(PingInteraction),
    ApplicationCommand(ApplicationCommandInteraction),
    MessageComponent(ComponentInteraction),
    Autocomplete(AutocompleteInteraction),
    ModalSubmit(ModalInteraction),
}

impl Interaction {
    /// Decode an interaction from an untyped JSON value.
    ///
    /// The `type` selects the variant, the context fields select the guild
    /// or direct message shape, and `data` is decoded by its own family so
    /// that an unknown nested discriminant is reported as such.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeErrorType::UnknownDiscriminant`] error type if
    /// `type` isn't between 1 and 5, or if a nested discriminant is out of
    /// range.
    ///
    /// Returns a [`DecodeErrorType::AmbiguousContext`] or
    /// [`DecodeErrorType::MissingContext`] error type if a non-ping
    /// interaction doesn't carry exactly one of the two context shapes.
    ///
    /// Returns a [`DecodeErrorType::UnexpectedField`] error type if a ping
    /// carries `data`.
    ///
    /// [`DecodeErrorType::AmbiguousContext`]: crate::types::error::DecodeErrorType::AmbiguousContext
    /// [`DecodeErrorType::MissingContext`]: crate::types::error::DecodeErrorType::MissingContext
    /// [`DecodeErrorType::UnexpectedField`]: crate::types::error::DecodeErrorType::UnexpectedField
    /// [`DecodeErrorType::UnknownDiscriminant`]: crate::types::error::DecodeErrorType::UnknownDiscriminant
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let object = into_object(value)?;
        let kind = InteractionType::try_from(discriminant(&object, "type")?)
            .map_err(|value| DecodeError::unknown_discriminant("type", value))?;

        tracing::trace!(kind = kind.name(), "decoding interaction");

        match kind {
            InteractionType::Ping => {
                if object.contains_key("data") {
                    tracing::debug!("ping interaction carries data");

                    return Err(DecodeError::unexpected_field("data"));
                }

                object.deserialize_into().map(Self::Ping)
            }
            InteractionType::ApplicationCommand => {
                ApplicationCommandInteraction::decode(object).map(Self::ApplicationCommand)
            }
            InteractionType::MessageComponent => {
                ComponentInteraction::decode(object).map(Self::MessageComponent)
            }
            InteractionType::ApplicationCommandAutocomplete => {
                AutocompleteInteraction::decode(object).map(Self::Autocomplete)
            }
            InteractionType::ModalSubmit => ModalInteraction::decode(object).map(Self::ModalSubmit),
        }
    }

    pub const fn kind(&self) -> InteractionType {
        match self {
            Self::Ping(_) => InteractionType::Ping,
            Self::ApplicationCommand(_) => InteractionType::ApplicationCommand,
            Self::MessageComponent(_) => InteractionType::MessageComponent,
            Self::Autocomplete(_) => InteractionType::ApplicationCommandAutocomplete,
            Self::ModalSubmit(_) => InteractionType::ModalSubmit,
        }
    }

    /// Guild or direct message context, absent for pings.
    pub const fn context(&self) -> Option<InteractionContext<'_>> {
        match self {
            Self::Ping(_) => None,
            Self::ApplicationCommand(interaction) => Some(interaction.context()),
            Self::MessageComponent(interaction) => Some(interaction.context()),
            Self::Autocomplete(interaction) => Some(interaction.context()),
            Self::ModalSubmit(interaction) => Some(interaction.context()),
        }
    }

    /// User who triggered the interaction.
    pub fn author(&self) -> Option<&User> {
        self.context().and_then(InteractionContext::author)
    }

    /// Invoking member, for interactions that happened in a guild.
    pub fn member(&self) -> Option<&GuildMember> {
        match self.context()? {
            InteractionContext::Guild(context) => Some(&context.member),
            InteractionContext::Channel(_) => None,
        }
    }

    pub fn guild_id(&self) -> Option<Id<GuildMarker>> {
        self.context().and_then(InteractionContext::guild_id)
    }

    pub fn id(&self) -> Option<Id<InteractionMarker>> {
        match self {
            Self::Ping(ping) => ping.id,
            _ => self.context().map(InteractionContext::id),
        }
    }

    /// Token used to respond to the interaction.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Ping(ping) => ping.token.as_deref(),
            _ => self.context().map(InteractionContext::token),
        }
    }
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ApplicationCommandData, CommandType, ComponentInteractionData, Interaction,
        InteractionContext, InteractionScope, InteractionType, PingInteraction,
    };
    use crate::types::{
        error::DecodeErrorType,
        id::Id,
        test,
        util::MustBeU8,
    };
    use serde_json::{json, Value};
    use static_assertions::assert_impl_all;
    use std::fmt::Debug;

    assert_impl_all!(Interaction: Clone, Debug, PartialEq, Send, Sync);
    assert_impl_all!(InteractionContext<'static>: Copy, Send, Sync);

    fn button_json() -> Value {
        json!({ "component_type": 2, "custom_id": "ok" })
    }

    fn select_menu_json() -> Value {
        json!({ "component_type": 3, "custom_id": "colour", "values": ["red"] })
    }

    fn user_menu_json() -> Value {
        json!({ "id": "124", "name": "Profile", "type": 2, "target_id": "789" })
    }

    fn message_menu_json() -> Value {
        json!({ "id": "125", "name": "Quote", "type": 3, "target_id": "30" })
    }

    fn modal_json() -> Value {
        json!({ "component_type": 4, "custom_id": "feedback", "components": [] })
    }

    fn with_message(mut value: Value) -> Value {
        value["message"] = test::message_json();

        value
    }

    /// One payload of every interaction and data shape in both scopes, plus
    /// a bare and a complete ping.
    fn all_shapes() -> Vec<Value> {
        vec![
            json!({ "type": 1 }),
            json!({ "type": 1, "application_id": "8", "id": "9", "token": "t", "version": 1 }),
            test::guild_interaction(2, test::command_data_json()),
            test::channel_interaction(2, test::command_data_json()),
            test::guild_interaction(2, user_menu_json()),
            test::channel_interaction(2, user_menu_json()),
            test::guild_interaction(2, message_menu_json()),
            test::channel_interaction(2, message_menu_json()),
            with_message(test::guild_interaction(3, button_json())),
            with_message(test::channel_interaction(3, button_json())),
            with_message(test::guild_interaction(3, select_menu_json())),
            with_message(test::channel_interaction(3, select_menu_json())),
            test::guild_interaction(4, test::command_data_json()),
            test::channel_interaction(4, test::command_data_json()),
            test::guild_interaction(5, modal_json()),
            with_message(test::channel_interaction(5, modal_json())),
        ]
    }

    #[test]
    fn ping() {
        let interaction = Interaction::from_value(json!({ "type": 1 })).unwrap();

        assert_eq!(
            interaction,
            Interaction::Ping(PingInteraction {
                kind: MustBeU8,
                ..PingInteraction::default()
            })
        );
        assert!(interaction.context().is_none());
        assert_eq!(
            serde_json::to_value(&interaction).unwrap(),
            json!({ "type": 1 })
        );
    }

    #[test]
    fn ping_rejects_data() {
        for data in [json!({}), json!(null)] {
            let err = Interaction::from_value(json!({ "type": 1, "data": data })).unwrap_err();

            assert!(matches!(
                err.kind(),
                DecodeErrorType::UnexpectedField { field: "data" }
            ));
        }
    }

    #[test]
    fn guild_chat_input() {
        let interaction = Interaction::from_value(json!({
            "type": 2,
            "data": { "id": "123", "name": "ping", "type": 1 },
            "guild_id": "1",
            "member": test::member_json(),
            "channel_id": "2",
            "token": "t",
            "id": "9",
            "application_id": "8",
            "version": 1,
            "locale": "en-US",
            "guild_locale": "en-US",
        }))
        .unwrap();

        let Interaction::ApplicationCommand(InteractionScope::Guild(command)) = &interaction else {
            panic!("expected guild application command, got {interaction:?}");
        };
        let ApplicationCommandData::ChatInput(data) = &command.data else {
            panic!("expected chat input data");
        };
        assert_eq!(data.name, "ping");
        assert_eq!(command.context.app_permissions, None);
        assert_eq!(interaction.guild_id(), Some(Id::new(1)));
        assert_eq!(interaction.token(), Some("t"));
        assert_eq!(interaction.id(), Some(Id::new(9)));
        assert!(interaction.member().is_some());
    }

    #[test]
    fn component_data_discriminant() {
        let select = with_message(test::guild_interaction(
            3,
            json!({ "component_type": 3, "custom_id": "colour", "values": ["red"] }),
        ));
        let interaction = Interaction::from_value(select).unwrap();
        let Interaction::MessageComponent(component) = &interaction else {
            panic!("expected message component");
        };
        assert!(matches!(
            component.data(),
            ComponentInteractionData::SelectMenu(_)
        ));

        let select_without_values = with_message(test::guild_interaction(
            3,
            json!({ "component_type": 3, "custom_id": "colour" }),
        ));
        assert!(Interaction::from_value(select_without_values).is_err());

        let button = with_message(test::guild_interaction(3, button_json()));
        assert!(Interaction::from_value(button).is_ok());
    }

    #[test]
    fn interaction_type_is_closed() {
        for kind in 0..=10_u64 {
            let mut value = test::guild_interaction(2, test::command_data_json());
            value["type"] = json!(kind);
            if kind == 3 {
                value["data"] = button_json();
                value["message"] = test::message_json();
            }
            if kind == 5 {
                value["data"] = modal_json();
            }
            if kind == 1 {
                value = json!({ "type": 1 });
            }

            let result = Interaction::from_value(value);
            match InteractionType::try_from(kind) {
                Ok(expected) => assert_eq!(result.unwrap().kind(), expected),
                Err(_) => assert!(matches!(
                    result.unwrap_err().kind(),
                    DecodeErrorType::UnknownDiscriminant { field: "type", .. }
                )),
            }
        }
    }

    #[test]
    fn missing_or_invalid_type() {
        let err = Interaction::from_value(json!({ "id": "9" })).unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorType::MissingField { field: "type" }
        ));

        let err = Interaction::from_value(json!({ "type": "2" })).unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorType::InvalidDiscriminant { field: "type" }
        ));

        let err = Interaction::from_value(json!([1])).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorType::NotAnObject));
    }

    #[test]
    fn guild_and_channel_are_exclusive() {
        for field in ["app_permissions", "guild_id", "guild_locale", "member"] {
            let mut value = test::channel_interaction(2, test::command_data_json());
            value[field] = test::guild_interaction(2, Value::Null)
                .get(field)
                .cloned()
                .unwrap_or(json!("2056"));

            let err = Interaction::from_value(value).unwrap_err();
            assert!(matches!(err.kind(), DecodeErrorType::AmbiguousContext));
        }

        let mut value = test::guild_interaction(2, test::command_data_json());
        value["user"] = test::user_json();
        let err = Interaction::from_value(value).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorType::AmbiguousContext));
    }

    #[test]
    fn context_is_required() {
        let mut value = test::channel_interaction(4, test::command_data_json());
        value.as_object_mut().unwrap().remove("user");

        let err = Interaction::from_value(value).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorType::MissingContext));
    }

    #[test]
    fn scopes() {
        for value in all_shapes().into_iter().filter(|value| value["type"] != 1) {
            let expect_guild = value.get("guild_id").is_some();
            let interaction = Interaction::from_value(value).unwrap();

            assert_eq!(interaction.guild_id().is_some(), expect_guild);
            assert_eq!(
                interaction.author().map(|user| user.id),
                Some(Id::new(789))
            );
        }
    }

    #[test]
    fn round_trip() {
        for value in all_shapes() {
            let interaction: Interaction = serde_json::from_value(value.clone()).unwrap();
            let encoded = serde_json::to_value(&interaction).unwrap();

            assert_eq!(encoded, value);
            assert_eq!(
                serde_json::from_value::<Interaction>(encoded).unwrap(),
                interaction
            );
        }
    }

    #[test]
    fn context_menu_targets() {
        let users = test::guild_interaction(2, user_menu_json());
        let messages = test::channel_interaction(2, message_menu_json());

        for (value, kind, target) in [
            (users, CommandType::User, 789),
            (messages, CommandType::Message, 30),
        ] {
            let Interaction::ApplicationCommand(command) = Interaction::from_value(value).unwrap()
            else {
                panic!("expected application command");
            };
            let ApplicationCommandData::ContextMenu(data) = command.data() else {
                panic!("expected context menu data");
            };

            assert_eq!(command.data().kind(), kind);
            assert_eq!(data.target_id, Id::new(target));
        }
    }

    #[test]
    fn author_without_global_name() {
        let mut value = test::channel_interaction(2, test::command_data_json());
        value["user"].as_object_mut().unwrap().remove("global_name");
        let err = Interaction::from_value(value).unwrap_err();

        assert!(matches!(err.kind(), DecodeErrorType::ShapeMismatch));
    }

    #[test]
    fn deserialize_surfaces_decode_error() {
        let err = serde_json::from_value::<Interaction>(json!({ "type": 6 })).unwrap_err();

        assert!(err.to_string().contains("unknown value 6"));
    }

    #[test]
    fn scope_deserializes_by_context() {
        let scope: super::ApplicationCommandInteraction =
            serde_json::from_value(test::channel_interaction(2, test::command_data_json()))
                .unwrap();

        assert!(!scope.is_guild());
        assert!(scope.as_guild().is_none());
        assert_eq!(
            scope.as_channel().map(|command| command.context.user.id),
            Some(Id::new(789))
        );
    }
}
