//! Message component interactions (type 3): button clicks and select menu
//! choices.

use super::{
    context::{ChannelContext, ContextKind, GuildContext, InteractionContext},
    InteractionScope,
};
use crate::types::{
    channel::message::{ComponentType, Message},
    error::DecodeError,
    util::{discriminant, into_object, take_field, JsonObject, MustBeU8, ValueExt},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Message component interaction, in a guild or a direct message.
pub type ComponentInteraction =
    InteractionScope<GuildComponentInteraction, ChannelComponentInteraction>;

/// Data of a message component interaction, selected by `component_type`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentInteractionData {
    Button(ButtonInteractionData),
    SelectMenu(SelectMenuInteractionData),
}

impl ComponentInteractionData {
    /// Decode component data, selecting the shape by its `component_type`.
    ///
    /// Only buttons (2) and string select menus (3) are accepted; every
    /// other component type is reported as
    /// [`DecodeErrorType::UnknownDiscriminant`].
    ///
    /// [`DecodeErrorType::UnknownDiscriminant`]: crate::types::error::DecodeErrorType::UnknownDiscriminant
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let object = into_object(value)?;
        let value = discriminant(&object, "component_type")?;

        match ComponentType::try_from(value) {
            Ok(ComponentType::Button) => object.deserialize_into().map(Self::Button),
            Ok(ComponentType::StringSelect) => object.deserialize_into().map(Self::SelectMenu),
            _ => Err(DecodeError::unknown_discriminant("component_type", value)),
        }
    }

    pub const fn component_type(&self) -> ComponentType {
        match self {
            Self::Button(_) => ComponentType::Button,
            Self::SelectMenu(_) => ComponentType::StringSelect,
        }
    }

    /// Developer-defined identifier of the component.
    pub fn custom_id(&self) -> &str {
        match self {
            Self::Button(data) => &data.custom_id,
            Self::SelectMenu(data) => &data.custom_id,
        }
    }
}

impl<'de> Deserialize<'de> for ComponentInteractionData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ButtonInteractionData {
    pub component_type: MustBeU8<2>,
    pub custom_id: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SelectMenuInteractionData {
    pub component_type: MustBeU8<3>,
    pub custom_id: String,
    /// Values of the options the user picked.
    pub values: Vec<String>,
}

/// Message component interaction (type 3) in a guild.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GuildComponentInteraction {
    #[serde(flatten)]
    pub context: GuildContext,
    pub data: ComponentInteractionData,
    #[serde(rename = "type")]
    pub kind: MustBeU8<3>,
    /// Message the component is attached to.
    pub message: Message,
}

/// Message component interaction (type 3) in a direct message.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChannelComponentInteraction {
    #[serde(flatten)]
    pub context: ChannelContext,
    pub data: ComponentInteractionData,
    #[serde(rename = "type")]
    pub kind: MustBeU8<3>,
    pub message: Message,
}

impl ComponentInteraction {
    pub const fn data(&self) -> &ComponentInteractionData {
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

    pub const fn message(&self) -> &Message {
        match self {
            Self::Guild(interaction) => &interaction.message,
            Self::Channel(interaction) => &interaction.message,
        }
    }

    pub(super) fn decode(mut object: JsonObject) -> Result<Self, DecodeError> {
        let scope = ContextKind::classify(&object)?;
        let data = ComponentInteractionData::from_value(take_field(&mut object, "data")?)?;
        let message = take_field(&mut object, "message")?.deserialize_into()?;

        Ok(match scope {
            ContextKind::Guild => Self::Guild(GuildComponentInteraction {
                context: object.deserialize_into()?,
                data,
                kind: MustBeU8,
                message,
            }),
            ContextKind::Channel => Self::Channel(ChannelComponentInteraction {
                context: object.deserialize_into()?,
                data,
                kind: MustBeU8,
                message,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ComponentInteraction, ComponentInteractionData};
    use crate::types::{
        channel::message::ComponentType, error::DecodeErrorType, test, util::into_object,
    };
    use serde_json::json;

    #[test]
    fn button() {
        let data =
            ComponentInteractionData::from_value(json!({ "component_type": 2, "custom_id": "ok" }))
                .unwrap();

        assert_eq!(data.component_type(), ComponentType::Button);
        assert_eq!(data.custom_id(), "ok");
    }

    #[test]
    fn select_menu_requires_values() {
        let err = ComponentInteractionData::from_value(json!({
            "component_type": 3,
            "custom_id": "colour",
        }))
        .unwrap_err();

        assert!(matches!(err.kind(), DecodeErrorType::ShapeMismatch));
    }

    #[test]
    fn select_menu_values() {
        let data = ComponentInteractionData::from_value(json!({
            "component_type": 3,
            "custom_id": "colour",
            "values": ["red", "blue"],
        }))
        .unwrap();

        let ComponentInteractionData::SelectMenu(menu) = data else {
            panic!("expected select menu data");
        };
        assert_eq!(menu.values, ["red", "blue"]);
    }

    #[test]
    fn other_component_types_are_unknown() {
        for component_type in [1, 4, 5, 8, 42] {
            let err = ComponentInteractionData::from_value(json!({
                "component_type": component_type,
                "custom_id": "x",
                "values": [],
            }))
            .unwrap_err();

            assert!(matches!(
                err.kind(),
                DecodeErrorType::UnknownDiscriminant {
                    field: "component_type",
                    ..
                }
            ));
        }
    }

    #[test]
    fn component_interaction_requires_message() {
        let object = into_object(test::channel_interaction(
            3,
            json!({ "component_type": 2, "custom_id": "ok" }),
        ))
        .unwrap();
        let err = ComponentInteraction::decode(object).unwrap_err();

        assert!(matches!(
            err.kind(),
            DecodeErrorType::MissingField { field: "message" }
        ));
    }
}
