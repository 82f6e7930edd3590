//! Modal submit interactions (type 5).

use super::{
    context::{ChannelContext, ContextKind, GuildContext, InteractionContext},
    InteractionScope,
};
use crate::types::{
    channel::message::{ActionRow, Component, Message},
    error::DecodeError,
    util::{discriminant, into_object, take_field, JsonObject, MustBeU8, ValueExt},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Modal submit interaction, in a guild or a direct message.
pub type ModalInteraction = InteractionScope<GuildModalInteraction, ChannelModalInteraction>;

/// Values the user entered in a modal.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ModalSubmitData {
    pub component_type: MustBeU8<4>,
    /// Rows of submitted text inputs, each with its `value` filled in.
    pub components: Vec<ActionRow>,
    pub custom_id: String,
}

impl ModalSubmitData {
    /// Decode modal data, rejecting any `component_type` other than text
    /// input as an unknown discriminant.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let object = into_object(value)?;
        let value = discriminant(&object, "component_type")?;

        if value != u64::from(MustBeU8::<4>::VALUE) {
            return Err(DecodeError::unknown_discriminant("component_type", value));
        }

        object.deserialize_into()
    }

    /// Submitted input with the given `custom_id`, in any row.
    pub fn input(&self, custom_id: &str) -> Option<&Component> {
        self.components
            .iter()
            .flat_map(|row| &row.components)
            .find(|component| component.custom_id.as_deref() == Some(custom_id))
    }
}

/// Modal submit interaction (type 5) in a guild.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GuildModalInteraction {
    #[serde(flatten)]
    pub context: GuildContext,
    pub data: ModalSubmitData,
    #[serde(rename = "type")]
    pub kind: MustBeU8<5>,
    /// Message the modal was opened from, if it came from a component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

/// Modal submit interaction (type 5) in a direct message.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChannelModalInteraction {
    #[serde(flatten)]
    pub context: ChannelContext,
    pub data: ModalSubmitData,
    #[serde(rename = "type")]
    pub kind: MustBeU8<5>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl ModalInteraction {
    pub const fn data(&self) -> &ModalSubmitData {
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
        let data = ModalSubmitData::from_value(take_field(&mut object, "data")?)?;
        let message = match object.remove("message") {
            Some(value) if !value.is_null() => Some(value.deserialize_into()?),
            _ => None,
        };

        Ok(match scope {
            ContextKind::Guild => Self::Guild(GuildModalInteraction {
                context: object.deserialize_into()?,
                data,
                kind: MustBeU8,
                message,
            }),
            ContextKind::Channel => Self::Channel(ChannelModalInteraction {
                context: object.deserialize_into()?,
                data,
                kind: MustBeU8,
                message,
            }),
        })
    }
}
