//! Interaction responses.
//!
//! The response `type` fixes which callback `data`, if any, accompanies it:
//!
//! | `type` | Variant | `data` |
//! |---|---|---|
//! | 1, 5, 6 | [`InteractionResponse::NoData`] | none |
//! | 4, 7 | [`InteractionResponse::Message`] | [`MessageCallbackData`] |
//! | 8 | [`InteractionResponse::Autocomplete`] | [`AutocompleteCallbackData`] |
//! | 9 | [`InteractionResponse::Modal`] | [`ModalCallbackData`] |

use crate::types::{
    application::command::CommandOptionChoice,
    channel::message::{ActionRow, AllowedMentions, Embed, MessageFlags},
    error::DecodeError,
    id::{marker::AttachmentMarker, Id},
    util::{discriminant, has_field, into_object, MustBeU8, ValueExt},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Type of an [`InteractionResponse`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum InteractionResponseType {
    /// Acknowledge a ping.
    Pong = 1,
    /// Respond with a message.
    ChannelMessageWithSource = 4,
    /// Acknowledge now and send a message later, showing a loading state.
    DeferredChannelMessageWithSource = 5,
    /// Acknowledge a component interaction and edit its message later.
    DeferredUpdateMessage = 6,
    /// Edit the message a component is attached to.
    UpdateMessage = 7,
    ApplicationCommandAutocompleteResult = 8,
    Modal = 9,
}

impl TryFrom<u64> for InteractionResponseType {
    type Error = u64;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Pong,
            4 => Self::ChannelMessageWithSource,
            5 => Self::DeferredChannelMessageWithSource,
            6 => Self::DeferredUpdateMessage,
            7 => Self::UpdateMessage,
            8 => Self::ApplicationCommandAutocompleteResult,
            9 => Self::Modal,
            other => return Err(other),
        })
    }
}

impl<'de> Deserialize<'de> for InteractionResponseType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u64::deserialize(deserializer)?;

        Self::try_from(value).map_err(|value| {
            serde::de::Error::custom(format!("unknown interaction response type: {value}"))
        })
    }
}

impl InteractionResponseType {
    /// Whether responses of this type carry callback `data`.
    pub const fn has_data(self) -> bool {
        !matches!(
            self,
            Self::Pong | Self::DeferredChannelMessageWithSource | Self::DeferredUpdateMessage
        )
    }
}

/// Response types that carry a [`MessageCallbackData`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum MessageResponseType {
    ChannelMessageWithSource = 4,
    UpdateMessage = 7,
}

impl From<MessageResponseType> for InteractionResponseType {
    fn from(kind: MessageResponseType) -> Self {
        match kind {
            MessageResponseType::ChannelMessageWithSource => Self::ChannelMessageWithSource,
            MessageResponseType::UpdateMessage => Self::UpdateMessage,
        }
    }
}

/// Response types that carry no data.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum NoDataResponseType {
    Pong = 1,
    DeferredChannelMessageWithSource = 5,
    DeferredUpdateMessage = 6,
}

impl From<NoDataResponseType> for InteractionResponseType {
    fn from(kind: NoDataResponseType) -> Self {
        match kind {
            NoDataResponseType::Pong => Self::Pong,
            NoDataResponseType::DeferredChannelMessageWithSource => {
                Self::DeferredChannelMessageWithSource
            }
            NoDataResponseType::DeferredUpdateMessage => Self::DeferredUpdateMessage,
        }
    }
}

/// Response to an interaction.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InteractionResponse {
    Message(MessageResponse),
    Autocomplete(AutocompleteResponse),
    Modal(ModalResponse),
    NoData(NoDataResponse),
}

impl InteractionResponse {
    /// Decode a response from an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeErrorType::UnknownDiscriminant`] error type if
    /// `type` isn't one of 1, 4, 5, 6, 7, 8, or 9.
    ///
    /// Returns a [`DecodeErrorType::UnexpectedField`] error type if a
    /// response of type 1, 5, or 6 has a `data` key, even a null one, and a
    /// [`DecodeErrorType::MissingField`] error type if any other response
    /// lacks it.
    ///
    /// [`DecodeErrorType::MissingField`]: crate::types::error::DecodeErrorType::MissingField
    /// [`DecodeErrorType::UnexpectedField`]: crate::types::error::DecodeErrorType::UnexpectedField
    /// [`DecodeErrorType::UnknownDiscriminant`]: crate::types::error::DecodeErrorType::UnknownDiscriminant
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let object = into_object(value)?;
        let kind = InteractionResponseType::try_from(discriminant(&object, "type")?)
            .map_err(|value| DecodeError::unknown_discriminant("type", value))?;

        let data_key = object.contains_key("data");

        match (kind.has_data(), data_key, has_field(&object, "data")) {
            (false, true, _) => {
                tracing::debug!(?kind, "response type does not allow data");

                return Err(DecodeError::unexpected_field("data"));
            }
            (true, _, false) => return Err(DecodeError::missing_field("data")),
            _ => {}
        }

        match kind {
            InteractionResponseType::Pong
            | InteractionResponseType::DeferredChannelMessageWithSource
            | InteractionResponseType::DeferredUpdateMessage => {
                object.deserialize_into().map(Self::NoData)
            }
            InteractionResponseType::ChannelMessageWithSource
            | InteractionResponseType::UpdateMessage => {
                object.deserialize_into().map(Self::Message)
            }
            InteractionResponseType::ApplicationCommandAutocompleteResult => {
                object.deserialize_into().map(Self::Autocomplete)
            }
            InteractionResponseType::Modal => object.deserialize_into().map(Self::Modal),
        }
    }

    pub fn kind(&self) -> InteractionResponseType {
        match self {
            Self::Message(response) => response.kind.into(),
            Self::Autocomplete(_) => InteractionResponseType::ApplicationCommandAutocompleteResult,
            Self::Modal(_) => InteractionResponseType::Modal,
            Self::NoData(response) => response.kind.into(),
        }
    }
}

impl<'de> Deserialize<'de> for InteractionResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Response that sends or edits a message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MessageResponse {
    pub data: MessageCallbackData,
    #[serde(rename = "type")]
    pub kind: MessageResponseType,
}

/// Response listing autocomplete choices.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AutocompleteResponse {
    pub data: AutocompleteCallbackData,
    #[serde(rename = "type")]
    pub kind: MustBeU8<8>,
}

/// Response that opens a modal.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ModalResponse {
    pub data: ModalCallbackData,
    #[serde(rename = "type")]
    pub kind: MustBeU8<9>,
}

/// Pong or deferred acknowledgement.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NoDataResponse {
    #[serde(rename = "type")]
    pub kind: NoDataResponseType,
}

/// Message sent or edited by a [`MessageResponse`]. Every field is
/// optional; absent fields are left untouched on an update.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MessageCallbackData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<CallbackAttachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ActionRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    /// Only [`MessageFlags::EPHEMERAL`] and [`MessageFlags::SUPPRESS_EMBEDS`]
    /// are honoured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
}

/// Attachment kept or uploaded by a [`MessageCallbackData`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CallbackAttachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub id: Id<AttachmentMarker>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AutocompleteCallbackData {
    /// Up to 25 choices.
    pub choices: Vec<CommandOptionChoice>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ModalCallbackData {
    /// Rows of text inputs.
    pub components: Vec<ActionRow>,
    pub custom_id: String,
    pub title: String,
}
