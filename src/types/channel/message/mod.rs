pub mod component;
pub mod embed;

mod allowed_mentions;

pub use self::{
    allowed_mentions::{AllowedMentions, MentionType},
    component::{ActionRow, Component, ComponentEmoji, ComponentType, SelectMenuOption},
    embed::Embed,
};

use crate::types::{
    application::interaction::MessageInteraction,
    channel::Attachment,
    id::{
        marker::{ApplicationMarker, ChannelMarker, GuildMarker, MessageMarker, RoleMarker},
        Id,
    },
    user::User,
    util::Timestamp,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Flags of a message, also used to mark interaction responses as
    /// ephemeral.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        const CROSSPOSTED = 1;
        const IS_CROSSPOST = 1 << 1;
        const SUPPRESS_EMBEDS = 1 << 2;
        const SOURCE_MESSAGE_DELETED = 1 << 3;
        const URGENT = 1 << 4;
        const HAS_THREAD = 1 << 5;
        const EPHEMERAL = 1 << 6;
        const LOADING = 1 << 7;
        const FAILED_TO_MENTION_SOME_ROLES_IN_THREAD = 1 << 8;
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
        const IS_VOICE_MESSAGE = 1 << 13;
    }
}

impl<'de> Deserialize<'de> for MessageFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_retain(u64::deserialize(deserializer)?))
    }
}

impl Serialize for MessageFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

/// Message a component is attached to, or that resolved data refers to.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Id<ApplicationMarker>>,
    pub attachments: Vec<Attachment>,
    pub author: User,
    pub channel_id: Id<ChannelMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ActionRow>>,
    pub content: String,
    #[serde(deserialize_with = "crate::types::util::nullable::required")]
    pub edited_timestamp: Option<Timestamp>,
    pub embeds: Vec<Embed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    pub id: Id<MessageMarker>,
    /// Present when the message is a response to an interaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<MessageInteraction>,
    /// Message type; not a discriminant of any shape in this crate.
    #[serde(rename = "type")]
    pub kind: u8,
    pub mention_everyone: bool,
    pub mention_roles: Vec<Id<RoleMarker>>,
    pub mentions: Vec<User>,
    pub pinned: bool,
    pub timestamp: Timestamp,
    pub tts: bool,
}

#[cfg(test)]
mod tests {
    use super::{Message, MessageFlags};
    use crate::types::{application::interaction::MessageInteractionType, id::Id, test};
    use serde_json::json;
    use serde_test::Token;

    #[test]
    fn flags_as_integer() {
        serde_test::assert_tokens(&MessageFlags::EPHEMERAL, &[Token::U64(64)]);
    }

    #[test]
    fn message() {
        let message: Message = serde_json::from_value(test::message_json()).unwrap();
        assert_eq!(message.id, Id::new(30));
        assert_eq!(message.author.username, "alice");
        assert!(message.edited_timestamp.is_none());
        assert!(message.components.is_none());

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["edited_timestamp"], json!(null));
    }

    #[test]
    fn edited_timestamp_is_required() {
        let mut value = test::message_json();
        value.as_object_mut().unwrap().remove("edited_timestamp");

        assert!(serde_json::from_value::<Message>(value).is_err());
    }

    #[test]
    fn interaction_response_message() {
        let mut value = test::message_json();
        value["interaction"] = json!({
            "id": "9",
            "type": 2,
            "name": "ping",
            "user": test::user_json(),
        });
        value["flags"] = json!(64);

        let message: Message = serde_json::from_value(value).unwrap();
        let interaction = message.interaction.unwrap();
        assert_eq!(interaction.kind, MessageInteractionType::ApplicationCommand);
        assert_eq!(interaction.name, "ping");
        assert_eq!(message.flags, Some(MessageFlags::EPHEMERAL));
    }
}
