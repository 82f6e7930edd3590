use crate::types::{
    channel::{message::Message, Attachment, PartialChannel},
    guild::{GuildMember, Role},
    id::{
        marker::{AttachmentMarker, ChannelMarker, MessageMarker, RoleMarker, UserMarker},
        Id,
    },
    user::User,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entities referenced by the options or target of a command, keyed by id.
///
/// Members are partial here: their `user` is omitted and found in `users`
/// under the same id.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ResolvedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<HashMap<Id<AttachmentMarker>, Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<HashMap<Id<ChannelMarker>, PartialChannel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<HashMap<Id<UserMarker>, GuildMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<HashMap<Id<MessageMarker>, Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<HashMap<Id<RoleMarker>, Role>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<HashMap<Id<UserMarker>, User>>,
}

#[cfg(test)]
mod tests {
    use super::ResolvedData;
    use crate::types::{id::Id, test};
    use serde_json::json;

    #[test]
    fn empty() {
        let resolved: ResolvedData = serde_json::from_value(json!({})).unwrap();

        assert_eq!(resolved, ResolvedData::default());
        assert_eq!(serde_json::to_value(&resolved).unwrap(), json!({}));
    }

    #[test]
    fn empty_map_is_kept() {
        let resolved: ResolvedData = serde_json::from_value(json!({ "roles": {} })).unwrap();

        assert!(resolved.roles.as_ref().is_some_and(|roles| roles.is_empty()));
        assert_eq!(serde_json::to_value(&resolved).unwrap(), json!({ "roles": {} }));
    }

    #[test]
    fn keyed_by_id() {
        let resolved: ResolvedData = serde_json::from_value(json!({
            "users": { "789": test::user_json() },
            "messages": { "30": test::message_json() },
        }))
        .unwrap();

        let users = resolved.users.unwrap();
        assert_eq!(users[&Id::new(789)].username, "alice");
        let messages = resolved.messages.unwrap();
        assert_eq!(messages[&Id::new(30)].id, Id::new(30));
    }

    #[test]
    fn rejects_invalid_key() {
        let result = serde_json::from_value::<ResolvedData>(json!({
            "users": { "0": test::user_json() },
        }));

        assert!(result.is_err());
    }
}
