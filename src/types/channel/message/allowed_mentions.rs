use crate::types::id::{
    marker::{RoleMarker, UserMarker},
    Id,
};
use serde::{Deserialize, Serialize};

/// Which mentions in a message callback are allowed to ping.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AllowedMentions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse: Option<Vec<MentionType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied_user: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Id<RoleMarker>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<Id<UserMarker>>>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionType {
    Everyone,
    Roles,
    Users,
}
