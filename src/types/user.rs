use crate::types::id::{marker::UserMarker, Id};
use serde::{Deserialize, Serialize};

/// Discord user, as embedded in interactions, messages, and resolved data.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    /// Hash of the user's avatar, null when the default avatar is used.
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    /// Legacy discriminator, `"0"` for users on the new username system.
    pub discriminator: String,
    /// Display name, null when the user hasn't set one.
    #[serde(deserialize_with = "crate::types::util::nullable::required")]
    pub global_name: Option<String>,
    pub id: Id<UserMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    pub username: String,
}

impl User {
    /// `Username#Discriminator` or just `Username` for the new username system.
    pub fn tag(&self) -> String {
        match self.discriminator.as_str() {
            "0" => self.username.clone(),
            discriminator => format!("{}#{}", self.username, discriminator),
        }
    }
}
