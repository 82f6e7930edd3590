use crate::types::{
    application::locale::Locale,
    error::DecodeError,
    guild::{GuildMember, Permissions},
    id::{
        marker::{ApplicationMarker, ChannelMarker, GuildMarker, InteractionMarker},
        Id,
    },
    user::User,
    util::{has_field, JsonObject},
};
use serde::{Deserialize, Serialize};

/// Fields only sent with interactions that happened in a guild.
const GUILD_FIELDS: [&str; 4] = ["app_permissions", "guild_id", "guild_locale", "member"];

/// Fields shared by every interaction that happened in a guild.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GuildContext {
    /// Permissions the application has in the channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_permissions: Option<Permissions>,
    pub application_id: Id<ApplicationMarker>,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Id<GuildMarker>,
    pub guild_locale: Locale,
    pub id: Id<InteractionMarker>,
    /// Locale of the invoking user.
    pub locale: Locale,
    /// Invoking member, with its `user` populated.
    pub member: GuildMember,
    pub token: String,
    pub version: u8,
}

/// Fields shared by every interaction that happened in a direct message.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChannelContext {
    pub application_id: Id<ApplicationMarker>,
    pub channel_id: Id<ChannelMarker>,
    pub id: Id<InteractionMarker>,
    pub locale: Locale,
    pub token: String,
    /// Invoking user.
    pub user: User,
    pub version: u8,
}

/// Borrowed context of an interaction, whichever scope it came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InteractionContext<'a> {
    Guild(&'a GuildContext),
    Channel(&'a ChannelContext),
}

impl<'a> InteractionContext<'a> {
    /// User who triggered the interaction.
    pub fn author(self) -> Option<&'a User> {
        match self {
            Self::Guild(context) => context.member.user.as_ref(),
            Self::Channel(context) => Some(&context.user),
        }
    }

    pub const fn application_id(self) -> Id<ApplicationMarker> {
        match self {
            Self::Guild(context) => context.application_id,
            Self::Channel(context) => context.application_id,
        }
    }

    pub const fn channel_id(self) -> Id<ChannelMarker> {
        match self {
            Self::Guild(context) => context.channel_id,
            Self::Channel(context) => context.channel_id,
        }
    }

    pub const fn guild_id(self) -> Option<Id<GuildMarker>> {
        match self {
            Self::Guild(context) => Some(context.guild_id),
            Self::Channel(_) => None,
        }
    }

    pub const fn id(self) -> Id<InteractionMarker> {
        match self {
            Self::Guild(context) => context.id,
            Self::Channel(context) => context.id,
        }
    }

    pub const fn locale(self) -> Locale {
        match self {
            Self::Guild(context) => context.locale,
            Self::Channel(context) => context.locale,
        }
    }

    pub fn token(self) -> &'a str {
        match self {
            Self::Guild(context) => &context.token,
            Self::Channel(context) => &context.token,
        }
    }
}

/// Which of the two context shapes a payload has.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ContextKind {
    Guild,
    Channel,
}

impl ContextKind {
    /// Classify a payload by its mutually exclusive guild and direct message
    /// fields.
    pub(crate) fn classify(object: &JsonObject) -> Result<Self, DecodeError> {
        let guild = GUILD_FIELDS.iter().any(|field| has_field(object, field));
        let channel = has_field(object, "user");

        match (guild, channel) {
            (true, false) => Ok(Self::Guild),
            (false, true) => Ok(Self::Channel),
            (true, true) => {
                tracing::debug!("interaction carries both guild fields and a user");

                Err(DecodeError::AMBIGUOUS_CONTEXT)
            }
            (false, false) => {
                tracing::debug!("interaction carries neither guild fields nor a user");

                Err(DecodeError::MISSING_CONTEXT)
            }
        }
    }
}
