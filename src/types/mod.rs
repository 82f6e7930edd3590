//! Discord API types, laid out the way [`twilight-model`] lays them out.
//!
//! Only the records that interaction payloads reference are modelled:
//!
//! | Module | Contents |
//! |---|---|
//! | [`application`] | Interactions, command options, locales |
//! | [`channel`] | Channels, messages, embeds, components, attachments |
//! | [`guild`] | Members, roles, permissions |
//! | [`http`] | Interaction responses |
//! | [`id`] | Typed snowflakes |
//! | [`user`] | Users |
//! | [`util`] | Timestamps, literal discriminants |
//!
//! [`twilight-model`]: https://github.com/twilight-rs/twilight/tree/main/twilight-model

pub mod application;
pub mod channel;
pub mod error;
pub mod guild;
pub mod http;
pub mod id;
pub mod user;
pub mod util;


pub use self::{
    application::{
        command::{CommandDataOption, CommandOptionChoice, CommandOptionType},
        interaction::{
            ApplicationCommandData, ComponentInteractionData, Interaction, InteractionScope,
            InteractionType, ModalSubmitData, ResolvedData,
        },
        locale::Locale,
    },
    channel::{
        message::{ActionRow, Component, ComponentType, Embed, Message, MessageFlags},
        Attachment, PartialChannel,
    },
    error::{DecodeError, DecodeErrorType},
    guild::{GuildMember, Permissions, Role},
    http::interaction::{InteractionResponse, InteractionResponseType},
    id::Id,
    user::User,
    util::{MustBeU8, Timestamp},
};
