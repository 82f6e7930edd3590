//! Markers that tie an [`Id`] to the kind of resource it identifies.
//!
//! They are never constructed. A role ID can't be passed where a user ID is
//! expected, so the keys of [`ResolvedData::roles`] and
//! [`ResolvedData::users`] can't be confused.
//!
//! [`Id`]: super::Id
//! [`ResolvedData::roles`]: crate::types::application::interaction::ResolvedData::roles
//! [`ResolvedData::users`]: crate::types::application::interaction::ResolvedData::users

/// Application an interaction was sent to.
#[derive(Debug)]
#[non_exhaustive]
pub struct ApplicationMarker;

/// [`Attachment`](crate::types::channel::Attachment) IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct AttachmentMarker;

#[derive(Debug)]
#[non_exhaustive]
pub struct ChannelMarker;

/// Registered application commands.
#[derive(Debug)]
#[non_exhaustive]
pub struct CommandMarker;

/// Custom emojis shown on buttons and select options.
#[derive(Debug)]
#[non_exhaustive]
pub struct EmojiMarker;

/// IDs whose resource kind depends on context, such as a context menu
/// target that is either a user or a message. Use [`Id::cast`] once the kind
/// is known.
///
/// [`Id::cast`]: super::Id::cast
#[derive(Debug)]
#[non_exhaustive]
pub struct GenericMarker;

#[derive(Debug)]
#[non_exhaustive]
pub struct GuildMarker;

#[derive(Debug)]
#[non_exhaustive]
pub struct InteractionMarker;

#[derive(Debug)]
#[non_exhaustive]
pub struct MessageMarker;

#[derive(Debug)]
#[non_exhaustive]
pub struct RoleMarker;

/// Users, and guild members in resolved data.
#[derive(Debug)]
#[non_exhaustive]
pub struct UserMarker;
