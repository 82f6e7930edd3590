//! Typed Discord interaction payloads.
//!
//! Inbound [`Interaction`]s and outbound [`InteractionResponse`]s are closed
//! families keyed by integer discriminants. Decoding selects exactly one
//! shape per discriminant and rejects values outside the known set instead
//! of guessing, so matching on the decoded enums is exhaustive.
//!
//! ```
//! use interaction_typings::{Interaction, InteractionType};
//!
//! let interaction = Interaction::from_value(serde_json::json!({ "type": 1 }))?;
//! assert_eq!(interaction.kind(), InteractionType::Ping);
//! # Ok::<(), interaction_typings::DecodeError>(())
//! ```
//!
//! [`Interaction`]: types::application::interaction::Interaction
//! [`InteractionResponse`]: types::http::interaction::InteractionResponse

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod types;

pub use self::types::{
    application::interaction::{Interaction, InteractionType},
    error::{DecodeError, DecodeErrorType},
    http::interaction::{InteractionResponse, InteractionResponseType},
};
