//! Errors raised while narrowing an untyped payload into a typed shape.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Payload couldn't be decoded into one of the known shapes.
///
/// Decoding never falls back to a default shape: an interaction type added
/// upstream after this crate was written is reported as
/// [`DecodeErrorType::UnknownDiscriminant`] rather than being mistaken for a
/// known action.
#[derive(Debug)]
pub struct DecodeError {
    /// Type of error that occurred.
    kind: DecodeErrorType,
    /// Source of the error, if there is any.
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl DecodeError {
    /// Error caused by the payload not being a JSON object.
    pub(crate) const NOT_AN_OBJECT: DecodeError = DecodeError {
        kind: DecodeErrorType::NotAnObject,
        source: None,
    };

    /// Error caused by an interaction carrying both guild and channel fields.
    pub(crate) const AMBIGUOUS_CONTEXT: DecodeError = DecodeError {
        kind: DecodeErrorType::AmbiguousContext,
        source: None,
    };

    /// Error caused by an interaction carrying neither guild nor channel
    /// fields.
    pub(crate) const MISSING_CONTEXT: DecodeError = DecodeError {
        kind: DecodeErrorType::MissingContext,
        source: None,
    };

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &DecodeErrorType {
        &self.kind
    }

    /// Consume the error, returning the source error if there is any.
    #[must_use = "consuming the error and retrieving the source has no effect if left unused"]
    pub fn into_source(self) -> Option<Box<dyn Error + Send + Sync>> {
        self.source
    }

    /// Consume the error, returning the owned error type and the source error.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (DecodeErrorType, Option<Box<dyn Error + Send + Sync>>) {
        (self.kind, self.source)
    }

    pub(crate) const fn missing_field(field: &'static str) -> Self {
        Self {
            kind: DecodeErrorType::MissingField { field },
            source: None,
        }
    }

    pub(crate) const fn unexpected_field(field: &'static str) -> Self {
        Self {
            kind: DecodeErrorType::UnexpectedField { field },
            source: None,
        }
    }

    pub(crate) const fn invalid_discriminant(field: &'static str) -> Self {
        Self {
            kind: DecodeErrorType::InvalidDiscriminant { field },
            source: None,
        }
    }

    pub(crate) fn unknown_discriminant(field: &'static str, value: u64) -> Self {
        tracing::debug!(field, value, "rejecting unknown discriminant");

        Self {
            kind: DecodeErrorType::UnknownDiscriminant { field, value },
            source: None,
        }
    }

    pub(crate) fn shape_mismatch(source: serde_json::Error) -> Self {
        Self {
            kind: DecodeErrorType::ShapeMismatch,
            source: Some(Box::new(source)),
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            DecodeErrorType::AmbiguousContext => {
                f.write_str("interaction carries both guild and direct message fields")
            }
            DecodeErrorType::InvalidDiscriminant { field } => {
                f.write_str("discriminant `")?;
                f.write_str(field)?;

                f.write_str("` is not an unsigned integer")
            }
            DecodeErrorType::MissingContext => {
                f.write_str("interaction carries neither guild nor direct message fields")
            }
            DecodeErrorType::MissingField { field } => {
                f.write_str("required field `")?;
                f.write_str(field)?;

                f.write_str("` is missing")
            }
            DecodeErrorType::NotAnObject => f.write_str("payload is not a json object"),
            DecodeErrorType::ShapeMismatch => {
                f.write_str("payload does not match the shape selected by its discriminant")?;

                if let Some(source) = &self.source {
                    f.write_str(": ")?;
                    Display::fmt(source, f)?;
                }

                Ok(())
            }
            DecodeErrorType::UnexpectedField { field } => {
                f.write_str("field `")?;
                f.write_str(field)?;

                f.write_str("` is not allowed for this discriminant")
            }
            DecodeErrorType::UnknownDiscriminant { field, value } => {
                f.write_str("unknown value ")?;
                Display::fmt(value, f)?;
                f.write_str(" for discriminant `")?;
                f.write_str(field)?;

                f.write_str("`")
            }
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn Error + 'static))
    }
}

/// Type of [`DecodeError`] that occurred.
#[derive(Debug)]
#[non_exhaustive]
pub enum DecodeErrorType {
    /// Interaction has both guild fields (`guild_id`, `member`,
    /// `guild_locale`, `app_permissions`) and a `user`.
    AmbiguousContext,
    /// Discriminant field holds something other than an unsigned integer.
    InvalidDiscriminant {
        /// Name of the discriminant field.
        field: &'static str,
    },
    /// Interaction has neither guild fields nor a `user`.
    MissingContext,
    /// Field required by the selected shape is absent or null.
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
    /// Payload isn't a JSON object.
    NotAnObject,
    /// Payload doesn't deserialize into the shape its discriminant selects.
    ///
    /// The source is the underlying [`serde_json::Error`].
    ShapeMismatch,
    /// Field is present but the selected shape forbids it, such as `data`
    /// on a ping.
    UnexpectedField {
        /// Name of the forbidden field.
        field: &'static str,
    },
    /// Discriminant value is outside the closed set for its family.
    UnknownDiscriminant {
        /// Name of the discriminant field.
        field: &'static str,
        /// Value that was received.
        value: u64,
    },
}
