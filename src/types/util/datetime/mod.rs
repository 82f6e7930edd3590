//! ISO 8601 timestamps as sent by Discord.
//!
//! Member join dates and message timestamps arrive as ISO 8601 strings,
//! with or without microseconds (`2021-01-01T01:01:01.010000+00:00`,
//! `2021-01-01T01:01:01+00:00`). [`Timestamp`] parses them with `chrono`
//! and writes them back with microsecond precision.

mod error;

pub use self::error::{TimestampParseError, TimestampParseErrorType};

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Representation of a Discord timestamp.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Parse a timestamp from an ISO 8601 datetime string emitted by Discord.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseErrorType::Format`] if the string isn't an
    /// RFC 3339 datetime.
    pub fn parse(datetime: &str) -> Result<Self, TimestampParseError> {
        DateTime::parse_from_rfc3339(datetime)
            .map(Self)
            .map_err(TimestampParseError::format)
    }

    /// Total number of seconds since the Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0.timestamp()
    }

    /// Total number of microseconds since the Unix epoch.
    pub fn as_micros(self) -> i64 {
        self.0.timestamp_micros()
    }

    /// Underlying `chrono` datetime.
    pub const fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Format the timestamp the way Discord does, with microseconds.
    pub fn iso_8601(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.iso_8601())
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self(datetime)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&'_ str> for Timestamp {
    type Error = TimestampParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("an ISO 8601 datetime string")
            }

            fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
                Timestamp::parse(v).map_err(DeError::custom)
            }
        }

        deserializer.deserialize_any(TimestampVisitor)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso_8601())
    }
}
