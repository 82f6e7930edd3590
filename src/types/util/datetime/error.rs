use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// String couldn't be parsed into a [`Timestamp`].
///
/// [`Timestamp`]: super::Timestamp
#[derive(Debug)]
pub struct TimestampParseError {
    kind: TimestampParseErrorType,
    source: Option<chrono::ParseError>,
}

impl TimestampParseError {
    pub const fn kind(&self) -> &TimestampParseErrorType {
        &self.kind
    }

    /// Consume the error, returning the `chrono` error that caused it.
    pub fn into_source(self) -> Option<chrono::ParseError> {
        self.source
    }

    pub fn into_parts(self) -> (TimestampParseErrorType, Option<chrono::ParseError>) {
        (self.kind, self.source)
    }

    pub(super) const fn format(source: chrono::ParseError) -> Self {
        Self {
            kind: TimestampParseErrorType::Format,
            source: Some(source),
        }
    }
}

impl Display for TimestampParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            TimestampParseErrorType::Format => f.write_str("timestamp is not rfc 3339")?,
        }

        if let Some(source) = &self.source {
            f.write_str(": ")?;
            Display::fmt(source, f)?;
        }

        Ok(())
    }
}

impl Error for TimestampParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|source| source as &(dyn Error + 'static))
    }
}

/// Type of [`TimestampParseError`] that occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum TimestampParseErrorType {
    /// Input isn't an RFC 3339 datetime with an offset.
    Format,
}

#[cfg(test)]
mod tests {
    use super::TimestampParseErrorType;
    use crate::types::util::Timestamp;
    use std::error::Error;

    #[test]
    fn names_the_expected_format() {
        let err = Timestamp::parse("yesterday").unwrap_err();

        assert!(err.to_string().starts_with("timestamp is not rfc 3339: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn missing_offset() {
        let (kind, source) = Timestamp::parse("2021-01-01T01:01:01").unwrap_err().into_parts();

        assert_eq!(kind, TimestampParseErrorType::Format);
        assert!(source.is_some());
    }
}
