use std::fmt;
use std::io;

/// Unrecoverable errors returned to the caller
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("mission parsing failed: {0}")]
    MissionParsing(#[from] MissionParsingError),
}

/// A decode failure, wrapped once with the place where it happened
#[derive(Debug, thiserror::Error)]
#[error("{source} {location}")]
pub struct MissionParsingError {
    pub location: ErrorLocation,
    pub source: DecodeError,
}

impl MissionParsingError {
    pub(crate) fn in_line(index: usize, line: &str, source: DecodeError) -> Self {
        Self {
            location: ErrorLocation::Line {
                index,
                content: line.to_string(),
            },
            source,
        }
    }

    pub(crate) fn in_finalization(decoder: &'static str, source: DecodeError) -> Self {
        Self {
            location: ErrorLocation::Finalization { decoder },
            source,
        }
    }
}

/// Where a [`MissionParsingError`] was raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    /// While a decoder consumed a body line (0-based index over all input lines)
    Line { index: usize, content: String },

    /// While a decoder was finalized at the end of its section
    Finalization { decoder: &'static str },
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::Line { index, content } => {
                write!(f, "in line #{index} ({content:?})")
            }
            ErrorLocation::Finalization { decoder } => {
                write!(f, "during finalization of {decoder:?}")
            }
        }
    }
}

/// Local failure of a section decoder
///
/// These never reach the caller directly, the dispatcher wraps them into
/// a [`MissionParsingError`] first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("not enough fields: expected at least {expected}, found {found}")]
    NotEnoughFields { expected: usize, found: usize },

    #[error("unexpected number of fields: expected {expected}, found {found}")]
    UnexpectedFieldCount { expected: String, found: usize },

    #[error("invalid {kind}: {value:?}")]
    InvalidNumber { kind: &'static str, value: String },

    #[error("missing key {0:?}")]
    MissingKey(String),

    #[error("missing value for key {0:?}")]
    MissingValue(String),

    #[error("invalid date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time: {0:?}")]
    InvalidTime(String),

    #[error("malformed object path: {0:?}")]
    MalformedPath(String),

    #[error("continuation line without a preceding record")]
    OrphanContinuation,

    #[error("TRIGGERS line without a preceding route point")]
    OrphanTriggers,
}

/// Non-fatal issues encountered during lenient parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// No decoder claimed the section, its lines were skipped
    UnknownSection { name: String },

    /// Flight listed in `Wing` without its own info section
    MissingFlightInfo { flight_id: String },

    /// Satellite section whose owner was never found during assembly
    UnclaimedFragment { key: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn line_error_message() {
        let error = MissionParsingError::in_line(
            1,
            "foo",
            DecodeError::MissingValue("foo".to_string()),
        );
        assert_snapshot!(error.to_string(), @r#"missing value for key "foo" in line #1 ("foo")"#);
    }

    #[test]
    fn finalization_error_message() {
        let error = MissionParsingError::in_finalization(
            "MAIN",
            DecodeError::MissingKey("CloudType".to_string()),
        );
        assert_snapshot!(error.to_string(), @r#"missing key "CloudType" during finalization of "MAIN""#);
    }

    #[test]
    fn wrapped_error_keeps_source() {
        use std::error::Error as _;

        let error = Error::from(MissionParsingError::in_line(
            3,
            "x",
            DecodeError::InvalidNumber {
                kind: "integer",
                value: "x".to_string(),
            },
        ));
        let source = error.source().expect("Missing source");
        assert_eq!(
            source.to_string(),
            r#"invalid integer: "x" in line #3 ("x")"#
        );
        let cause = source.source().expect("Missing cause");
        assert_eq!(cause.to_string(), r#"invalid integer: "x""#);
    }
}
