//! Result classifications shared by the scanner and the exact matcher

use serde::Serialize;
use thiserror::Error;

/// Outcome of a parse.
///
/// Every non-`Ok` status leaves the caller's destination untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    /// No decimal integer at the start of the input, or (for exact
    /// matching) one that does not span the whole input.
    Invalid,
    /// A digit run whose value does not fit the destination type.
    OutOfRange,
}

impl Status {
    #[inline]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    pub fn into_result(self) -> Result<(), ParseError> {
        match self {
            Status::Ok => Ok(()),
            Status::Invalid => Err(ParseError::Invalid),
            Status::OutOfRange => Err(ParseError::OutOfRange),
        }
    }
}

/// Scanner outcome: where the match stopped and how it was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanResult {
    /// Index of the first unit not consumed. Zero whenever no digit was
    /// consumed; just past the digit run otherwise, even on overflow.
    pub stop: usize,
    pub status: Status,
}

impl ScanResult {
    #[inline]
    pub(crate) fn invalid() -> Self {
        ScanResult {
            stop: 0,
            status: Status::Invalid,
        }
    }
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("invalid decimal integer")]
    Invalid,
    #[error("decimal integer out of range for the destination type")]
    OutOfRange,
}

impl From<ParseError> for Status {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Invalid => Status::Invalid,
            ParseError::OutOfRange => Status::OutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok() {
        assert!(Status::Ok.is_ok());
        assert!(!Status::Invalid.is_ok());
        assert!(!Status::OutOfRange.is_ok());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Status::Ok.into_result(), Ok(()));
        assert_eq!(Status::Invalid.into_result(), Err(ParseError::Invalid));
        assert_eq!(Status::OutOfRange.into_result(), Err(ParseError::OutOfRange));
    }

    #[test]
    fn test_error_status_round_trip() {
        for status in [Status::Invalid, Status::OutOfRange] {
            let error = status.into_result().unwrap_err();
            assert_eq!(Status::from(error), status);
        }
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Status::Ok).unwrap(), "\"ok\"");
        assert_eq!(serde_json::to_string(&Status::Invalid).unwrap(), "\"invalid\"");
        assert_eq!(
            serde_json::to_string(&Status::OutOfRange).unwrap(),
            "\"out_of_range\""
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::Invalid.to_string(), "invalid decimal integer");
        assert!(ParseError::OutOfRange.to_string().contains("out of range"));
    }
}
