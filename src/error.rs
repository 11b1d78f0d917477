use std::error::Error;

use rusoto_core::RusotoError;
use rusoto_dynamodb::{ScanError, UpdateItemError};
use rusoto_lambda::InvokeError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum HitCounterError {
    NoneValue,
    MissingPath,
    MissingConfig(&'static str),
    LockPoisoned,
    InvalidCount(String),
    Serialization(String),
    UpdateItemError(RusotoError<UpdateItemError>),
    ScanError(RusotoError<ScanError>),
    InvokeError(RusotoError<InvokeError>),
    /// The downstream's own error payload, reported to the caller as-is.
    DownstreamFunction { kind: String, payload: String },
}

impl Display for HitCounterError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            HitCounterError::NoneValue => write!(f, "Value is None"),
            HitCounterError::MissingPath => write!(f, "Request has no path"),
            HitCounterError::MissingConfig(name) => write!(f, "{} must be configured", name),
            HitCounterError::LockPoisoned => write!(f, "Hit store lock is poisoned"),
            HitCounterError::InvalidCount(ref count) => {
                write!(f, "Failed to parse hit count {:?}", count)
            }
            HitCounterError::Serialization(ref message) => {
                write!(f, "Failed to (de)serialize payload: {}", message)
            }
            HitCounterError::UpdateItemError(ref error) => std::fmt::Display::fmt(error, f),
            HitCounterError::ScanError(ref error) => std::fmt::Display::fmt(error, f),
            HitCounterError::InvokeError(ref error) => std::fmt::Display::fmt(error, f),
            HitCounterError::DownstreamFunction { ref payload, .. } => f.write_str(payload),
        }
    }
}

impl Error for HitCounterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            HitCounterError::UpdateItemError(ref error) => Some(error),
            HitCounterError::ScanError(ref error) => Some(error),
            HitCounterError::InvokeError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for HitCounterError {
    fn from(e: serde_json::Error) -> HitCounterError {
        HitCounterError::Serialization(e.to_string())
    }
}

impl From<RusotoError<UpdateItemError>> for HitCounterError {
    fn from(e: RusotoError<UpdateItemError>) -> HitCounterError {
        HitCounterError::UpdateItemError(e)
    }
}

impl From<RusotoError<ScanError>> for HitCounterError {
    fn from(e: RusotoError<ScanError>) -> HitCounterError {
        HitCounterError::ScanError(e)
    }
}

impl From<RusotoError<InvokeError>> for HitCounterError {
    fn from(e: RusotoError<InvokeError>) -> HitCounterError {
        HitCounterError::InvokeError(e)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::HitCounterError;
    use std::error::Error;

    #[test]
    fn test_display_missing_config() {
        let error = HitCounterError::MissingConfig("HITS_TABLE_NAME");
        assert_eq!(error.to_string(), "HITS_TABLE_NAME must be configured");
    }

    #[test]
    fn test_display_downstream_function() {
        let error = HitCounterError::DownstreamFunction {
            kind: "Unhandled".to_string(),
            payload: r#"{"errorMessage":"boom"}"#.to_string(),
        };
        assert_eq!(error.to_string(), r#"{"errorMessage":"boom"}"#);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_from_serde_json_error() {
        let error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        match HitCounterError::from(error) {
            HitCounterError::Serialization(message) => assert!(!message.is_empty()),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
