//! Provider failure types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure codes a geolocation provider may report.
///
/// The set is closed; anything the provider does not define maps to `Other`
/// and carries the raw code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionErrorCode {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Other(u16),
}

impl PositionErrorCode {
    /// Map a numeric geolocation error code (1 = permission denied,
    /// 2 = position unavailable, 3 = timeout) to a code.
    pub fn from_raw(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for PositionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => f.write_str("permission denied"),
            Self::PositionUnavailable => f.write_str("position unavailable"),
            Self::Timeout => f.write_str("timeout"),
            Self::Other(code) => write!(f, "code {code}"),
        }
    }
}

/// Failure returned by [`GeolocationProvider::current_position`](super::GeolocationProvider::current_position).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("geolocation failed ({code}): {message}")]
pub struct PositionError {
    pub code: PositionErrorCode,
    /// Provider-supplied diagnostic text; never shown to users
    pub message: String,
}

impl PositionError {
    pub fn new(code: PositionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn permission_denied() -> Self {
        Self::new(PositionErrorCode::PermissionDenied, "User denied Geolocation")
    }

    pub fn position_unavailable() -> Self {
        Self::new(
            PositionErrorCode::PositionUnavailable,
            "Position update is unavailable",
        )
    }

    pub fn timeout() -> Self {
        Self::new(PositionErrorCode::Timeout, "Timeout expired")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes_map_to_defined_set() {
        assert_eq!(PositionErrorCode::from_raw(1), PositionErrorCode::PermissionDenied);
        assert_eq!(PositionErrorCode::from_raw(2), PositionErrorCode::PositionUnavailable);
        assert_eq!(PositionErrorCode::from_raw(3), PositionErrorCode::Timeout);
        assert_eq!(PositionErrorCode::from_raw(0), PositionErrorCode::Other(0));
        assert_eq!(PositionErrorCode::from_raw(99), PositionErrorCode::Other(99));
    }

    #[test]
    fn error_message_names_code() {
        let err = PositionError::timeout();
        assert_eq!(err.to_string(), "geolocation failed (timeout): Timeout expired");

        let err = PositionError::new(PositionErrorCode::Other(7), "boom");
        assert_eq!(err.to_string(), "geolocation failed (code 7): boom");
    }
}
