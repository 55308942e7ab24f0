//! Failure classification.
//!
//! Provider failures are mapped onto a small fixed set of user-facing
//! categories. The mapping is total: any code the provider does not define
//! becomes [`FailureCategory::Unknown`].

mod notice;

pub use notice::{Locale, Notice};

use crate::provider::{PositionError, PositionErrorCode};
use serde::{Deserialize, Serialize};

/// User-facing category of a provider failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureCategory {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl FailureCategory {
    pub const ALL: [FailureCategory; 4] = [
        Self::PermissionDenied,
        Self::PositionUnavailable,
        Self::Timeout,
        Self::Unknown,
    ];

    /// Classify a provider failure code.
    ///
    /// ```rust
    /// use locgate::failure::FailureCategory;
    /// use locgate::provider::PositionErrorCode;
    ///
    /// assert_eq!(
    ///     FailureCategory::classify(PositionErrorCode::Timeout),
    ///     FailureCategory::Timeout
    /// );
    /// assert_eq!(
    ///     FailureCategory::classify(PositionErrorCode::Other(42)),
    ///     FailureCategory::Unknown
    /// );
    /// ```
    pub fn classify(code: PositionErrorCode) -> Self {
        match code {
            PositionErrorCode::PermissionDenied => Self::PermissionDenied,
            PositionErrorCode::PositionUnavailable => Self::PositionUnavailable,
            PositionErrorCode::Timeout => Self::Timeout,
            PositionErrorCode::Other(_) => Self::Unknown,
        }
    }

    /// Fixed message shown to the user for this category.
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::PermissionDenied, Locale::Turkish) => {
                "Konum izni reddedildi. Lütfen tarayıcı ayarlarından konum iznini etkinleştirin"
            }
            (Self::PermissionDenied, Locale::English) => {
                "Location permission was denied. Please re-enable it in your browser settings"
            }
            (Self::PositionUnavailable, Locale::Turkish) => {
                "Konum servislerine erişilemiyor. Lütfen konum servislerinizin açık olduğundan emin olun"
            }
            (Self::PositionUnavailable, Locale::English) => {
                "Location services are unreachable. Please verify they are enabled"
            }
            (Self::Timeout, Locale::Turkish) => {
                "Konum alınamadı. Lütfen internet bağlantınızı kontrol edip tekrar deneyin"
            }
            (Self::Timeout, Locale::English) => {
                "The location request timed out. Please check your connection and try again"
            }
            (Self::Unknown, Locale::Turkish) => {
                "Konum alınamadı. Lütfen konum servislerinizin açık olduğundan emin olun ve tekrar deneyin"
            }
            (Self::Unknown, Locale::English) => {
                "Could not get your location. Please make sure location services are enabled and try again"
            }
        }
    }
}

impl From<&PositionError> for FailureCategory {
    fn from(error: &PositionError) -> Self {
        Self::classify(error.code)
    }
}
