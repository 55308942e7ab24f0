//! User-facing notices and their localized text.

use super::FailureCategory;
use crate::core::RejectionReason;
use serde::{Deserialize, Serialize};

/// Language used for notices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "en")]
    English,
}

/// A transient message for the presentation layer to surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    /// The last acquisition attempt was rejected.
    Rejected(RejectionReason),
    /// The dependent data query failed.
    DataLoadFailed,
}

impl Notice {
    /// ```rust
    /// use locgate::core::RejectionReason;
    /// use locgate::failure::{Locale, Notice};
    ///
    /// let notice = Notice::Rejected(RejectionReason::OutOfBounds);
    /// assert_eq!(
    ///     notice.message(Locale::English),
    ///     "Your location is outside the region this application serves"
    /// );
    /// ```
    pub fn message(&self, locale: Locale) -> &'static str {
        match self {
            Self::Rejected(RejectionReason::Provider(category)) => category.message(locale),
            Self::Rejected(RejectionReason::OutOfBounds) => match locale {
                Locale::Turkish => "Bu uygulama sadece Türkiye içinde kullanılabilir",
                Locale::English => "Your location is outside the region this application serves",
            },
            Self::DataLoadFailed => match locale {
                Locale::Turkish => "Eczane bilgileri yüklenirken hata oluştu",
                Locale::English => "Failed to load data for your location",
            },
        }
    }
}

impl From<FailureCategory> for Notice {
    fn from(category: FailureCategory) -> Self {
        Self::Rejected(RejectionReason::Provider(category))
    }
}
