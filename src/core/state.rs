//! Acquisition state types.
//!
//! These are plain values with no behaviour beyond inspection. The machine in
//! [`crate::machine`] is the only place that moves between them.

use crate::failure::FailureCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in decimal degrees.
///
/// Produced by a [`GeolocationProvider`](crate::provider::GeolocationProvider)
/// and never modified afterwards.
///
/// # Example
///
/// ```rust
/// use locgate::core::Coordinate;
///
/// let ankara = Coordinate::new(39.93, 32.85);
/// assert_eq!(ankara.latitude, 39.93);
/// assert_eq!(ankara.longitude, 32.85);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Degrees north of the equator
    pub latitude: f64,
    /// Degrees east of Greenwich
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}

/// Why an acquisition attempt ended in [`AcquisitionState::Rejected`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// The provider failed; the failure has been classified.
    Provider(FailureCategory),
    /// The provider succeeded but the location lies outside the geofence.
    OutOfBounds,
}

impl RejectionReason {
    /// Whether the rejection originated in the positioning provider rather
    /// than in geofence validation.
    pub fn is_provider_origin(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}

impl From<FailureCategory> for RejectionReason {
    fn from(category: FailureCategory) -> Self {
        Self::Provider(category)
    }
}

/// The acquisition machine's single source of truth.
///
/// Exactly one variant holds at any instant. Dialog and loading flags exposed
/// to the presentation layer are derived from it (see
/// [`AcquisitionView`](crate::machine::AcquisitionView)).
///
/// # Example
///
/// ```rust
/// use locgate::core::{AcquisitionState, Coordinate, RejectionReason};
///
/// let state = AcquisitionState::Confirmed {
///     location: Coordinate::new(39.0, 35.0),
/// };
/// assert_eq!(state.name(), "Confirmed");
/// assert!(state.is_final());
/// assert!(!state.is_error());
///
/// let rejected = AcquisitionState::Rejected {
///     reason: RejectionReason::OutOfBounds,
/// };
/// assert!(rejected.is_error());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum AcquisitionState {
    /// No request issued yet; consent dialog visible.
    #[default]
    AwaitingConsent,
    /// A provider request is in flight.
    Requesting,
    /// The provider returned a location inside the geofence.
    Confirmed { location: Coordinate },
    /// The request failed or landed outside the geofence; retry is offered.
    Rejected { reason: RejectionReason },
}

impl AcquisitionState {
    /// Stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitingConsent => "AwaitingConsent",
            Self::Requesting => "Requesting",
            Self::Confirmed { .. } => "Confirmed",
            Self::Rejected { .. } => "Rejected",
        }
    }

    /// `Confirmed` is the only terminal-success state. A re-request may still
    /// leave it.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// States in which the consent dialog is offered to the user.
    pub fn offers_consent(&self) -> bool {
        matches!(self, Self::AwaitingConsent | Self::Rejected { .. })
    }

    /// States from which `request_location` may start a new request.
    pub fn accepts_request(&self) -> bool {
        !matches!(self, Self::Requesting)
    }

    pub fn location(&self) -> Option<Coordinate> {
        match self {
            Self::Confirmed { location } => Some(*location),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Rejected { reason } => Some(*reason),
            _ => None,
        }
    }
}
