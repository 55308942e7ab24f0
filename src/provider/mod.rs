//! Geolocation provider contract.
//!
//! The provider is the imperative edge of the crate: a one-shot asynchronous
//! request that resolves to a [`Coordinate`] or a [`PositionError`]. Any
//! timeout is the provider's own; the machine does not add another.

mod error;

pub use error::{PositionError, PositionErrorCode};

use crate::core::Coordinate;
use std::future::Future;
use std::sync::Arc;

/// Source of the device's current position.
///
/// # Example
///
/// ```rust
/// use locgate::core::Coordinate;
/// use locgate::provider::{GeolocationProvider, PositionError};
///
/// struct Fixed(Coordinate);
///
/// impl GeolocationProvider for Fixed {
///     async fn current_position(&self) -> Result<Coordinate, PositionError> {
///         Ok(self.0)
///     }
/// }
/// ```
pub trait GeolocationProvider: Send + Sync {
    /// Request the current position once.
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinate, PositionError>> + Send;
}

impl<P: GeolocationProvider> GeolocationProvider for Arc<P> {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinate, PositionError>> + Send {
        (**self).current_position()
    }
}
