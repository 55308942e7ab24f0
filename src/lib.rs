//! Locgate: geofenced, retryable location acquisition
//!
//! Locgate locates a user through a pluggable geolocation provider, checks the
//! result against a geographic boundary, and exposes a confirmed-location
//! signal that gates a dependent data query. It follows a "pure core,
//! imperative shell" split: state, geofence and failure classification are
//! pure values and functions, and the one asynchronous provider call lives in
//! the machine.
//!
//! # Core Concepts
//!
//! - **State**: [`AcquisitionState`] is the single source of truth
//! - **Geofence**: pure predicate a location must pass to be confirmed
//! - **Classification**: provider failures map onto four user-facing
//!   categories, totally
//! - **Machine**: [`AcquisitionMachine`] runs at most one request at a time and
//!   publishes an [`AcquisitionView`] after every change
//!
//! # Example
//!
//! ```rust
//! use locgate::core::{AcquisitionState, Coordinate, RejectionReason};
//! use locgate::machine::AcquisitionMachine;
//! use locgate::provider::{GeolocationProvider, PositionError};
//!
//! struct Paris;
//!
//! impl GeolocationProvider for Paris {
//!     async fn current_position(&self) -> Result<Coordinate, PositionError> {
//!         Ok(Coordinate::new(48.8, 2.3))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let machine = AcquisitionMachine::new(Paris);
//! machine.request_location().await;
//!
//! assert_eq!(
//!     machine.state(),
//!     AcquisitionState::Rejected { reason: RejectionReason::OutOfBounds }
//! );
//! assert!(machine.dialog_visible());
//! assert!(machine.is_retry());
//! assert!(!machine.query_activation().enabled);
//! # }
//! ```

pub mod config;
pub mod core;
pub mod failure;
pub mod machine;
pub mod provider;
pub mod query;

// Re-export commonly used types
pub use config::{AcquisitionConfig, ConfigBuilder};
pub use self::core::{AcquisitionState, Coordinate, Geofence, GeofenceRegion, RejectionReason};
pub use failure::{FailureCategory, Locale, Notice};
pub use machine::{AcquisitionMachine, AcquisitionView, RequestOutcome};
pub use provider::{GeolocationProvider, PositionError, PositionErrorCode};
pub use query::{DependentQuery, QueryActivation, QueryGate};
