//! Core acquisition types and pure logic.
//!
//! This module contains the pure part of location acquisition:
//! - Coordinates and the acquisition state
//! - Geofence predicates
//! - Immutable transition history
//!
//! Nothing here performs I/O or holds shared state.

mod geofence;
mod history;
mod state;

pub use geofence::{is_in_turkey, Geofence, GeofenceRegion};
pub use history::{StateHistory, StateTransition};
pub use state::{AcquisitionState, Coordinate, RejectionReason};
