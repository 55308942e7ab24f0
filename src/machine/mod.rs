//! Effectful acquisition shell.
//!
//! This module wraps the pure [`core`](crate::core) with the parts that touch
//! the outside world: the asynchronous provider call, the in-flight guard,
//! and change notification for observers.
//!
//! # Key Concepts
//!
//! - **Single entry point**: `request_location` is the only operation that
//!   talks to the provider, and at most one call is ever in flight
//! - **Scoped guard**: the in-flight slot and loading flag are released on
//!   every exit path, including a dropped future
//! - **Snapshots**: observers read [`AcquisitionView`] values, never the
//!   mutable session directly

mod acquisition;
mod in_flight;
mod view;

pub use acquisition::{AcquisitionMachine, HISTORY_LIMIT};
pub use view::{AcquisitionView, RequestOutcome};
