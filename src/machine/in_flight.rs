//! Scoped "request in progress" guard.
//!
//! At most one guard exists per machine. Dropping it always clears the
//! loading flag and releases the slot, whether the request settled, failed,
//! or its future was dropped mid-flight.

use super::acquisition::{AcquisitionMachine, Snapshot};
use super::view::RequestOutcome;
use crate::core::Coordinate;
use crate::provider::{GeolocationProvider, PositionError};
use std::sync::atomic::Ordering;

pub(super) struct InFlight<'m, P: GeolocationProvider> {
    machine: &'m AcquisitionMachine<P>,
    ticket: u64,
    /// Session to restore if the request is abandoned; `None` once settled
    previous: Option<Snapshot>,
}

impl<'m, P: GeolocationProvider> InFlight<'m, P> {
    /// Claim the in-flight slot and move the machine to `Requesting`.
    ///
    /// Returns `None` without touching the machine if a request already
    /// holds the slot.
    pub(super) fn acquire(machine: &'m AcquisitionMachine<P>) -> Option<Self> {
        machine
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;

        let (ticket, previous) = machine.begin();
        Some(Self {
            machine,
            ticket,
            previous: Some(previous),
        })
    }

    pub(super) fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Apply the provider's result. The slot is released when `self` drops at
    /// the end of this call.
    pub(super) fn settle(mut self, result: Result<Coordinate, PositionError>) -> RequestOutcome {
        self.previous = None;
        self.machine.settle(self.ticket, result)
    }
}

impl<P: GeolocationProvider> Drop for InFlight<'_, P> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.machine.abandon(self.ticket, previous);
        }
        self.machine.in_flight.store(false, Ordering::Release);
    }
}
