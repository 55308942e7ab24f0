//! Dependent query gating.
//!
//! The data query that consumes the user's location may only run once a
//! location is confirmed. Every confirmation (including re-confirmation and
//! accepted live fixes) bumps a generation counter, which [`QueryGate`] uses
//! to fetch exactly once per confirmation.

use crate::core::Coordinate;
use crate::machine::AcquisitionMachine;
use crate::provider::GeolocationProvider;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use tracing::{debug, warn};

/// Whether the dependent query may fetch, and for which location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryActivation {
    /// True iff a confirmed location is present
    pub enabled: bool,
    /// Number of confirmations so far; a change means "fetch again"
    pub generation: u64,
    pub location: Option<Coordinate>,
}

impl QueryActivation {
    pub fn from_confirmed(location: Option<Coordinate>, generation: u64) -> Self {
        Self {
            enabled: location.is_some(),
            generation,
            location,
        }
    }
}

/// Data fetch that depends on a confirmed location.
pub trait DependentQuery: Send + Sync {
    type Output: Send;
    type Error: Display + Send;

    fn fetch(
        &self,
        at: Coordinate,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}

/// Runs a [`DependentQuery`] once per confirmation.
///
/// # Example
///
/// ```rust
/// use locgate::core::Coordinate;
/// use locgate::query::{QueryActivation, QueryGate};
/// # use locgate::query::DependentQuery;
/// # struct Noop;
/// # impl DependentQuery for Noop {
/// #     type Output = ();
/// #     type Error = String;
/// #     async fn fetch(&self, _: Coordinate) -> Result<(), String> { Ok(()) }
/// # }
///
/// let gate = QueryGate::new(Noop);
///
/// assert_eq!(gate.pending(&QueryActivation::default()), None);
///
/// let confirmed = QueryActivation::from_confirmed(Some(Coordinate::new(39.0, 35.0)), 1);
/// assert_eq!(gate.pending(&confirmed), Some(Coordinate::new(39.0, 35.0)));
/// ```
pub struct QueryGate<Q> {
    query: Q,
    seen_generation: u64,
}

impl<Q: DependentQuery> QueryGate<Q> {
    pub fn new(query: Q) -> Self {
        Self {
            query,
            seen_generation: 0,
        }
    }

    /// Location to fetch for, if the activation is enabled and newer than the
    /// last fetch.
    pub fn pending(&self, activation: &QueryActivation) -> Option<Coordinate> {
        if activation.enabled && activation.generation > self.seen_generation {
            activation.location
        } else {
            None
        }
    }

    /// Fetch if the machine has a confirmation this gate has not yet served.
    ///
    /// Returns `None` when the query is inactive or already up to date. A
    /// failed fetch is reported to the machine as a notice; the machine's
    /// state is not touched.
    pub async fn refresh<P: GeolocationProvider>(
        &mut self,
        machine: &AcquisitionMachine<P>,
    ) -> Option<Result<Q::Output, Q::Error>> {
        let activation = machine.query_activation();
        let at = self.pending(&activation)?;
        self.seen_generation = activation.generation;

        debug!(generation = activation.generation, %at, "dependent query activated");
        let result = self.query.fetch(at).await;
        if let Err(error) = &result {
            warn!(%error, "dependent query failed");
            machine.report_query_failure();
        }
        Some(result)
    }

    pub fn seen_generation(&self) -> u64 {
        self.seen_generation
    }

    pub fn query(&self) -> &Q {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::Notice;
    use crate::provider::PositionError;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct Here(Coordinate);

    impl GeolocationProvider for Here {
        async fn current_position(&self) -> Result<Coordinate, PositionError> {
            Ok(self.0)
        }
    }

    #[derive(Default)]
    struct Pharmacies {
        fetches: AtomicUsize,
        fail: AtomicBool,
    }

    impl DependentQuery for Pharmacies {
        type Output = Vec<String>;
        type Error = String;

        async fn fetch(&self, at: Coordinate) -> Result<Vec<String>, String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                Err("upstream unavailable".to_string())
            } else {
                Ok(vec![format!("pharmacy near {at}")])
            }
        }
    }

    #[test]
    fn activation_requires_location() {
        assert!(!QueryActivation::from_confirmed(None, 3).enabled);
        assert!(QueryActivation::from_confirmed(Some(Coordinate::new(39.0, 35.0)), 1).enabled);
    }

    #[tokio::test]
    async fn inactive_until_confirmed() {
        let machine = AcquisitionMachine::new(Here(Coordinate::new(48.8, 2.3)));
        let mut gate = QueryGate::new(Pharmacies::default());

        assert!(gate.refresh(&machine).await.is_none());
        machine.request_location().await;
        assert!(gate.refresh(&machine).await.is_none());
        assert_eq!(gate.query().fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetches_once_per_confirmation() {
        let machine = AcquisitionMachine::new(Here(Coordinate::new(39.0, 35.0)));
        let mut gate = QueryGate::new(Pharmacies::default());

        machine.request_location().await;
        let first = gate.refresh(&machine).await;
        assert!(matches!(first, Some(Ok(ref rows)) if rows.len() == 1));
        assert!(gate.refresh(&machine).await.is_none());

        machine.request_location().await;
        assert!(gate.refresh(&machine).await.is_some());
        assert_eq!(gate.query().fetches.load(Ordering::SeqCst), 2);
        assert_eq!(gate.seen_generation(), 2);
    }

    #[tokio::test]
    async fn failure_surfaces_notice_without_state_change() {
        let machine = AcquisitionMachine::new(Here(Coordinate::new(39.0, 35.0)));
        let gate_query = Pharmacies::default();
        gate_query.fail.store(true, Ordering::SeqCst);
        let mut gate = QueryGate::new(gate_query);

        machine.request_location().await;
        let state_before = machine.state();
        let result = gate.refresh(&machine).await;

        assert!(matches!(result, Some(Err(_))));
        assert_eq!(machine.state(), state_before);
        assert_eq!(machine.view().notice, Some(Notice::DataLoadFailed));
    }
}
