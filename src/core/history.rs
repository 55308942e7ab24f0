//! Acquisition transition history.
//!
//! Every transition the machine applies is recorded here, in order, so the
//! presentation layer and tests can inspect how a session reached its
//! current state.

use super::state::AcquisitionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use locgate::core::{AcquisitionState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: AcquisitionState::AwaitingConsent,
///     to: AcquisitionState::Requesting,
///     timestamp: Utc::now(),
///     attempt: 1,
///     restored: false,
/// };
/// assert_eq!(transition.to.name(), "Requesting");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: AcquisitionState,
    /// The state being transitioned to
    pub to: AcquisitionState,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Requests issued since the last confirmation, including this one
    pub attempt: usize,
    /// Rollback of an abandoned request rather than a new outcome
    #[serde(default)]
    pub restored: bool,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition appended; the owner of
/// a long-lived history appends in place with [`push`](Self::push). A history
/// created with [`bounded`](Self::bounded) keeps only the most recent
/// transitions.
///
/// # Example
///
/// ```rust
/// use locgate::core::{AcquisitionState, Coordinate, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: AcquisitionState::AwaitingConsent,
///     to: AcquisitionState::Requesting,
///     timestamp: Utc::now(),
///     attempt: 1,
///     restored: false,
/// });
///
/// let history = history.record(StateTransition {
///     from: AcquisitionState::Requesting,
///     to: AcquisitionState::Confirmed {
///         location: Coordinate::new(39.0, 35.0),
///     },
///     timestamp: Utc::now(),
///     attempt: 1,
///     restored: false,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[0], &AcquisitionState::AwaitingConsent);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// History that retains at most `limit` transitions, dropping the oldest.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: Vec::with_capacity(limit.min(64)),
            limit: Some(limit.max(1)),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, evicting the oldest beyond the limit.
    pub fn push(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            if excess > 0 {
                self.transitions.drain(..excess);
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each
    /// transition.
    pub fn get_path(&self) -> Vec<&AcquisitionState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Duration from the first to the last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Number of confirmations recorded, including live-update
    /// re-confirmations. Restores of abandoned requests are not counted.
    pub fn confirmations(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.to.is_final() && !t.restored)
            .count()
    }
}
