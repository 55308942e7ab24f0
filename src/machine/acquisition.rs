//! The location acquisition machine.

use super::in_flight::InFlight;
use super::view::{AcquisitionView, RequestOutcome};
use crate::config::AcquisitionConfig;
use crate::core::{
    AcquisitionState, Coordinate, Geofence, RejectionReason, StateHistory, StateTransition,
};
use crate::failure::{FailureCategory, Locale, Notice};
use crate::provider::{GeolocationProvider, PositionError};
use crate::query::QueryActivation;
use chrono::Utc;
use std::sync::atomic::AtomicBool;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Transitions retained in a machine's history; older ones are dropped.
pub const HISTORY_LIMIT: usize = 256;

/// What an abandoned request puts back.
#[derive(Clone, Debug)]
pub(super) struct Snapshot {
    state: AcquisitionState,
    notice: Option<Notice>,
    dialog_dismissed: bool,
}

/// Mutable session data guarded by the machine's mutex.
#[derive(Debug, Default)]
struct Session {
    state: AcquisitionState,
    confirmed: Option<Coordinate>,
    is_retry: bool,
    is_loading: bool,
    dialog_dismissed: bool,
    notice: Option<Notice>,
    history: StateHistory,
    /// Requests issued since the last confirmation
    attempt: usize,
    last_ticket: u64,
    query_generation: u64,
}

impl Session {
    fn new() -> Self {
        Self {
            history: StateHistory::bounded(HISTORY_LIMIT),
            ..Self::default()
        }
    }

    fn transition(&mut self, to: AcquisitionState) {
        self.record(to, false);
        self.dialog_dismissed = false;
    }

    fn record(&mut self, to: AcquisitionState, restored: bool) {
        self.history.push(StateTransition {
            from: self.state.clone(),
            to: to.clone(),
            timestamp: Utc::now(),
            attempt: self.attempt,
            restored,
        });
        self.state = to;
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            notice: self.notice,
            dialog_dismissed: self.dialog_dismissed,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.record(snapshot.state, true);
        self.notice = snapshot.notice;
        self.dialog_dismissed = snapshot.dialog_dismissed;
    }

    fn confirm(&mut self, location: Coordinate) {
        self.transition(AcquisitionState::Confirmed { location });
        self.confirmed = Some(location);
        self.is_retry = false;
        self.notice = None;
        self.query_generation += 1;
        self.attempt = 0;
    }

    fn reject(&mut self, reason: RejectionReason) {
        self.transition(AcquisitionState::Rejected { reason });
        self.is_retry = true;
        self.notice = Some(Notice::Rejected(reason));
    }

    fn view(&self) -> AcquisitionView {
        AcquisitionView {
            state: self.state.clone(),
            dialog_visible: self.state.offers_consent() && !self.dialog_dismissed,
            is_retry: self.is_retry,
            is_loading: self.is_loading,
            confirmed_location: self.confirmed,
            notice: self.notice,
            query: QueryActivation::from_confirmed(self.confirmed, self.query_generation),
        }
    }
}

/// Drives a single user's location acquisition.
///
/// The machine owns the acquisition state and sequences one provider call at
/// a time through the geofence and failure classification. It is meant to be
/// owned by one controller and shared by reference (or `Arc`) with the
/// presentation layer, which observes it through [`view`](Self::view) or
/// [`subscribe`](Self::subscribe).
///
/// # Example
///
/// ```rust
/// use locgate::core::Coordinate;
/// use locgate::machine::{AcquisitionMachine, RequestOutcome};
/// use locgate::provider::{GeolocationProvider, PositionError};
///
/// struct Fixed(Coordinate);
///
/// impl GeolocationProvider for Fixed {
///     async fn current_position(&self) -> Result<Coordinate, PositionError> {
///         Ok(self.0)
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let machine = AcquisitionMachine::new(Fixed(Coordinate::new(39.0, 35.0)));
/// assert!(machine.dialog_visible());
///
/// let outcome = machine.request_location().await;
/// assert_eq!(outcome, RequestOutcome::Confirmed(Coordinate::new(39.0, 35.0)));
///
/// let view = machine.view();
/// assert!(!view.dialog_visible);
/// assert!(!view.is_loading);
/// assert!(view.query.enabled);
/// # }
/// ```
pub struct AcquisitionMachine<P: GeolocationProvider> {
    provider: P,
    geofence: Geofence,
    locale: Locale,
    pub(super) in_flight: AtomicBool,
    session: Mutex<Session>,
    updates: watch::Sender<AcquisitionView>,
}

impl<P: GeolocationProvider> AcquisitionMachine<P> {
    /// Create a machine with the default configuration (Turkey, Turkish).
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, &AcquisitionConfig::default())
    }

    pub fn with_config(provider: P, config: &AcquisitionConfig) -> Self {
        Self::with_geofence(provider, config.geofence(), config.locale)
    }

    /// Create a machine around an arbitrary geofence predicate.
    pub fn with_geofence(provider: P, geofence: Geofence, locale: Locale) -> Self {
        let session = Session::new();
        let (updates, _) = watch::channel(session.view());
        Self {
            provider,
            geofence,
            locale,
            in_flight: AtomicBool::new(false),
            session: Mutex::new(session),
            updates,
        }
    }

    /// Ask the provider for the current location.
    ///
    /// Ignored (returns [`RequestOutcome::Ignored`] without any state change)
    /// while another request is in flight. Otherwise moves to `Requesting`,
    /// waits for the provider once, and settles in `Confirmed` or `Rejected`.
    /// Loading is cleared and the in-flight slot released on every exit path.
    pub async fn request_location(&self) -> RequestOutcome {
        let Some(request) = InFlight::acquire(self) else {
            debug!("location request already in flight, ignoring");
            return RequestOutcome::Ignored;
        };

        debug!(ticket = request.ticket(), "awaiting geolocation provider");
        let result = self.provider.current_position().await;
        request.settle(result)
    }

    pub(super) fn begin(&self) -> (u64, Snapshot) {
        let mut session = self.lock();
        debug_assert!(
            session.state.accepts_request(),
            "in-flight slot claimed while already requesting"
        );
        session.last_ticket += 1;
        session.attempt += 1;
        let ticket = session.last_ticket;
        let previous = session.snapshot();

        session.transition(AcquisitionState::Requesting);
        session.is_loading = true;
        session.notice = None;
        self.publish(&session);

        debug!(
            ticket,
            from = previous.state.name(),
            attempt = session.attempt,
            "location request accepted"
        );
        (ticket, previous)
    }

    pub(super) fn settle(
        &self,
        ticket: u64,
        result: Result<Coordinate, PositionError>,
    ) -> RequestOutcome {
        let mut session = self.lock();
        let outcome = match result {
            Ok(location) if self.geofence.check(&location) => {
                session.confirm(location);
                info!(ticket, %location, "location confirmed");
                RequestOutcome::Confirmed(location)
            }
            Ok(location) => {
                session.reject(RejectionReason::OutOfBounds);
                warn!(
                    ticket,
                    %location,
                    region = self.geofence.label(),
                    "location outside permitted region"
                );
                RequestOutcome::Rejected(RejectionReason::OutOfBounds)
            }
            Err(error) => {
                let reason = RejectionReason::Provider(FailureCategory::from(&error));
                session.reject(reason);
                warn!(
                    ticket,
                    code = %error.code,
                    error = %error.message,
                    ?reason,
                    "location request failed"
                );
                RequestOutcome::Rejected(reason)
            }
        };
        session.is_loading = false;
        self.publish(&session);
        outcome
    }

    /// Undo a request whose future was dropped before the provider answered.
    pub(super) fn abandon(&self, ticket: u64, previous: Snapshot) {
        let mut session = self.lock();
        debug!(ticket, restored = previous.state.name(), "location request abandoned");
        session.restore(previous);
        session.attempt = session.attempt.saturating_sub(1);
        session.is_loading = false;
        self.publish(&session);
    }

    /// Accept a fresh fix from the live provider after confirmation.
    ///
    /// Only applies while `Confirmed`; the fix must pass the geofence. Each
    /// accepted fix re-triggers the dependent query. Returns whether the fix
    /// was applied.
    pub fn report_live_location(&self, location: Coordinate) -> bool {
        let mut session = self.lock();
        if !session.state.is_final() {
            debug!(%location, state = session.state.name(), "live location ignored");
            return false;
        }
        if !self.geofence.check(&location) {
            debug!(
                %location,
                region = self.geofence.label(),
                "live location outside region ignored"
            );
            return false;
        }

        session.confirm(location);
        self.publish(&session);
        debug!(%location, "live location applied");
        true
    }

    /// Close the consent dialog without requesting. Reopens on the next
    /// transition into a consent-offering state.
    pub fn dismiss_dialog(&self) {
        let mut session = self.lock();
        if session.state.offers_consent() && !session.dialog_dismissed {
            session.dialog_dismissed = true;
            self.publish(&session);
        }
    }

    /// Surface a dependent-query failure. Does not change acquisition state.
    pub fn report_query_failure(&self) {
        let mut session = self.lock();
        session.notice = Some(Notice::DataLoadFailed);
        self.publish(&session);
    }

    pub fn view(&self) -> AcquisitionView {
        self.lock().view()
    }

    /// Receive a new [`AcquisitionView`] after every change.
    pub fn subscribe(&self) -> watch::Receiver<AcquisitionView> {
        self.updates.subscribe()
    }

    pub fn state(&self) -> AcquisitionState {
        self.lock().state.clone()
    }

    pub fn dialog_visible(&self) -> bool {
        self.view().dialog_visible
    }

    pub fn is_retry(&self) -> bool {
        self.lock().is_retry
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    pub fn confirmed_location(&self) -> Option<Coordinate> {
        self.lock().confirmed
    }

    pub fn query_activation(&self) -> QueryActivation {
        self.view().query
    }

    pub fn history(&self) -> StateHistory {
        self.lock().history.clone()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Text of the current notice in the configured language.
    pub fn notice_text(&self) -> Option<&'static str> {
        self.lock().notice.map(|notice| notice.message(self.locale))
    }

    pub fn geofence(&self) -> &Geofence {
        &self.geofence
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, session: &Session) {
        self.updates.send_replace(session.view());
    }
}
