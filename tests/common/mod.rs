//! Shared test doubles for integration tests.

#![allow(dead_code)]

use locgate::core::Coordinate;
use locgate::machine::AcquisitionMachine;
use locgate::provider::{GeolocationProvider, PositionError, PositionErrorCode};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub type Fix = Result<Coordinate, PositionError>;

enum Step {
    Ready(Fix),
    Held(oneshot::Receiver<Fix>),
}

/// Provider that replays a queued script, one step per call.
///
/// Held steps stay pending until the test sends through the returned
/// sender, which makes the in-flight window observable.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ok(&self, latitude: f64, longitude: f64) {
        self.push(Step::Ready(Ok(Coordinate::new(latitude, longitude))));
    }

    pub fn push_err(&self, error: PositionError) {
        self.push(Step::Ready(Err(error)));
    }

    pub fn push_held(&self) -> oneshot::Sender<Fix> {
        let (tx, rx) = oneshot::channel();
        self.push(Step::Held(rx));
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, step: Step) {
        self.script.lock().unwrap().push_back(step);
    }
}

impl GeolocationProvider for ScriptedProvider {
    async fn current_position(&self) -> Fix {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(Step::Ready(fix)) => fix,
            Some(Step::Held(rx)) => rx.await.unwrap_or_else(|_| {
                Err(PositionError::new(PositionErrorCode::Other(0), "script sender dropped"))
            }),
            None => Err(PositionError::new(PositionErrorCode::Other(0), "script exhausted")),
        }
    }
}

pub type Machine = AcquisitionMachine<Arc<ScriptedProvider>>;

pub fn machine() -> (Arc<Machine>, Arc<ScriptedProvider>) {
    let provider = ScriptedProvider::new();
    let machine = Arc::new(AcquisitionMachine::new(Arc::clone(&provider)));
    (machine, provider)
}

/// Yield until a spawned request has been accepted.
pub async fn wait_until_loading(machine: &Machine) {
    while !machine.is_loading() {
        tokio::task::yield_now().await;
    }
}
