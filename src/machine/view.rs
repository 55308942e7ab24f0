//! Observable machine outputs.

use crate::core::{AcquisitionState, Coordinate, RejectionReason};
use crate::failure::{Locale, Notice};
use crate::query::QueryActivation;
use serde::{Deserialize, Serialize};

/// Consistent snapshot of everything the presentation layer renders from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionView {
    pub state: AcquisitionState,
    /// Consent dialog is shown
    pub dialog_visible: bool,
    /// Dialog should be worded as a retry
    pub is_retry: bool,
    /// Loading indicator is shown
    pub is_loading: bool,
    /// Last confirmed location; survives later rejected attempts
    pub confirmed_location: Option<Coordinate>,
    /// Most recent notice to surface, if any
    pub notice: Option<Notice>,
    pub query: QueryActivation,
}

impl AcquisitionView {
    /// Text of the current notice in the given language.
    pub fn notice_message(&self, locale: Locale) -> Option<&'static str> {
        self.notice.map(|n| n.message(locale))
    }
}

/// What a call to
/// [`request_location`](super::AcquisitionMachine::request_location) did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RequestOutcome {
    /// Another request was already in flight; nothing changed.
    Ignored,
    Confirmed(Coordinate),
    Rejected(RejectionReason),
}

impl RequestOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}
