//! Observer hook for auction runs.
//!
//! The engine reports one [`AuctionObservation`] per call to
//! [`AuctionEngine::award`](crate::AuctionEngine::award) to whichever
//! [`AuctionMetrics`] recorder is installed. With no recorder installed the
//! report is skipped entirely.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::Redaction;

type Recorder = Arc<dyn AuctionMetrics>;

/// What one auction looked like from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionObservation {
    pub latency: Duration,
    /// Advertisements that survived filtering.
    pub candidates: usize,
    /// `None` when the auction ended in `NoMatch`.
    pub redaction: Option<Redaction>,
}

impl AuctionObservation {
    pub fn matched(&self) -> bool {
        self.redaction.is_some()
    }

    /// Short label for the outcome: `price_only`, `reach_only`,
    /// `unredacted` or `no_match`.
    pub fn outcome(&self) -> &'static str {
        match self.redaction {
            Some(Redaction::PriceOnly) => "price_only",
            Some(Redaction::ReachOnly) => "reach_only",
            Some(Redaction::Unredacted) => "unredacted",
            None => "no_match",
        }
    }
}

/// Receives an [`AuctionObservation`] for every auction the engine runs.
pub trait AuctionMetrics: Send + Sync {
    fn record_auction(&self, observation: &AuctionObservation);
}

static RECORDER: OnceCell<RwLock<Option<Recorder>>> = OnceCell::new();

fn recorder_slot() -> &'static RwLock<Option<Recorder>> {
    RECORDER.get_or_init(|| RwLock::new(None))
}

pub(crate) fn report(observation: AuctionObservation) {
    let recorder = recorder_slot()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone();
    if let Some(recorder) = recorder {
        recorder.record_auction(&observation);
    }
}

/// Install `recorder` (or clear it with `None`) and return the one it
/// replaces.
pub fn set_auction_metrics(recorder: Option<Recorder>) -> Option<Recorder> {
    let mut slot = recorder_slot()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    std::mem::replace(&mut *slot, recorder)
}
