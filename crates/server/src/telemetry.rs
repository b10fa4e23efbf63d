//! Auction telemetry routed into the server's `tracing` output.
use auction::{AuctionMetrics, AuctionObservation};

/// [`AuctionMetrics`] recorder that emits one `auction` event per run.
///
/// The event is emitted inside the caller's span, so for HTTP traffic it
/// inherits the `request_id` of the `request` span.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuctionMetrics;

impl AuctionMetrics for TracingAuctionMetrics {
    fn record_auction(&self, observation: &AuctionObservation) {
        tracing::info!(
            target: "rtb::auction",
            outcome = observation.outcome(),
            candidates = observation.candidates,
            latency_us = observation.latency.as_micros() as u64,
            "Auction recorded"
        );
    }
}
