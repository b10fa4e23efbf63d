//! Workspace umbrella crate for the RTB ad auction.
//!
//! This crate re-exports the auction core and owns the seed pool, so callers
//! can build a ready-to-serve [`AuctionEngine`] with a single call.

pub mod seed;

pub use auction::{
    maxima, redaction_for, select_winner, set_auction_metrics, AdView, Advertisement,
    AuctionEngine, AuctionError, AuctionMetrics, AuctionObservation, Award, Maxima, Redaction,
    UserProfile,
};
pub use seed::{default_pool, load_pool, parse_pool, PoolLoadError};

use std::path::Path;

/// Build an engine from `seed_path` when given, otherwise from the built-in
/// pool.
pub fn engine_from_config(seed_path: Option<&Path>) -> Result<AuctionEngine, PoolLoadError> {
    let pool = match seed_path {
        Some(path) => load_pool(path)?,
        None => default_pool(),
    };
    if pool.is_empty() {
        tracing::warn!("advertisement pool is empty; every auction will report no match");
    }
    Ok(AuctionEngine::new(pool))
}

/// Engine over the built-in pool.
pub fn default_engine() -> AuctionEngine {
    AuctionEngine::new(default_pool())
}
