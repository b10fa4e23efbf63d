//! # RTB Auction Core (`auction`)
//!
//! ## Purpose
//!
//! `auction` picks, for a [`UserProfile`], the single most relevant
//! [`Advertisement`] from a fixed pool and returns a redacted [`AdView`] of it.
//! Transport concerns (HTTP, request parsing, status codes) live in the
//! `server` crate; this crate is a pure function of its pool and input.
//!
//! ## Pipeline
//!
//! 1. **Filter**: keep advertisements whose country and category equal the
//!    profile's, ASCII case-insensitively, in pool order.
//! 2. **No match**: an empty candidate set yields [`AuctionError::NoMatch`].
//! 3. **Rank**: highest `reach`, then highest `price`; a full tie goes to the
//!    earliest candidate in pool order.
//! 4. **Redact**: if the winner also has the highest price among candidates
//!    only `price` is shown, otherwise only `reach`. See [`Redaction`].
//!
//! ## Example Usage
//!
//! ```
//! use auction::{Advertisement, AuctionEngine, UserProfile};
//!
//! let engine = AuctionEngine::new(vec![
//!     Advertisement::new("france", "food", 3, 7),
//!     Advertisement::new("france", "food", 4, 9),
//! ]);
//!
//! let view = engine
//!     .run_auction(&UserProfile::new("France", "FOOD"))
//!     .expect("france/food has candidates");
//! assert_eq!(view.price, Some(4));
//! assert_eq!(view.reach, None);
//! ```
//!
//! ## Observability
//!
//! Install an [`AuctionMetrics`] implementation via [`set_auction_metrics`] to
//! receive an [`AuctionObservation`] (latency, candidate count, redaction)
//! for every auction.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{maxima, redaction_for, select_winner, AuctionEngine, Award};
pub use crate::metrics::{set_auction_metrics, AuctionMetrics, AuctionObservation};
pub use crate::types::{AdView, Advertisement, AuctionError, Maxima, Redaction, UserProfile};
