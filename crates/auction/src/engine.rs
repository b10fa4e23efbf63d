use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::metrics::{report, AuctionObservation};
use crate::types::{AdView, Advertisement, AuctionError, Maxima, Redaction, UserProfile};

#[cfg(test)]
mod tests;

/// Outcome of a successful auction: the caller-facing view plus how it was
/// derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    pub view: AdView,
    pub redaction: Redaction,
    /// Number of advertisements that survived filtering.
    pub candidates: usize,
}

/// Auction engine over a fixed advertisement pool.
///
/// The pool is handed in at construction and shared read-only, so a single
/// engine can serve any number of concurrent auctions without locking.
#[derive(Debug, Clone)]
pub struct AuctionEngine {
    pool: Arc<[Advertisement]>,
}

impl AuctionEngine {
    /// Construct an engine over `pool`, preserving its order.
    pub fn new(pool: impl Into<Arc<[Advertisement]>>) -> Self {
        Self { pool: pool.into() }
    }

    /// The advertisement pool in seed order.
    pub fn advertisements(&self) -> &[Advertisement] {
        &self.pool
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Every advertisement targeting `profile`, in pool order.
    pub fn candidates(&self, profile: &UserProfile) -> Vec<&Advertisement> {
        self.pool.iter().filter(|ad| ad.targets(profile)).collect()
    }

    /// Run the auction for `profile` and return the redacted winner.
    ///
    /// Fails with [`AuctionError::NoMatch`] when nothing targets the profile.
    pub fn run_auction(&self, profile: &UserProfile) -> Result<AdView, AuctionError> {
        self.award(profile).map(|award| award.view)
    }

    /// Like [`run_auction`](Self::run_auction) but also reports the applied
    /// [`Redaction`] and the candidate count.
    pub fn award(&self, profile: &UserProfile) -> Result<Award, AuctionError> {
        let start = Instant::now();
        let candidates = self.candidates(profile);

        let award = select_winner(&candidates).zip(maxima(&candidates)).map(|(winner, maxima)| {
            let redaction = redaction_for(winner, maxima);
            Award {
                view: AdView::of(winner, redaction),
                redaction,
                candidates: candidates.len(),
            }
        });

        report(AuctionObservation {
            latency: start.elapsed(),
            candidates: candidates.len(),
            redaction: award.as_ref().map(|a| a.redaction),
        });

        match award {
            Some(award) => {
                debug!(
                    country = %profile.country,
                    category = %profile.category,
                    candidates = award.candidates,
                    redaction = ?award.redaction,
                    "auction settled"
                );
                Ok(award)
            }
            None => {
                debug!(
                    country = %profile.country,
                    category = %profile.category,
                    "no advertisement targets profile"
                );
                Err(AuctionError::NoMatch {
                    country: profile.country.clone(),
                    category: profile.category.clone(),
                })
            }
        }
    }
}

/// Pick the candidate with the highest `reach`, then the highest `price`.
///
/// A tie on both keys goes to the earliest candidate: a later candidate only
/// replaces the current best when it is strictly greater.
pub fn select_winner<'a>(candidates: &[&'a Advertisement]) -> Option<&'a Advertisement> {
    candidates.iter().copied().reduce(|best, ad| {
        if (ad.reach, ad.price) > (best.reach, best.price) {
            ad
        } else {
            best
        }
    })
}

/// Independent maxima of `reach` and `price` over the candidates.
pub fn maxima(candidates: &[&Advertisement]) -> Option<Maxima> {
    let reach = candidates.iter().map(|ad| ad.reach).max()?;
    let price = candidates.iter().map(|ad| ad.price).max()?;
    Some(Maxima { reach, price })
}

/// Decide which fields of `winner` the caller may see.
pub fn redaction_for(winner: &Advertisement, maxima: Maxima) -> Redaction {
    if winner.reach == maxima.reach {
        if winner.price == maxima.price {
            Redaction::PriceOnly
        } else {
            Redaction::ReachOnly
        }
    } else {
        // Only reachable when the winner was chosen by something other than
        // `select_winner`.
        Redaction::Unredacted
    }
}
