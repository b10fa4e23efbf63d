use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::metrics::{set_auction_metrics, AuctionMetrics, AuctionObservation};

fn pool() -> Vec<Advertisement> {
    vec![
        Advertisement::new("france", "food", 3, 7),
        Advertisement::new("france", "food", 4, 9),
        Advertisement::new("france", "tech", 5, 5),
        Advertisement::new("belgium", "food", 6, 7),
        Advertisement::new("belgium", "food", 1, 9),
        Advertisement::new("belgium", "tech", 3, 6),
        Advertisement::new("USA", "tech", 2, 12),
        Advertisement::new("USA", "tech", 5, 9),
        Advertisement::new("USA", "tech", 6, 7),
    ]
}

fn engine() -> AuctionEngine {
    AuctionEngine::new(pool())
}

#[test]
fn top_reach_and_price_exposes_price_only() {
    let view = engine()
        .run_auction(&UserProfile::new("france", "food"))
        .expect("france/food has candidates");

    assert_eq!(
        view,
        AdView {
            country: "france".into(),
            category: "food".into(),
            price: Some(4),
            reach: None,
        }
    );
}

#[test]
fn top_reach_without_top_price_exposes_reach_only() {
    let view = engine()
        .run_auction(&UserProfile::new("belgium", "food"))
        .expect("belgium/food has candidates");

    assert_eq!(
        view,
        AdView {
            country: "belgium".into(),
            category: "food".into(),
            price: None,
            reach: Some(9),
        }
    );
}

#[test]
fn three_way_candidate_set_exposes_reach_only() {
    let award = engine()
        .award(&UserProfile::new("USA", "tech"))
        .expect("USA/tech has candidates");

    assert_eq!(award.candidates, 3);
    assert_eq!(award.redaction, Redaction::ReachOnly);
    assert_eq!(award.view.country, "USA");
    assert_eq!(award.view.category, "tech");
    assert_eq!(award.view.reach, Some(12));
    assert_eq!(award.view.price, None);
}

#[test]
fn unknown_pair_is_no_match() {
    let err = engine()
        .run_auction(&UserProfile::new("germany", "food"))
        .expect_err("germany has no advertisements");

    assert_eq!(
        err,
        AuctionError::NoMatch {
            country: "germany".into(),
            category: "food".into(),
        }
    );
}

#[test]
fn empty_profile_fields_are_no_match() {
    let result = engine().run_auction(&UserProfile::new("", ""));
    assert!(matches!(result, Err(AuctionError::NoMatch { .. })));
}

#[test]
fn empty_pool_is_no_match() {
    let engine = AuctionEngine::new(Vec::<Advertisement>::new());
    assert!(engine.is_empty());
    assert!(matches!(
        engine.run_auction(&UserProfile::new("france", "food")),
        Err(AuctionError::NoMatch { .. })
    ));
}

#[test]
fn filtering_is_case_insensitive_and_keeps_pool_order() {
    let engine = engine();
    let exact = engine.candidates(&UserProfile::new("USA", "tech"));
    let shouted = engine.candidates(&UserProfile::new("usa", "TECH"));

    assert_eq!(exact, shouted);
    let prices: Vec<u64> = exact.iter().map(|ad| ad.price).collect();
    assert_eq!(prices, vec![2, 5, 6]);

    let mixed = AuctionEngine::new(vec![
        Advertisement::new("France", "FOOD", 3, 7),
        Advertisement::new("fRANCE", "food", 4, 9),
    ]);
    assert_eq!(
        mixed.candidates(&UserProfile::new("france", "food")).len(),
        2
    );
    assert_eq!(
        mixed
            .run_auction(&UserProfile::new("FRANCE", "Food"))
            .expect("mixed-case pool matches")
            .price,
        Some(4)
    );
}

#[test]
fn reach_tie_is_broken_by_price() {
    let engine = AuctionEngine::new(vec![
        Advertisement::new("spain", "auto", 2, 10),
        Advertisement::new("spain", "auto", 8, 10),
        Advertisement::new("spain", "auto", 5, 10),
    ]);

    let award = engine
        .award(&UserProfile::new("spain", "auto"))
        .expect("spain/auto has candidates");
    assert_eq!(award.redaction, Redaction::PriceOnly);
    assert_eq!(award.view.price, Some(8));
}

#[test]
fn full_tie_goes_to_first_in_pool_order() {
    // The two candidates differ only in country casing, which the view keeps.
    let engine = AuctionEngine::new(vec![
        Advertisement::new("italy", "wine", 1, 3),
        Advertisement::new("Italy", "wine", 5, 9),
        Advertisement::new("ITALY", "wine", 5, 9),
    ]);

    let view = engine
        .run_auction(&UserProfile::new("italy", "wine"))
        .expect("italy/wine has candidates");
    assert_eq!(view.country, "Italy");

    let reversed = AuctionEngine::new(vec![
        Advertisement::new("ITALY", "wine", 5, 9),
        Advertisement::new("Italy", "wine", 5, 9),
    ]);
    let view = reversed
        .run_auction(&UserProfile::new("italy", "wine"))
        .expect("italy/wine has candidates");
    assert_eq!(view.country, "ITALY");
}

#[test]
fn select_winner_prefers_reach_over_price() {
    let low_reach = Advertisement::new("x", "y", 100, 1);
    let high_reach = Advertisement::new("x", "y", 1, 2);
    let winner = select_winner(&[&low_reach, &high_reach]).expect("non-empty");
    assert_eq!(winner, &high_reach);
    assert!(select_winner(&[]).is_none());
    assert!(maxima(&[]).is_none());
}

#[test]
fn redaction_falls_back_to_unredacted_below_max_reach() {
    let winner = Advertisement::new("france", "food", 3, 7);
    let maxima = Maxima { reach: 9, price: 4 };

    assert_eq!(redaction_for(&winner, maxima), Redaction::Unredacted);
    let view = AdView::of(&winner, redaction_for(&winner, maxima));
    assert_eq!(view.price, Some(3));
    assert_eq!(view.reach, Some(7));
}

#[test]
fn run_auction_never_takes_the_unredacted_path() {
    // Every pool of up to three candidates with small price/reach values.
    let values = [0u64, 1, 2];
    let mut ads = Vec::new();
    for price in values {
        for reach in values {
            ads.push(Advertisement::new("nl", "toys", price, reach));
        }
    }

    let profile = UserProfile::new("NL", "Toys");
    for a in &ads {
        for b in &ads {
            for c in &ads {
                for len in 1..=3 {
                    let pool: Vec<Advertisement> =
                        [a, b, c][..len].iter().map(|ad| (*ad).clone()).collect();
                    let award = AuctionEngine::new(pool)
                        .award(&profile)
                        .expect("pool targets profile");

                    assert_ne!(award.redaction, Redaction::Unredacted);
                    assert!(
                        award.view.price.is_some() != award.view.reach.is_some(),
                        "exactly one of price/reach must be visible: {:?}",
                        award.view
                    );
                }
            }
        }
    }
}

#[test]
fn repeated_auctions_are_identical_and_leave_pool_untouched() {
    let engine = engine();
    let before = engine.advertisements().to_vec();
    let profile = UserProfile::new("belgium", "food");

    let first = engine.run_auction(&profile);
    for _ in 0..50 {
        assert_eq!(engine.run_auction(&profile), first);
    }
    assert_eq!(engine.advertisements(), before.as_slice());
}

#[test]
fn clones_share_the_pool() {
    let engine = engine();
    let clone = engine.clone();
    assert!(std::ptr::eq(
        engine.advertisements().as_ptr(),
        clone.advertisements().as_ptr()
    ));
}

#[derive(Default)]
struct CountingMetrics {
    settled: AtomicUsize,
    unmatched: AtomicUsize,
}

impl AuctionMetrics for CountingMetrics {
    fn record_auction(&self, observation: &AuctionObservation) {
        if observation.matched() {
            assert!(observation.candidates > 0);
            assert_ne!(observation.outcome(), "no_match");
            self.settled.fetch_add(1, Ordering::SeqCst);
        } else {
            assert_eq!(observation.candidates, 0);
            assert_eq!(observation.outcome(), "no_match");
            self.unmatched.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn metrics_recorder_observes_auctions() {
    let recorder = Arc::new(CountingMetrics::default());
    set_auction_metrics(Some(recorder.clone()));

    let engine = engine();
    let _ = engine.run_auction(&UserProfile::new("france", "food"));
    let _ = engine.run_auction(&UserProfile::new("germany", "food"));

    assert!(set_auction_metrics(None).is_some());

    // Other tests may run auctions while the recorder is installed.
    assert!(recorder.settled.load(Ordering::SeqCst) >= 1);
    assert!(recorder.unmatched.load(Ordering::SeqCst) >= 1);
}

#[test]
fn observation_outcome_labels() {
    let observation = |redaction| AuctionObservation {
        latency: std::time::Duration::ZERO,
        candidates: 1,
        redaction,
    };
    assert_eq!(observation(Some(Redaction::PriceOnly)).outcome(), "price_only");
    assert_eq!(observation(Some(Redaction::ReachOnly)).outcome(), "reach_only");
    assert_eq!(observation(Some(Redaction::Unredacted)).outcome(), "unredacted");
    assert_eq!(observation(None).outcome(), "no_match");
}
