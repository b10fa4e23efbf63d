use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single bid in the advertisement pool.
///
/// Advertisements are created once when the pool is seeded and never change
/// afterwards; the engine only ever hands out derived [`AdView`] values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Advertisement {
    /// Targeted country, compared ASCII case-insensitively.
    pub country: String,
    /// Targeted category, compared ASCII case-insensitively.
    pub category: String,
    /// Bid amount.
    pub price: u64,
    /// Audience ceiling the advertiser is willing to pay up to. Seed files
    /// coming from the legacy format spell this `UpTo`.
    #[serde(alias = "upTo", alias = "UpTo")]
    pub reach: u64,
}

impl Advertisement {
    pub fn new(country: impl Into<String>, category: impl Into<String>, price: u64, reach: u64) -> Self {
        Self {
            country: country.into(),
            category: category.into(),
            price,
            reach,
        }
    }

    /// Whether this advertisement targets the given profile.
    pub fn targets(&self, profile: &UserProfile) -> bool {
        self.country.eq_ignore_ascii_case(&profile.country)
            && self.category.eq_ignore_ascii_case(&profile.category)
    }
}

/// The requesting user's targeting attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub country: String,
    pub category: String,
}

impl UserProfile {
    pub fn new(country: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            category: category.into(),
        }
    }
}

/// Which fields of the winning advertisement are exposed to the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Redaction {
    /// Winner tops both reach and price among the candidates: only `price`.
    PriceOnly,
    /// Winner tops reach but not price: only `reach`.
    ReachOnly,
    /// Winner does not top reach. Not produced by the ranking in
    /// [`AuctionEngine::run_auction`](crate::AuctionEngine::run_auction).
    Unredacted,
}

/// Caller-facing view of the winning advertisement.
///
/// `country` and `category` are always present; `price` and `reach` are
/// omitted from the serialized form when redacted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdView {
    pub country: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<u64>,
}

impl AdView {
    /// Build the view of `ad` that `redaction` allows the caller to see.
    pub fn of(ad: &Advertisement, redaction: Redaction) -> Self {
        let (price, reach) = match redaction {
            Redaction::PriceOnly => (Some(ad.price), None),
            Redaction::ReachOnly => (None, Some(ad.reach)),
            Redaction::Unredacted => (Some(ad.price), Some(ad.reach)),
        };
        Self {
            country: ad.country.clone(),
            category: ad.category.clone(),
            price,
            reach,
        }
    }
}

/// Highest `reach` and highest `price` over a candidate set, taken
/// independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maxima {
    pub reach: u64,
    pub price: u64,
}

/// Errors produced by the auction core.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuctionError {
    /// No advertisement targets the requested country/category pair.
    #[error("no advertisement matches country '{country}' and category '{category}'")]
    NoMatch { country: String, category: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targeting_ignores_ascii_case() {
        let ad = Advertisement::new("USA", "tech", 2, 12);
        assert!(ad.targets(&UserProfile::new("usa", "TECH")));
        assert!(ad.targets(&UserProfile::new("UsA", "Tech")));
        assert!(!ad.targets(&UserProfile::new("usa", "food")));
        assert!(!ad.targets(&UserProfile::new("", "")));
    }

    #[test]
    fn view_omits_redacted_fields_when_serialized() {
        let ad = Advertisement::new("france", "food", 4, 9);

        let price_only = serde_json::to_value(AdView::of(&ad, Redaction::PriceOnly)).unwrap();
        assert_eq!(
            price_only,
            serde_json::json!({"country": "france", "category": "food", "price": 4})
        );

        let reach_only = serde_json::to_value(AdView::of(&ad, Redaction::ReachOnly)).unwrap();
        assert_eq!(
            reach_only,
            serde_json::json!({"country": "france", "category": "food", "reach": 9})
        );

        let full = AdView::of(&ad, Redaction::Unredacted);
        assert_eq!(full.price, Some(4));
        assert_eq!(full.reach, Some(9));
    }

    #[test]
    fn legacy_up_to_field_is_accepted() {
        let ad: Advertisement = serde_json::from_str(
            r#"{"country": "belgium", "category": "tech", "price": 3, "UpTo": 6}"#,
        )
        .expect("legacy advertisement");
        assert_eq!(ad.reach, 6);

        let ad: Advertisement = serde_json::from_str(
            r#"{"country": "belgium", "category": "tech", "price": 3, "upTo": 6}"#,
        )
        .expect("camelCase advertisement");
        assert_eq!(ad.reach, 6);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let parsed: Result<Advertisement, _> = serde_json::from_str(
            r#"{"country": "belgium", "category": "tech", "price": -3, "reach": 6}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn no_match_error_names_the_profile() {
        let err = AuctionError::NoMatch {
            country: "germany".into(),
            category: "food".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("germany"));
        assert!(msg.contains("food"));
    }
}
