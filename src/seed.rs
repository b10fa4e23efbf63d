//! Seed data for the advertisement pool.
//!
//! The pool is built once at process start, either from the built-in list
//! returned by [`default_pool`] or from a JSON seed file read by
//! [`load_pool`]. A seed file is a JSON array of advertisements:
//!
//! ```json
//! [
//!   { "country": "france", "category": "food", "price": 3, "reach": 7 },
//!   { "country": "USA", "category": "tech", "price": 2, "UpTo": 12 }
//! ]
//! ```
//!
//! `reach` may also be spelled `upTo` or `UpTo`.

use std::fs;
use std::path::Path;

use auction::Advertisement;
use thiserror::Error;

/// Errors that can occur while loading a seed file.
#[derive(Debug, Error)]
pub enum PoolLoadError {
    #[error("failed to read seed file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// The built-in advertisement pool, in seed order.
pub fn default_pool() -> Vec<Advertisement> {
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

/// Read and validate a JSON seed file.
pub fn load_pool(path: impl AsRef<Path>) -> Result<Vec<Advertisement>, PoolLoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let pool = parse_pool(&contents)?;
    tracing::info!(path = %path.display(), advertisements = pool.len(), "loaded seed file");
    Ok(pool)
}

/// Parse and validate seed file contents.
pub fn parse_pool(json: &str) -> Result<Vec<Advertisement>, PoolLoadError> {
    let pool: Vec<Advertisement> = serde_json::from_str(json)?;
    validate_pool(&pool)?;
    Ok(pool)
}

fn validate_pool(pool: &[Advertisement]) -> Result<(), PoolLoadError> {
    for (position, ad) in pool.iter().enumerate() {
        if ad.country.trim().is_empty() {
            return Err(PoolLoadError::Validation(format!(
                "advertisement {position}: country must not be empty"
            )));
        }
        if ad.category.trim().is_empty() {
            return Err(PoolLoadError::Validation(format!(
                "advertisement {position}: category must not be empty"
            )));
        }
    }
    Ok(())
}
