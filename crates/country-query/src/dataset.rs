//! Dataset loading.
//!
//! The engine itself only needs read access to an ordered `&[Country]`; who
//! supplies it is up to the caller. This module offers the two usual
//! providers: parsing JSON text supplied at construction time, and the
//! dataset bundled into the crate.

use crate::country::Country;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Construction-time failure. This is the only fatal condition in the
/// system; queries themselves never error.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid country JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset contains no records")]
    Empty,
}

/// Parse an ordered country dataset from JSON text.
///
/// Record order in the JSON array is preserved and becomes the tie-break
/// order for multi-match results.
pub fn load_json(json: &str) -> Result<Vec<Country>, DatasetError> {
    let countries: Vec<Country> = serde_json::from_str(json)?;
    if countries.is_empty() {
        return Err(DatasetError::Empty);
    }
    debug!(records = countries.len(), "loaded country dataset");
    Ok(countries)
}

static BUNDLED: OnceLock<Vec<Country>> = OnceLock::new();

/// The dataset bundled with the crate, parsed once on first use.
///
/// The embedded asset is covered by the crate's tests, so a parse failure
/// here is a packaging defect rather than a runtime condition.
pub fn bundled() -> &'static [Country] {
    BUNDLED
        .get_or_init(|| {
            load_json(include_str!("../data/countries.json"))
                .expect("bundled countries.json is valid")
        })
        .as_slice()
}
