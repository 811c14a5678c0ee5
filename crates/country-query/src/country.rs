//! The country record model.
//!
//! Field layout follows the world-countries dataset generation this engine
//! targets: scalar codes and descriptors, array-valued fields, a
//! language-code keyed `languages` map, and two language-keyed name objects
//! (`name.native` and `translations`). Records are deserialized once at load
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An official/common name pair, as stored under a language code in
/// `name.native` and `translations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameVariant {
    pub official: String,
    pub common: String,
}

/// The `name` object of a country record.
///
/// `native` is keyed by ISO 639-3 language code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
    #[serde(default)]
    pub native: BTreeMap<String, NameVariant>,
}

/// One immutable country record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub tld: Vec<String>,
    pub cca2: String,
    pub ccn3: String,
    pub cca3: String,
    pub currency: Vec<String>,
    #[serde(rename = "callingCode")]
    pub calling_code: Vec<String>,
    pub capital: String,
    #[serde(rename = "altSpellings")]
    pub alt_spellings: Vec<String>,
    pub relevance: String,
    pub region: String,
    pub subregion: String,
    /// Language code → language name.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// Language code → translated name pair.
    #[serde(default)]
    pub translations: BTreeMap<String, NameVariant>,
    pub latlng: Vec<f64>,
    pub demonym: String,
    pub landlocked: bool,
    pub borders: Vec<String>,
    pub area: f64,
}
