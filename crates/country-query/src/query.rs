//! The convenience layer: a dataset handle with one forwarding method per
//! schema entry.
//!
//! Every `by_*` method is mechanically generated and is required to behave
//! identically to calling [`CountryQuery::find`] with the same fixed
//! property name; the crate's property tests pin that equivalence.

use crate::country::Country;
use crate::dataset;
use crate::engine::{self, FindResult};
use crate::value::SearchValue;

/// A read-only handle over an ordered country dataset.
#[derive(Debug, Clone, Copy)]
pub struct CountryQuery<'a> {
    countries: &'a [Country],
}

macro_rules! find_by {
    ($(#[$meta:meta])* $fn_name:ident => $prop:literal) => {
        $(#[$meta])*
        pub fn $fn_name(&self, value: impl Into<SearchValue>) -> FindResult<'a> {
            self.find($prop, value)
        }
    };
}

impl<'a> CountryQuery<'a> {
    /// Wrap a caller-supplied dataset. Record order is the tie-break order
    /// for multi-match results.
    pub fn new(countries: &'a [Country]) -> CountryQuery<'a> {
        CountryQuery { countries }
    }

    /// The dataset these queries run against.
    pub fn countries(&self) -> &'a [Country] {
        self.countries
    }

    /// Find the country record(s) whose `property` equals `value`.
    pub fn find(&self, property: &str, value: impl Into<SearchValue>) -> FindResult<'a> {
        engine::find(self.countries, property, &value.into())
    }

    find_by!(
        /// Find by top-level domain (e.g. `".aw"`).
        by_tld => "tld"
    );
    find_by!(
        /// Find by ISO 4217 currency code.
        by_currency => "currency"
    );
    find_by!(by_calling_code => "callingCode");
    find_by!(by_alt_spelling => "altSpellings");
    find_by!(by_latlng => "latlng");
    find_by!(
        /// Find by bordering-country code (cca3).
        by_border => "borders"
    );
    find_by!(by_name_common => "name.common");
    find_by!(by_name_official => "name.official");
    find_by!(
        /// Find by any native official or common name.
        by_native_name => "name.native"
    );
    find_by!(
        /// Find by any translated official or common name.
        by_translation => "translations"
    );
    find_by!(
        /// Find by language name (e.g. `"Papiamento"`).
        by_language => "languages"
    );
    find_by!(by_cca2 => "cca2");
    find_by!(by_ccn3 => "ccn3");
    find_by!(by_cca3 => "cca3");
    find_by!(by_capital => "capital");
    find_by!(by_relevance => "relevance");
    find_by!(by_region => "region");
    find_by!(by_subregion => "subregion");
    find_by!(by_demonym => "demonym");
    find_by!(by_landlocked => "landlocked");
    find_by!(by_area => "area");
}

impl CountryQuery<'static> {
    /// A handle over the dataset bundled with the crate.
    pub fn bundled() -> CountryQuery<'static> {
        CountryQuery {
            countries: dataset::bundled(),
        }
    }
}
