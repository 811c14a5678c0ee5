//! The query engine: shape dispatch, per-shape comparison strategies, and
//! the result-collapsing policy.
//!
//! A `find` call is a single pure scan over the dataset. Matches are
//! collected in dataset order, then collapsed: zero matches → `NotFound`,
//! one → `Single`, two or more → `Multiple`.

use crate::country::{Country, NameVariant};
use crate::schema::{Property, Shape};
use crate::value::{datum_matches, text_matches, Datum, SearchValue};
use std::collections::BTreeMap;

/// Outcome of a `find` call.
///
/// `NotFound` covers both "property unrecognized" and "no record matched";
/// the engine deliberately has no separate error kind for unknown
/// properties.
#[derive(Debug, Clone, PartialEq)]
pub enum FindResult<'a> {
    NotFound,
    Single(&'a Country),
    Multiple(Vec<&'a Country>),
}

impl<'a> FindResult<'a> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FindResult::NotFound)
    }

    /// Number of matched records.
    pub fn count(&self) -> usize {
        match self {
            FindResult::NotFound => 0,
            FindResult::Single(_) => 1,
            FindResult::Multiple(records) => records.len(),
        }
    }

    /// The first matched record in dataset order, if any.
    pub fn first(&self) -> Option<&'a Country> {
        match self {
            FindResult::NotFound => None,
            FindResult::Single(record) => Some(record),
            FindResult::Multiple(records) => records.first().copied(),
        }
    }

    /// Iterate matched records in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Country> + '_ {
        let records: Vec<&'a Country> = match self {
            FindResult::NotFound => Vec::new(),
            FindResult::Single(record) => vec![record],
            FindResult::Multiple(records) => records.clone(),
        };
        records.into_iter()
    }
}

/// Find the country record(s) whose `property` equals `value`.
///
/// String comparison is case-insensitive on both sides; numbers and
/// booleans compare natively. Unknown property names resolve to
/// [`FindResult::NotFound`] rather than an error.
pub fn find<'a>(countries: &'a [Country], property: &str, value: &SearchValue) -> FindResult<'a> {
    let Some(prop) = Property::parse(property) else {
        return FindResult::NotFound;
    };
    let needle = value.folded();

    let matched: Vec<&Country> = countries
        .iter()
        .filter(|country| record_matches(country, prop, &needle))
        .collect();
    collapse(matched)
}

/// The result-collapsing policy: 0 → `NotFound`, 1 → `Single`, ≥2 →
/// `Multiple` in dataset order.
fn collapse(matched: Vec<&Country>) -> FindResult<'_> {
    match matched.len() {
        0 => FindResult::NotFound,
        1 => FindResult::Single(matched[0]),
        _ => FindResult::Multiple(matched),
    }
}

fn record_matches(country: &Country, prop: Property, needle: &SearchValue) -> bool {
    match prop.shape() {
        Shape::Array => array_contains(country, prop, needle),
        Shape::ScalarString => datum_matches(scalar_datum(country, prop), needle),
        Shape::NestedScalarString => datum_matches(nested_datum(country, prop), needle),
        Shape::Map => map_value_equals(country, needle),
        Shape::LangKeyedName => lang_keyed_name_equals(country, prop, needle),
    }
}

/// Array strategy: any element equal to the needle. Text arrays fold case;
/// the coordinate array compares numerically.
fn array_contains(country: &Country, prop: Property, needle: &SearchValue) -> bool {
    let items: &[String] = match prop {
        Property::Tld => &country.tld,
        Property::Currency => &country.currency,
        Property::CallingCode => &country.calling_code,
        Property::AltSpellings => &country.alt_spellings,
        Property::Borders => &country.borders,
        Property::Latlng => {
            return country
                .latlng
                .iter()
                .any(|coord| datum_matches(Datum::Number(*coord), needle));
        }
        // The shape table routes only array properties here.
        _ => return false,
    };
    items.iter().any(|item| text_matches(item, needle))
}

/// Scalar strategy: the field's value compared under the mixed-type rule.
/// `landlocked` and `area` live in this arm and compare natively.
fn scalar_datum<'a>(country: &'a Country, prop: Property) -> Datum<'a> {
    match prop {
        Property::Cca2 => Datum::Text(&country.cca2),
        Property::Ccn3 => Datum::Text(&country.ccn3),
        Property::Cca3 => Datum::Text(&country.cca3),
        Property::Capital => Datum::Text(&country.capital),
        Property::Relevance => Datum::Text(&country.relevance),
        Property::Region => Datum::Text(&country.region),
        Property::Subregion => Datum::Text(&country.subregion),
        Property::Demonym => Datum::Text(&country.demonym),
        Property::Landlocked => Datum::Bool(country.landlocked),
        Property::Area => Datum::Number(country.area),
        // The shape table routes only scalar properties here.
        _ => Datum::Text(""),
    }
}

/// Nested-scalar strategy: the set of dotted paths is closed, so each one is
/// a fixed accessor rather than a generic deep-get.
fn nested_datum<'a>(country: &'a Country, prop: Property) -> Datum<'a> {
    match prop {
        Property::NameCommon => Datum::Text(&country.name.common),
        Property::NameOfficial => Datum::Text(&country.name.official),
        _ => Datum::Text(""),
    }
}

/// Map strategy: any value of the `languages` map equal to the needle.
fn map_value_equals(country: &Country, needle: &SearchValue) -> bool {
    country
        .languages
        .values()
        .any(|language| text_matches(language, needle))
}

/// Language-keyed-name strategy: any entry whose `official` or `common`
/// sub-field equals the needle.
fn lang_keyed_name_equals(country: &Country, prop: Property, needle: &SearchValue) -> bool {
    let names: &BTreeMap<String, NameVariant> = match prop {
        Property::NameNative => &country.name.native,
        Property::Translations => &country.translations,
        _ => return false,
    };
    names
        .values()
        .any(|pair| text_matches(&pair.official, needle) || text_matches(&pair.common, needle))
}
