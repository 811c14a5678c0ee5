//! Mixed-type search values and the case-folded comparison rule.
//!
//! String values are lower-cased before comparison; numbers and booleans
//! compare by native equality, never coerced to text. A type mismatch
//! between needle and candidate is "no match", not an error.

use std::fmt;

/// A caller-supplied search needle.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl SearchValue {
    /// Lower-case the text variant once, so a `find` call folds the needle
    /// a single time instead of once per record.
    pub(crate) fn folded(&self) -> SearchValue {
        match self {
            SearchValue::Text(s) => SearchValue::Text(s.to_lowercase()),
            other => other.clone(),
        }
    }
}

impl fmt::Display for SearchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchValue::Text(s) => f.write_str(s),
            SearchValue::Number(n) => write!(f, "{n}"),
            SearchValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for SearchValue {
    fn from(s: &str) -> Self {
        SearchValue::Text(s.to_string())
    }
}

impl From<String> for SearchValue {
    fn from(s: String) -> Self {
        SearchValue::Text(s)
    }
}

impl From<f64> for SearchValue {
    fn from(n: f64) -> Self {
        SearchValue::Number(n)
    }
}

impl From<i64> for SearchValue {
    fn from(n: i64) -> Self {
        SearchValue::Number(n as f64)
    }
}

impl From<u32> for SearchValue {
    fn from(n: u32) -> Self {
        SearchValue::Number(f64::from(n))
    }
}

impl From<bool> for SearchValue {
    fn from(b: bool) -> Self {
        SearchValue::Bool(b)
    }
}

/// A borrowed view of one candidate field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Datum<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
}

/// The comparison rule for one candidate against an already-folded needle.
///
/// Text/text compares case-folded; number/number and bool/bool compare
/// natively; every cross-type pairing is false.
pub(crate) fn datum_matches(candidate: Datum<'_>, needle: &SearchValue) -> bool {
    match (candidate, needle) {
        (Datum::Text(have), SearchValue::Text(want)) => have.to_lowercase() == *want,
        (Datum::Number(have), SearchValue::Number(want)) => have == *want,
        (Datum::Bool(have), SearchValue::Bool(want)) => have == *want,
        _ => false,
    }
}

/// Text-only shorthand for map values and name pairs, which are always
/// strings in the record model.
pub(crate) fn text_matches(candidate: &str, needle: &SearchValue) -> bool {
    datum_matches(Datum::Text(candidate), needle)
}
