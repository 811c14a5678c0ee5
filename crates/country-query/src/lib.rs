//! country-query: property/value lookup over a fixed in-memory dataset of
//! world countries.
//!
//! The core is a dispatch-and-filter engine: a property name resolves
//! against a static schema to one of five shape kinds (array, map, scalar,
//! nested scalar, language-keyed name), the matching comparison strategy
//! scans every record, and the matches collapse into a three-variant result
//! (`NotFound | Single | Multiple`). String comparison is case-insensitive;
//! numbers and booleans compare natively.
//!
//! ```
//! use country_query::{CountryQuery, FindResult};
//!
//! let countries = CountryQuery::bundled();
//! match countries.find("cca2", "AW") {
//!     FindResult::Single(aruba) => assert_eq!(aruba.cca3, "ABW"),
//!     other => panic!("expected one record, got {other:?}"),
//! }
//! assert!(countries.by_cca2("XX").is_not_found());
//! ```
//!
//! Unknown property names are a defined outcome (`NotFound`), never an
//! error; the only fallible operation is dataset construction
//! ([`dataset::load_json`]).

pub mod country;
pub mod dataset;
pub mod engine;
pub mod query;
pub mod schema;
pub mod value;

pub use country::{Country, CountryName, NameVariant};
pub use dataset::{bundled, load_json, DatasetError};
pub use engine::{find, FindResult};
pub use query::CountryQuery;
pub use schema::{Property, Shape, ALL_PROPERTIES};
pub use value::SearchValue;
