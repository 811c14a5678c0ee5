//! The property schema: which names are queryable, and what shape each one
//! has.
//!
//! This is static configuration, not something derived at runtime. The
//! source dataset has a closed set of queryable properties, so the schema is
//! an enum with a name table and a shape table; unknown names simply fail to
//! parse ([`Property::parse`] returns `None`), which the engine turns into
//! `NotFound`.

/// The structural category of a property's stored value. Each shape selects
/// one comparison strategy in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Array-valued field; matches if any element equals the needle.
    Array,
    /// Key/value map; matches if any map value equals the needle.
    Map,
    /// Scalar field compared directly (strings case-folded, numbers and
    /// booleans natively).
    ScalarString,
    /// Dotted path to a scalar string inside the record (`name.common`).
    NestedScalarString,
    /// Language-keyed object of official/common name pairs.
    LangKeyedName,
}

/// One queryable property of a country record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Tld,
    Currency,
    CallingCode,
    AltSpellings,
    Latlng,
    Borders,
    NameCommon,
    NameOfficial,
    NameNative,
    Translations,
    Languages,
    Cca2,
    Ccn3,
    Cca3,
    Capital,
    Relevance,
    Region,
    Subregion,
    Demonym,
    Landlocked,
    Area,
}

/// Every schema entry, in schema-table order. Used by the convenience layer
/// tests and the CLI help text.
pub const ALL_PROPERTIES: [Property; 21] = [
    Property::Tld,
    Property::Currency,
    Property::CallingCode,
    Property::AltSpellings,
    Property::Latlng,
    Property::Borders,
    Property::NameCommon,
    Property::NameOfficial,
    Property::NameNative,
    Property::Translations,
    Property::Languages,
    Property::Cca2,
    Property::Ccn3,
    Property::Cca3,
    Property::Capital,
    Property::Relevance,
    Property::Region,
    Property::Subregion,
    Property::Demonym,
    Property::Landlocked,
    Property::Area,
];

impl Property {
    /// Resolve a property name against the schema.
    ///
    /// Unknown names, including the empty string, are `None`; the absent /
    /// null property name of dynamically typed callers is unrepresentable
    /// here and collapses into the same outcome.
    pub fn parse(name: &str) -> Option<Property> {
        let prop = match name {
            "tld" => Property::Tld,
            "currency" => Property::Currency,
            "callingCode" => Property::CallingCode,
            "altSpellings" => Property::AltSpellings,
            "latlng" => Property::Latlng,
            "borders" => Property::Borders,
            "name.common" => Property::NameCommon,
            "name.official" => Property::NameOfficial,
            "name.native" => Property::NameNative,
            "translations" => Property::Translations,
            "languages" => Property::Languages,
            "cca2" => Property::Cca2,
            "ccn3" => Property::Ccn3,
            "cca3" => Property::Cca3,
            "capital" => Property::Capital,
            "relevance" => Property::Relevance,
            "region" => Property::Region,
            "subregion" => Property::Subregion,
            "demonym" => Property::Demonym,
            "landlocked" => Property::Landlocked,
            "area" => Property::Area,
            _ => return None,
        };
        Some(prop)
    }

    /// The schema name of this property (inverse of [`Property::parse`]).
    pub fn name(self) -> &'static str {
        match self {
            Property::Tld => "tld",
            Property::Currency => "currency",
            Property::CallingCode => "callingCode",
            Property::AltSpellings => "altSpellings",
            Property::Latlng => "latlng",
            Property::Borders => "borders",
            Property::NameCommon => "name.common",
            Property::NameOfficial => "name.official",
            Property::NameNative => "name.native",
            Property::Translations => "translations",
            Property::Languages => "languages",
            Property::Cca2 => "cca2",
            Property::Ccn3 => "ccn3",
            Property::Cca3 => "cca3",
            Property::Capital => "capital",
            Property::Relevance => "relevance",
            Property::Region => "region",
            Property::Subregion => "subregion",
            Property::Demonym => "demonym",
            Property::Landlocked => "landlocked",
            Property::Area => "area",
        }
    }

    /// The property→shape table.
    pub fn shape(self) -> Shape {
        match self {
            Property::Tld
            | Property::Currency
            | Property::CallingCode
            | Property::AltSpellings
            | Property::Latlng
            | Property::Borders => Shape::Array,
            Property::NameCommon | Property::NameOfficial => Shape::NestedScalarString,
            Property::NameNative | Property::Translations => Shape::LangKeyedName,
            Property::Languages => Shape::Map,
            Property::Cca2
            | Property::Ccn3
            | Property::Cca3
            | Property::Capital
            | Property::Relevance
            | Property::Region
            | Property::Subregion
            | Property::Demonym
            | Property::Landlocked
            | Property::Area => Shape::ScalarString,
        }
    }
}
