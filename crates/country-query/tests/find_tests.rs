//! Scenario tests against the bundled dataset, one block per shape kind.

use country_query::{CountryQuery, FindResult};

fn q() -> CountryQuery<'static> {
    CountryQuery::bundled()
}

fn single_cca3(result: FindResult<'_>) -> String {
    match result {
        FindResult::Single(country) => country.cca3.clone(),
        other => panic!("expected a single record, got {other:?}"),
    }
}

fn multiple_cca2(result: FindResult<'_>) -> Vec<String> {
    match result {
        FindResult::Multiple(countries) => countries.iter().map(|c| c.cca2.clone()).collect(),
        other => panic!("expected multiple records, got {other:?}"),
    }
}

#[test]
fn unique_string_properties_return_single() {
    let countries = q();
    assert_eq!(single_cca3(countries.find("cca2", "AW")), "ABW");
    assert_eq!(single_cca3(countries.find("ccn3", "533")), "ABW");
    assert_eq!(single_cca3(countries.find("cca3", "ABW")), "ABW");
    assert_eq!(single_cca3(countries.find("capital", "Oranjestad")), "ABW");
    assert_eq!(single_cca3(countries.find("demonym", "Aruban")), "ABW");
    assert_eq!(single_cca3(countries.find("cca2", "AT")), "AUT");
}

#[test]
fn shared_string_properties_return_multiple_in_dataset_order() {
    let countries = q();
    let northern = multiple_cca2(countries.find("subregion", "Northern Europe"));
    assert_eq!(northern, ["GB", "GG", "IM", "JE"]);

    let channel = multiple_cca2(countries.find("demonym", "Channel Islander"));
    assert_eq!(channel, ["GG", "JE"]);
}

#[test]
fn unique_array_properties_return_single() {
    let countries = q();
    assert_eq!(single_cca3(countries.find("altSpellings", "AW")), "ABW");
    assert_eq!(single_cca3(countries.find("currency", "AWG")), "ABW");
    assert_eq!(single_cca3(countries.find("tld", ".aw")), "ABW");
    assert_eq!(single_cca3(countries.find("altSpellings", "Osterreich")), "AUT");
    assert_eq!(single_cca3(countries.find("callingCode", "297")), "ABW");
}

#[test]
fn shared_array_properties_return_multiple() {
    let countries = q();
    let gbp = countries.find("currency", "GBP");
    assert_eq!(gbp.count(), 5);
    let codes = multiple_cca2(gbp);
    assert_eq!(codes, ["GB", "GG", "IM", "JE", "SH"]);

    // Everything bordering Austria, in dataset order.
    let neighbours = multiple_cca2(countries.find("borders", "AUT"));
    assert_eq!(neighbours, ["CZ", "DE", "IT"]);
}

#[test]
fn nested_string_properties_return_single() {
    let countries = q();
    assert_eq!(single_cca3(countries.find("name.common", "Aruba")), "ABW");
    assert_eq!(single_cca3(countries.find("name.official", "Aruba")), "ABW");
    assert_eq!(
        single_cca3(countries.find("name.official", "Republic of Austria")),
        "AUT"
    );
}

#[test]
fn lang_keyed_names_match_official_or_common() {
    let countries = q();
    assert_eq!(single_cca3(countries.find("name.native", "Aruba")), "ABW");
    assert_eq!(
        single_cca3(countries.find("name.native", "\u{d6}sterreich")),
        "AUT"
    );
    assert_eq!(single_cca3(countries.find("translations", "Aruba")), "ABW");
    assert_eq!(
        single_cca3(countries.find("translations", "Australie")),
        "AUS"
    );
    // "Bailliage de Guernesey" is both a native and a translated name.
    assert_eq!(
        single_cca3(countries.find("translations", "Bailliage de Guernesey")),
        "GGY"
    );
}

#[test]
fn language_map_matches_on_values() {
    let countries = q();
    assert_eq!(single_cca3(countries.find("languages", "Galician")), "ESP");
    assert_eq!(single_cca3(countries.find("languages", "Czech")), "CZE");

    let bavarian = countries.find("languages", "Austro-Bavarian German");
    assert_eq!(bavarian.count(), 2);
    assert_eq!(multiple_cca2(bavarian), ["AT", "IT"]);
}

#[test]
fn string_matching_is_case_insensitive() {
    let countries = q();
    assert_eq!(countries.find("cca2", "aw"), countries.find("cca2", "AW"));
    assert_eq!(single_cca3(countries.find("cca2", "aw")), "ABW");
    assert_eq!(single_cca3(countries.find("capital", "ORANJESTAD")), "ABW");
    assert_eq!(single_cca3(countries.find("name.common", "aruba")), "ABW");
    assert_eq!(single_cca3(countries.find("currency", "awg")), "ABW");
    assert_eq!(
        single_cca3(countries.find("languages", "galician")),
        "ESP"
    );
    // Case folding is Unicode-aware, not ASCII-only.
    assert_eq!(
        single_cca3(countries.find("name.native", "\u{f6}STERREICH")),
        "AUT"
    );
}

#[test]
fn zero_matches_return_not_found() {
    let countries = q();
    for (property, value) in [
        ("cca2", "XX"),
        ("ccn3", "000"),
        ("cca3", "XXX"),
        ("capital", "XXXXX"),
        ("demonym", "XXXXXXX"),
        ("translations", "XXXXXXX"),
    ] {
        assert!(
            countries.find(property, value).is_not_found(),
            "{property}={value} should not match"
        );
    }
}

#[test]
fn unknown_properties_return_not_found() {
    let countries = q();
    assert!(countries.find("cant-find-me", "XX").is_not_found());
    assert!(countries.find("", "XX").is_not_found());
    assert!(countries.find("name", "Aruba").is_not_found());
}

#[test]
fn booleans_and_numbers_compare_natively() {
    let countries = q();

    let landlocked = countries.find("landlocked", true);
    assert_eq!(multiple_cca2(landlocked), ["AT", "CZ"]);

    // The string rendering of a boolean or number never matches.
    assert!(countries.find("landlocked", "true").is_not_found());
    assert!(countries.find("area", "180").is_not_found());

    assert_eq!(single_cca3(countries.find("area", 180.0)), "ABW");
    assert_eq!(single_cca3(countries.find("latlng", 12.5)), "ABW");
    assert!(countries.find("latlng", 12.6).is_not_found());
}

#[test]
fn relevance_stays_an_opaque_string() {
    let countries = q();
    let half = countries.find("relevance", "0.5");
    assert_eq!(multiple_cca2(half), ["GG", "IM", "JE"]);
    // Numeric 0.5 does not match the string field.
    assert!(countries.find("relevance", 0.5).is_not_found());
}
