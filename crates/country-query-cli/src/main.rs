//! country-query CLI
//!
//! Thin wrapper over the `country-query` engine: parse a property/value
//! pair, run one lookup, print the matches. "No match" is a defined
//! outcome (exit 0); only a dataset load failure exits nonzero.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use country_query::{dataset, CountryQuery, FindResult, SearchValue, ALL_PROPERTIES};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "country-query")]
#[command(author, version, about = "Look up country records by property/value")]
struct Cli {
    /// Schema property name (e.g. cca2, currency, name.common, languages).
    #[arg(required_unless_present = "list_properties")]
    property: Option<String>,

    /// Value to search for.
    #[arg(required_unless_present = "list_properties")]
    value: Option<String>,

    /// How to interpret the value before comparing.
    #[arg(long, value_enum, default_value = "text")]
    kind: Kind,

    /// Query a JSON dataset file instead of the bundled dataset.
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// List the queryable properties and exit.
    #[arg(long)]
    list_properties: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Text,
    Number,
    Bool,
}

fn parse_value(kind: Kind, raw: &str) -> Result<SearchValue> {
    let value = match kind {
        Kind::Text => SearchValue::from(raw),
        Kind::Number => SearchValue::Number(
            raw.parse::<f64>()
                .with_context(|| format!("`{raw}` is not a number"))?,
        ),
        Kind::Bool => SearchValue::Bool(
            raw.parse::<bool>()
                .with_context(|| format!("`{raw}` is not true/false"))?,
        ),
    };
    Ok(value)
}

fn print_record(country: &country_query::Country) {
    println!(
        "{}  {}  {}",
        country.cca2.bold(),
        country.cca3,
        country.name.common.green()
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.list_properties {
        for prop in ALL_PROPERTIES {
            println!("{}", prop.name());
        }
        return Ok(());
    }

    let owned;
    let countries = match &cli.dataset {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading dataset {}", path.display()))?;
            owned = dataset::load_json(&json)
                .with_context(|| format!("parsing dataset {}", path.display()))?;
            CountryQuery::new(&owned)
        }
        None => CountryQuery::bundled(),
    };

    let property = cli.property.context("missing property name")?;
    let raw = cli.value.context("missing search value")?;
    let value = parse_value(cli.kind, &raw)?;
    tracing::debug!(%property, %value, "running lookup");
    match countries.find(&property, value) {
        FindResult::NotFound => println!("{}", "no match".yellow()),
        FindResult::Single(country) => print_record(country),
        FindResult::Multiple(records) => {
            for country in &records {
                print_record(country);
            }
            println!("{} matches", records.len());
        }
    }
    Ok(())
}
