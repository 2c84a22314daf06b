use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::enrich::PriceTier;

#[derive(Debug, Parser)]
#[command(author, version, about = "Analytics over the Fome Zero restaurant dataset", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Platform-wide metrics and per-restaurant map points
    Overview(OverviewArgs),
    /// City rankings: restaurant counts, rating bands, cuisine variety
    Cities(CitiesArgs),
    /// Country aggregates: restaurants, cities, votes, cost
    Countries(CountriesArgs),
    /// Cuisine rankings and top-rated restaurant details
    Cuisines(CuisinesArgs),
    /// List the distinct filter options present in the dataset
    Filters(FiltersArgs),
    /// Write the cleaned, enriched table to CSV
    Export(ExportArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Debug, Args)]
pub struct OverviewArgs {
    /// Input CSV file ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Restrict to these countries (repeatable)
    #[arg(long = "country", action = clap::ArgAction::Append)]
    pub countries: Vec<String>,
    /// Restrict to these price tiers (repeatable)
    #[arg(long = "price-tier", value_enum, action = clap::ArgAction::Append)]
    pub price_tiers: Vec<PriceTier>,
    /// Skip the per-restaurant map point listing
    #[arg(long = "no-map")]
    pub no_map: bool,
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CitiesArgs {
    /// Input CSV file ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Restrict to these countries (repeatable)
    #[arg(long = "country", action = clap::ArgAction::Append)]
    pub countries: Vec<String>,
    /// Restrict to these price tiers (repeatable)
    #[arg(long = "price-tier", value_enum, action = clap::ArgAction::Append)]
    pub price_tiers: Vec<PriceTier>,
    /// Number of cities in the ranked views
    #[arg(long, default_value_t = 10)]
    pub top: usize,
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CountriesArgs {
    /// Input CSV file ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Restrict to these countries (repeatable)
    #[arg(long = "country", action = clap::ArgAction::Append)]
    pub countries: Vec<String>,
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CuisinesArgs {
    /// Input CSV file ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Restrict to these countries (repeatable)
    #[arg(long = "country", action = clap::ArgAction::Append)]
    pub countries: Vec<String>,
    /// Restrict to these main cuisines (repeatable)
    #[arg(long = "cuisine", action = clap::ArgAction::Append)]
    pub cuisines: Vec<String>,
    /// Number of results per ranked view (1-20)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=20))]
    pub top: u8,
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct FiltersArgs {
    /// Input CSV file ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Input CSV file ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Output CSV file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// CSV delimiter character for reading input
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Delimiter to use for output (defaults to comma)
    #[arg(long = "output-delimiter", value_parser = parse_delimiter)]
    pub output_delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Restrict to these countries (repeatable)
    #[arg(long = "country", action = clap::ArgAction::Append)]
    pub countries: Vec<String>,
    /// Restrict to these price tiers (repeatable)
    #[arg(long = "price-tier", value_enum, action = clap::ArgAction::Append)]
    pub price_tiers: Vec<PriceTier>,
    /// Restrict to these main cuisines (repeatable)
    #[arg(long = "cuisine", action = clap::ArgAction::Append)]
    pub cuisines: Vec<String>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
