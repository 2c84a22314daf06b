//! Per-row derivations: price tier bucketing, dollar normalization, and primary
//! cuisine extraction. Each is a pure mapping over a single record; the country
//! name derivation lives with the other fixed tables in [`crate::lookup`].

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::lookup::{self, LookupError};

/// Coarse bucketing of the numeric `price_range` column.
///
/// Ranges 1-3 map to the first three tiers; everything else, including values
/// above 4, falls through to `Gourmet`. The catch-all mirrors the dashboard's
/// historical behavior and is deliberate: no bounds validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum PriceTier {
    Cheap,
    Normal,
    Expensive,
    Gourmet,
}

impl PriceTier {
    pub fn from_range(price_range: i64) -> Self {
        match price_range {
            1 => PriceTier::Cheap,
            2 => PriceTier::Normal,
            3 => PriceTier::Expensive,
            _ => PriceTier::Gourmet,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriceTier::Cheap => "cheap",
            PriceTier::Normal => "normal",
            PriceTier::Expensive => "expensive",
            PriceTier::Gourmet => "gourmet",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a listed cost into US dollars, rounded to two decimal places.
pub fn cost_in_dollars(cost: Decimal, currency: &str) -> Result<Decimal, LookupError> {
    let rate = lookup::exchange_rate(currency)?;
    Ok((cost / rate).round_dp(2))
}

/// First entry of the comma-separated cuisine list, taken verbatim.
///
/// No trimming: a leading space after the first comma belongs to the *second*
/// token and never reaches the result, and the first token is passed through
/// exactly as listed.
pub fn primary_cuisine(cuisines: &str) -> &str {
    cuisines.split(',').next().unwrap_or("")
}
