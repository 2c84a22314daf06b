//! Fixed lookup tables carried by the dataset: country codes, currency exchange
//! rates, rating color codes, and price-tier marker colors.
//!
//! All tables are immutable and finite. Country and currency lookups are partial
//! by design: a code outside the documented set is a data error, not something to
//! paper over with a default.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::enrich::PriceTier;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown country code {0}")]
    UnknownCountryCode(u16),
    #[error("unknown currency label '{0}'")]
    UnknownCurrency(String),
}

/// Resolves one of the 15 documented country codes to its display name.
///
/// Spellings ("New Zeland", "Singapure") match the dataset's own labels and are
/// kept verbatim so filters round-trip against the raw data.
pub fn country_name(code: u16) -> Result<&'static str, LookupError> {
    match code {
        1 => Ok("India"),
        14 => Ok("Australia"),
        30 => Ok("Brazil"),
        37 => Ok("Canada"),
        94 => Ok("Indonesia"),
        148 => Ok("New Zeland"),
        162 => Ok("Philippines"),
        166 => Ok("Qatar"),
        184 => Ok("Singapure"),
        189 => Ok("South Africa"),
        191 => Ok("Sri Lanka"),
        208 => Ok("Turkey"),
        214 => Ok("United Arab Emirates"),
        215 => Ok("England"),
        216 => Ok("United States of America"),
        other => Err(LookupError::UnknownCountryCode(other)),
    }
}

/// Units of the listed currency per US dollar, as fixed-point values.
pub fn exchange_rate(currency: &str) -> Result<Decimal, LookupError> {
    let rate = match currency {
        "Dollar($)" => Decimal::ONE,
        "Brazilian Real(R$)" => Decimal::new(495, 2),
        "Indonesian Rupiah(IDR)" => Decimal::new(14_300, 0),
        "Sri Lankan Rupee(LKR)" => Decimal::new(200, 0),
        "Botswana Pula(P)" => Decimal::new(11, 0),
        "Indian Rupees(Rs.)" => Decimal::new(75, 0),
        "Rand(R)" => Decimal::new(15, 0),
        "Qatari Rial(QR)" => Decimal::new(364, 2),
        "Emirati Diram(AED)" => Decimal::new(367, 2),
        "Turkish Lira(TL)" => Decimal::new(85, 1),
        "Pounds(\u{a3})" => Decimal::new(73, 2),
        "NewZealand($)" => Decimal::new(14, 1),
        other => return Err(LookupError::UnknownCurrency(other.to_string())),
    };
    Ok(rate)
}

/// Maps the dataset's `rating_color` hex code to a display color name.
///
/// Unlike the country and currency tables this one is advisory: codes outside
/// the set simply have no name and callers fall back to the raw hex.
pub fn rating_color_name(code: &str) -> Option<&'static str> {
    match code {
        "3F7E00" => Some("darkgreen"),
        "5BA829" => Some("green"),
        "9ACD32" => Some("lightgreen"),
        "CDD614" => Some("orange"),
        "FFBA00" => Some("red"),
        "CBCBC8" | "FF7800" => Some("darkred"),
        _ => None,
    }
}

/// Marker color used by the map layer for each price tier.
pub fn price_marker_color(tier: PriceTier) -> &'static str {
    match tier {
        PriceTier::Cheap => "lightgreen",
        PriceTier::Normal => "blue",
        PriceTier::Expensive => "orange",
        PriceTier::Gourmet => "darkred",
    }
}
