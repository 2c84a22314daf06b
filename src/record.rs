//! Typed restaurant records and the header-to-field binding that produces them.
//!
//! [`ColumnLayout::resolve`] normalizes the raw header row to canonical names and
//! locates every required column; extra columns in the source file are ignored.
//! [`ColumnLayout::parse_row`] then converts a raw string row into a [`Restaurant`]
//! with all four enrichment derivations applied.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    enrich::{self, PriceTier},
    lookup,
    normalize::normalize_headers,
};

/// One cleaned, enriched row of the working table.
#[derive(Debug, Clone, Serialize)]
pub struct Restaurant {
    pub restaurant_id: i64,
    pub restaurant_name: String,
    pub country_code: u16,
    pub country: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub cuisines: String,
    pub main_cuisine: String,
    pub average_cost_for_two: Decimal,
    pub currency: String,
    pub avg_cost_for_two_dol: Decimal,
    pub price_range: i64,
    pub price_type: PriceTier,
    pub aggregate_rating: f64,
    pub rating_color: String,
    pub votes: i64,
}

/// Canonical headers of the enriched table, in export order.
pub const CANONICAL_HEADERS: &[&str] = &[
    "restaurant_id",
    "restaurant_name",
    "country_code",
    "country",
    "city",
    "latitude",
    "longitude",
    "cuisines",
    "main_cuisine",
    "average_cost_for_two",
    "currency",
    "avg_cost_for_two_dol",
    "price_range",
    "price_type",
    "aggregate_rating",
    "rating_color",
    "votes",
];

impl Restaurant {
    /// Cells for one export row, aligned with [`CANONICAL_HEADERS`].
    pub fn export_cells(&self) -> Vec<String> {
        vec![
            self.restaurant_id.to_string(),
            self.restaurant_name.clone(),
            self.country_code.to_string(),
            self.country.clone(),
            self.city.clone(),
            self.latitude.to_string(),
            self.longitude.to_string(),
            self.cuisines.clone(),
            self.main_cuisine.clone(),
            self.average_cost_for_two.normalize().to_string(),
            self.currency.clone(),
            self.avg_cost_for_two_dol.normalize().to_string(),
            self.price_range.to_string(),
            self.price_type.to_string(),
            self.aggregate_rating.to_string(),
            self.rating_color.clone(),
            self.votes.to_string(),
        ]
    }
}

/// Indexes of the required source columns within a raw row.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    restaurant_id: usize,
    restaurant_name: usize,
    country_code: usize,
    city: usize,
    latitude: usize,
    longitude: usize,
    cuisines: usize,
    average_cost_for_two: usize,
    currency: usize,
    price_range: usize,
    aggregate_rating: usize,
    rating_color: usize,
    votes: usize,
}

impl ColumnLayout {
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let canonical = normalize_headers(headers);
        let find = |name: &str| {
            canonical
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| anyhow!("Column '{name}' not found in header row"))
        };
        Ok(Self {
            restaurant_id: find("restaurant_id")?,
            restaurant_name: find("restaurant_name")?,
            country_code: find("country_code")?,
            city: find("city")?,
            latitude: find("latitude")?,
            longitude: find("longitude")?,
            cuisines: find("cuisines")?,
            average_cost_for_two: find("average_cost_for_two")?,
            currency: find("currency")?,
            price_range: find("price_range")?,
            aggregate_rating: find("aggregate_rating")?,
            rating_color: find("rating_color")?,
            votes: find("votes")?,
        })
    }

    pub fn parse_row(&self, raw: &[String]) -> Result<Restaurant> {
        let country_code: u16 = parse_cell(raw, self.country_code, "country_code")?;
        let country = lookup::country_name(country_code)?.to_string();

        let price_range: i64 = parse_cell(raw, self.price_range, "price_range")?;
        let price_type = PriceTier::from_range(price_range);

        let average_cost_for_two: Decimal =
            parse_cell(raw, self.average_cost_for_two, "average_cost_for_two")?;
        let currency = cell(raw, self.currency).to_string();
        let avg_cost_for_two_dol = enrich::cost_in_dollars(average_cost_for_two, &currency)?;

        let cuisines = cell(raw, self.cuisines).to_string();
        let main_cuisine = enrich::primary_cuisine(&cuisines).to_string();

        Ok(Restaurant {
            restaurant_id: parse_cell(raw, self.restaurant_id, "restaurant_id")?,
            restaurant_name: cell(raw, self.restaurant_name).to_string(),
            country_code,
            country,
            city: cell(raw, self.city).to_string(),
            latitude: parse_cell(raw, self.latitude, "latitude")?,
            longitude: parse_cell(raw, self.longitude, "longitude")?,
            cuisines,
            main_cuisine,
            average_cost_for_two,
            currency,
            avg_cost_for_two_dol,
            price_range,
            price_type,
            aggregate_rating: parse_cell(raw, self.aggregate_rating, "aggregate_rating")?,
            rating_color: cell(raw, self.rating_color).to_string(),
            votes: parse_cell(raw, self.votes, "votes")?,
        })
    }
}

fn cell(raw: &[String], index: usize) -> &str {
    raw.get(index).map(String::as_str).unwrap_or("")
}

fn parse_cell<T>(raw: &[String], index: usize, column: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let value = cell(raw, index).trim();
    value
        .parse::<T>()
        .with_context(|| format!("Failed to parse '{value}' in column '{column}'"))
}
