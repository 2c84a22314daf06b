//! Row filtering and filter option discovery.
//!
//! Mirrors the dashboard's sidebar: multi-select over countries, price tiers,
//! and main cuisines. An empty selection leaves that dimension unconstrained.
//! The distinct-value helpers produce the option lists the selections are drawn
//! from, in first-encounter order.

use itertools::Itertools;

use crate::{enrich::PriceTier, record::Restaurant};

#[derive(Debug, Default, Clone)]
pub struct RowFilter {
    pub countries: Vec<String>,
    pub price_tiers: Vec<PriceTier>,
    pub cuisines: Vec<String>,
}

impl RowFilter {
    pub fn is_unconstrained(&self) -> bool {
        self.countries.is_empty() && self.price_tiers.is_empty() && self.cuisines.is_empty()
    }

    pub fn matches(&self, row: &Restaurant) -> bool {
        (self.countries.is_empty() || self.countries.contains(&row.country))
            && (self.price_tiers.is_empty() || self.price_tiers.contains(&row.price_type))
            && (self.cuisines.is_empty() || self.cuisines.contains(&row.main_cuisine))
    }

    pub fn apply(&self, rows: Vec<Restaurant>) -> Vec<Restaurant> {
        if self.is_unconstrained() {
            return rows;
        }
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}

pub fn distinct_countries(rows: &[Restaurant]) -> Vec<String> {
    rows.iter()
        .map(|row| row.country.clone())
        .unique()
        .collect()
}

pub fn distinct_price_tiers(rows: &[Restaurant]) -> Vec<PriceTier> {
    rows.iter().map(|row| row.price_type).unique().collect()
}

pub fn distinct_cuisines(rows: &[Restaurant]) -> Vec<String> {
    rows.iter()
        .map(|row| row.main_cuisine.clone())
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_fixtures::restaurant;

    fn sample_rows() -> Vec<Restaurant> {
        vec![
            restaurant(1, "A", "Brazil", "Sao Paulo", "Brazilian", "20", 4.5, 100),
            restaurant(2, "B", "Brazil", "Rio de Janeiro", "Seafood", "25", 4.1, 80),
            restaurant(3, "C", "India", "New Delhi", "North Indian", "8", 4.8, 900),
            restaurant(4, "D", "England", "London", "British", "40", 3.9, 200),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = RowFilter::default();
        assert!(filter.is_unconstrained());
        assert_eq!(filter.apply(sample_rows()).len(), 4);
    }

    #[test]
    fn country_filter_narrows_rows() {
        let filter = RowFilter {
            countries: vec!["Brazil".to_string()],
            ..RowFilter::default()
        };
        let kept = filter.apply(sample_rows());
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.country == "Brazil"));
    }

    #[test]
    fn dimensions_combine_conjunctively() {
        let filter = RowFilter {
            countries: vec!["Brazil".to_string()],
            cuisines: vec!["Seafood".to_string()],
            ..RowFilter::default()
        };
        let kept = filter.apply(sample_rows());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].restaurant_id, 2);
    }

    #[test]
    fn zero_match_selection_yields_empty_not_error() {
        let filter = RowFilter {
            countries: vec!["Qatar".to_string()],
            ..RowFilter::default()
        };
        assert!(filter.apply(sample_rows()).is_empty());
    }

    #[test]
    fn distinct_lists_preserve_encounter_order() {
        let rows = sample_rows();
        assert_eq!(distinct_countries(&rows), vec!["Brazil", "India", "England"]);
        assert_eq!(
            distinct_cuisines(&rows),
            vec!["Brazilian", "Seafood", "North Indian", "British"]
        );
        assert_eq!(distinct_price_tiers(&rows), vec![PriceTier::Normal]);
    }
}
