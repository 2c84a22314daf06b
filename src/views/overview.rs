//! The landing page's platform metrics and the row-level feed consumed by the
//! map layer.

use itertools::Itertools;

use super::{Summary, group_thousands};
use crate::{lookup, record::Restaurant};

/// Headline counters: restaurants, countries, cities, votes, cuisines.
pub fn platform_metrics(rows: &[Restaurant]) -> Summary {
    let restaurants = rows
        .iter()
        .map(|r| r.restaurant_name.as_str())
        .unique()
        .count();
    let countries = rows.iter().map(|r| r.country.as_str()).unique().count();
    let cities = rows.iter().map(|r| r.city.as_str()).unique().count();
    let votes: i64 = rows.iter().map(|r| r.votes).sum();
    let cuisines = rows.iter().map(|r| r.main_cuisine.as_str()).unique().count();

    Summary::new(
        "Platform metrics",
        ["metric", "value"],
        vec![
            vec!["restaurants".to_string(), restaurants.to_string()],
            vec!["countries".to_string(), countries.to_string()],
            vec!["cities".to_string(), cities.to_string()],
            vec!["votes".to_string(), group_thousands(votes)],
            vec!["cuisines".to_string(), cuisines.to_string()],
        ],
    )
}

/// One marker per restaurant: coordinates plus the popup fields and the
/// price-tier marker color.
pub fn map_points(rows: &[Restaurant]) -> Summary {
    Summary::new(
        "Restaurant map points",
        [
            "latitude",
            "longitude",
            "restaurant_name",
            "main_cuisine",
            "cost_for_two",
            "currency",
            "aggregate_rating",
            "rating_color",
            "price_type",
            "marker_color",
        ],
        rows.iter()
            .map(|r| {
                vec![
                    r.latitude.to_string(),
                    r.longitude.to_string(),
                    r.restaurant_name.clone(),
                    r.main_cuisine.clone(),
                    r.average_cost_for_two.normalize().to_string(),
                    r.currency.clone(),
                    r.aggregate_rating.to_string(),
                    lookup::rating_color_name(&r.rating_color)
                        .unwrap_or(r.rating_color.as_str())
                        .to_string(),
                    r.price_type.to_string(),
                    lookup::price_marker_color(r.price_type).to_string(),
                ]
            })
            .collect(),
    )
}
