//! City rankings: restaurant counts overall and by rating band, and cuisine
//! variety. All group by (city, country) so same-named cities in different
//! countries stay separate.

use itertools::Itertools;

use super::{Summary, grouped, take_top};
use crate::record::Restaurant;

/// Head size for the rating-band views, matching the dashboard's fixed top-7.
pub const RATING_BAND_LIMIT: usize = 7;

const HIGH_RATING_FLOOR: f64 = 4.0;
const LOW_RATING_CEILING: f64 = 2.5;

/// Top-N cities by distinct registered restaurants.
pub fn top_restaurant_cities(rows: &[Restaurant], top: usize) -> Summary {
    let ranked = ranked_restaurant_counts(rows.iter(), top);
    Summary::new(
        "Top cities by registered restaurants",
        ["city", "country", "restaurants"],
        ranked,
    )
}

/// Top-7 cities counting only restaurants rated above 4.0.
pub fn high_rated_cities(rows: &[Restaurant]) -> Summary {
    let above = rows.iter().filter(|r| r.aggregate_rating > HIGH_RATING_FLOOR);
    let ranked = ranked_restaurant_counts(above, RATING_BAND_LIMIT);
    Summary::new(
        "Top cities with restaurants rated above 4.0",
        ["city", "country", "restaurants"],
        ranked,
    )
}

/// Top-7 cities counting only restaurants rated below 2.5.
pub fn low_rated_cities(rows: &[Restaurant]) -> Summary {
    let below = rows.iter().filter(|r| r.aggregate_rating < LOW_RATING_CEILING);
    let ranked = ranked_restaurant_counts(below, RATING_BAND_LIMIT);
    Summary::new(
        "Top cities with restaurants rated below 2.5",
        ["city", "country", "restaurants"],
        ranked,
    )
}

/// Top-N cities by distinct cuisine lists on offer.
pub fn cuisine_variety_cities(rows: &[Restaurant], top: usize) -> Summary {
    let mut counts = grouped(rows, |r| (r.city.clone(), r.country.clone()))
        .into_iter()
        .map(|((city, country), members)| {
            let distinct = members.iter().map(|r| r.cuisines.as_str()).unique().count();
            (city, country, distinct)
        })
        .collect::<Vec<_>>();
    counts.sort_by(|a, b| b.2.cmp(&a.2));
    take_top(&mut counts, top);
    Summary::new(
        "Top cities by distinct cuisines",
        ["city", "country", "cuisines"],
        render(counts),
    )
}

fn ranked_restaurant_counts<'a, I>(rows: I, top: usize) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let mut counts = grouped(rows, |r| (r.city.clone(), r.country.clone()))
        .into_iter()
        .map(|((city, country), members)| {
            let distinct = members
                .iter()
                .map(|r| r.restaurant_id)
                .unique()
                .count();
            (city, country, distinct)
        })
        .collect::<Vec<_>>();
    counts.sort_by(|a, b| b.2.cmp(&a.2));
    take_top(&mut counts, top);
    render(counts)
}

fn render(counts: Vec<(String, String, usize)>) -> Vec<Vec<String>> {
    counts
        .into_iter()
        .map(|(city, country, count)| vec![city, country, count.to_string()])
        .collect()
}
