//! Country aggregates. None of these truncate: every country present in the
//! filtered table appears, sorted descending by the metric.

use itertools::Itertools;
use rust_decimal::Decimal;

use super::{Summary, grouped, round2};
use crate::record::Restaurant;

/// Distinct registered restaurants per country.
pub fn restaurants_by_country(rows: &[Restaurant]) -> Summary {
    let mut counts = grouped(rows, |r| r.country.clone())
        .into_iter()
        .map(|(country, members)| {
            let distinct = members
                .iter()
                .map(|r| r.restaurant_id)
                .unique()
                .count();
            (country, distinct)
        })
        .collect::<Vec<_>>();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Summary::new(
        "Registered restaurants by country",
        ["country", "restaurants"],
        counts
            .into_iter()
            .map(|(country, count)| vec![country, count.to_string()])
            .collect(),
    )
}

/// Distinct registered cities per country.
pub fn cities_by_country(rows: &[Restaurant]) -> Summary {
    let mut counts = grouped(rows, |r| r.country.clone())
        .into_iter()
        .map(|(country, members)| {
            let distinct = members.iter().map(|r| r.city.as_str()).unique().count();
            (country, distinct)
        })
        .collect::<Vec<_>>();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Summary::new(
        "Registered cities by country",
        ["country", "cities"],
        counts
            .into_iter()
            .map(|(country, count)| vec![country, count.to_string()])
            .collect(),
    )
}

/// The dashboard's "average ratings by country" chart.
///
/// The metric is the mean of the `votes` column, not `aggregate_rating` — the
/// chart has always been fed this series under the "ratings" label, and the
/// computation is preserved verbatim so downstream numbers do not shift.
pub fn votes_by_country(rows: &[Restaurant]) -> Summary {
    let mut means = grouped(rows, |r| r.country.clone())
        .into_iter()
        .map(|(country, members)| {
            let total: i64 = members.iter().map(|r| r.votes).sum();
            (country, total as f64 / members.len() as f64)
        })
        .collect::<Vec<_>>();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    Summary::new(
        "Average ratings by country",
        ["country", "rating"],
        means
            .into_iter()
            .map(|(country, mean)| vec![country, format!("{:.2}", round2(mean))])
            .collect(),
    )
}

/// Mean dollar-normalized cost for two per country.
pub fn cost_by_country(rows: &[Restaurant]) -> Summary {
    let mut means = grouped(rows, |r| r.country.clone())
        .into_iter()
        .map(|(country, members)| {
            let total: Decimal = members.iter().map(|r| r.avg_cost_for_two_dol).sum();
            let mean = (total / Decimal::from(members.len())).round_dp(2);
            (country, mean)
        })
        .collect::<Vec<_>>();
    means.sort_by(|a, b| b.1.cmp(&a.1));
    Summary::new(
        "Average cost for two by country (USD)",
        ["country", "avg_cost_for_two_dol"],
        means
            .into_iter()
            .map(|(country, mean)| vec![country, mean.normalize().to_string()])
            .collect(),
    )
}
