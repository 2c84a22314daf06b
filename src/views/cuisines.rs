//! Cuisine rankings and the top-rated restaurant detail table.

use super::{Summary, grouped, round2, take_top};
use crate::record::Restaurant;

/// Best cuisines: highest mean rating first.
pub fn best_cuisines(rows: &[Restaurant], top: usize) -> Summary {
    let mut means = cuisine_mean_ratings(rows);
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    take_top(&mut means, top);
    Summary::new(
        "Best cuisines by average rating",
        ["cuisine", "avg_rating"],
        render(means),
    )
}

/// Worst cuisines: lowest mean rating first.
pub fn worst_cuisines(rows: &[Restaurant], top: usize) -> Summary {
    let mut means = cuisine_mean_ratings(rows);
    means.sort_by(|a, b| a.1.total_cmp(&b.1));
    take_top(&mut means, top);
    Summary::new(
        "Worst cuisines by average rating",
        ["cuisine", "avg_rating"],
        render(means),
    )
}

/// Top-N restaurants by rating, full-row detail. Also feeds the "best
/// restaurants" spotlight, which is this view with N=5.
pub fn top_restaurants(rows: &[Restaurant], top: usize) -> Summary {
    let mut ranked = rows.iter().collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.aggregate_rating.total_cmp(&a.aggregate_rating));
    take_top(&mut ranked, top);
    Summary::new(
        "Top restaurants by rating",
        [
            "restaurant_id",
            "restaurant_name",
            "country",
            "city",
            "cuisines",
            "average_cost_for_two",
            "aggregate_rating",
            "votes",
        ],
        ranked
            .into_iter()
            .map(|r| {
                vec![
                    r.restaurant_id.to_string(),
                    r.restaurant_name.clone(),
                    r.country.clone(),
                    r.city.clone(),
                    r.cuisines.clone(),
                    r.average_cost_for_two.normalize().to_string(),
                    r.aggregate_rating.to_string(),
                    r.votes.to_string(),
                ]
            })
            .collect(),
    )
}

/// Mean rating per main cuisine; cuisines whose mean is not above zero are
/// dropped (all-unrated cuisines carry no signal).
fn cuisine_mean_ratings(rows: &[Restaurant]) -> Vec<(String, f64)> {
    grouped(rows, |r| r.main_cuisine.clone())
        .into_iter()
        .map(|(cuisine, members)| {
            let total: f64 = members.iter().map(|r| r.aggregate_rating).sum();
            (cuisine, total / members.len() as f64)
        })
        .filter(|(_, mean)| *mean > 0.0)
        .collect()
}

fn render(means: Vec<(String, f64)>) -> Vec<Vec<String>> {
    means
        .into_iter()
        .map(|(cuisine, mean)| vec![cuisine, format!("{:.2}", round2(mean))])
        .collect()
}
