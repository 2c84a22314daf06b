mod common;

use restolens::{
    filter::RowFilter,
    pipeline::{self, PipelineOptions},
    record::Restaurant,
    views::{cities, countries, cuisines, overview},
};

use common::fixture_path;

fn load_fixture() -> Vec<Restaurant> {
    pipeline::load(&fixture_path("restaurants.csv"), &PipelineOptions::default())
        .expect("pipeline")
}

#[test]
fn top_restaurant_cities_rank_with_stable_ties() {
    let rows = load_fixture();
    let summary = cities::top_restaurant_cities(&rows, 10);
    assert_eq!(summary.rows.len(), 9);
    // Seven cities tie at two restaurants each; encounter order decides.
    let ranked = summary
        .rows
        .iter()
        .map(|row| row[0].as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        ranked,
        vec![
            "New York",
            "Sao Paulo",
            "Rio de Janeiro",
            "New Delhi",
            "Jaipur",
            "London",
            "Auckland",
            "San Francisco",
            "Jakarta",
        ]
    );
    assert_eq!(summary.rows[0][2], "2");
    assert_eq!(summary.rows[8][2], "1");
}

#[test]
fn rating_band_city_views_use_the_fixed_head() {
    let rows = load_fixture();
    let high = cities::high_rated_cities(&rows);
    assert_eq!(high.rows.len(), 7);
    assert_eq!(high.rows[0][0], "New York");
    assert_eq!(high.rows[0][2], "2");

    // Harbour View's 0.0 rating puts Auckland in the low band.
    let low = cities::low_rated_cities(&rows);
    assert_eq!(low.rows.len(), 3);
    assert_eq!(low.rows[0], vec!["Jaipur", "India", "2"]);
    assert_eq!(low.rows[1], vec!["Rio de Janeiro", "Brazil", "1"]);
    assert_eq!(low.rows[2], vec!["Auckland", "New Zeland", "1"]);
}

#[test]
fn country_views_cover_every_country_without_truncation() {
    let rows = load_fixture();
    let summary = countries::restaurants_by_country(&rows);
    assert_eq!(summary.rows.len(), 6);
    assert_eq!(summary.rows[0], vec!["Brazil", "4"]);
    assert_eq!(summary.rows[1], vec!["India", "4"]);
    assert_eq!(summary.rows[2], vec!["United States of America", "3"]);
    assert_eq!(summary.rows[5], vec!["Indonesia", "1"]);
}

#[test]
fn votes_by_country_preserves_the_votes_series() {
    let rows = load_fixture();
    let summary = countries::votes_by_country(&rows);
    assert_eq!(summary.rows[0], vec!["India", "1086.50"]);
    assert_eq!(summary.rows[1], vec!["United States of America", "908.33"]);
    assert_eq!(summary.rows[2], vec!["Brazil", "673.25"]);
}

#[test]
fn cost_by_country_averages_normalized_costs() {
    let rows = load_fixture();
    let summary = countries::cost_by_country(&rows);
    assert_eq!(summary.rows[0], vec!["England", "119.86"]);
    assert_eq!(summary.rows[1], vec!["United States of America", "98.33"]);
    let brazil = summary
        .rows
        .iter()
        .find(|row| row[0] == "Brazil")
        .expect("Brazil present");
    assert_eq!(brazil[1], "22.98");
}

#[test]
fn cuisine_views_exclude_unrated_cuisines() {
    let rows = load_fixture();
    let best = cuisines::best_cuisines(&rows, 20);
    assert_eq!(best.rows[0], vec!["American", "4.50"]);
    assert!(best.rows.iter().all(|row| row[0] != "Fusion"));

    let worst = cuisines::worst_cuisines(&rows, 20);
    assert_eq!(worst.rows[0], vec!["Rajasthani", "2.10"]);
    assert!(worst.rows.iter().all(|row| row[0] != "Fusion"));
}

#[test]
fn top_restaurants_lists_full_detail_in_rating_order() {
    let rows = load_fixture();
    let summary = cuisines::top_restaurants(&rows, 3);
    assert_eq!(summary.rows.len(), 3);
    assert_eq!(summary.rows[0][1], "Spice Route");
    assert_eq!(summary.rows[1][1], "The Gourmet Grove");
    assert_eq!(summary.rows[2][1], "Mar Azul");
}

#[test]
fn overview_metrics_match_the_fixture() {
    let rows = load_fixture();
    let summary = overview::platform_metrics(&rows);
    let value = |metric: &str| {
        summary
            .rows
            .iter()
            .find(|row| row[0] == metric)
            .map(|row| row[1].clone())
            .expect("metric present")
    };
    assert_eq!(value("restaurants"), "16");
    assert_eq!(value("countries"), "6");
    assert_eq!(value("cities"), "9");
    assert_eq!(value("votes"), "12,064");
    assert_eq!(value("cuisines"), "11");
}

#[test]
fn map_points_emit_one_marker_per_row() {
    let rows = load_fixture();
    let summary = overview::map_points(&rows);
    assert_eq!(summary.rows.len(), rows.len());
    let boteco = summary
        .rows
        .iter()
        .find(|row| row[2] == "Boteco da Praia")
        .expect("Boteco present");
    assert_eq!(boteco[8], "cheap");
    assert_eq!(boteco[9], "lightgreen");
}

#[test]
fn zero_match_filters_yield_empty_summaries_everywhere() {
    let rows = load_fixture();
    let filter = RowFilter {
        countries: vec!["Qatar".to_string()],
        ..RowFilter::default()
    };
    let filtered = filter.apply(rows);
    assert!(filtered.is_empty());

    assert!(cities::top_restaurant_cities(&filtered, 10).is_empty());
    assert!(cities::high_rated_cities(&filtered).is_empty());
    assert!(cities::low_rated_cities(&filtered).is_empty());
    assert!(cities::cuisine_variety_cities(&filtered, 10).is_empty());
    assert!(countries::restaurants_by_country(&filtered).is_empty());
    assert!(countries::cities_by_country(&filtered).is_empty());
    assert!(countries::votes_by_country(&filtered).is_empty());
    assert!(countries::cost_by_country(&filtered).is_empty());
    assert!(cuisines::best_cuisines(&filtered, 10).is_empty());
    assert!(cuisines::worst_cuisines(&filtered, 10).is_empty());
    assert!(cuisines::top_restaurants(&filtered, 10).is_empty());
    assert!(overview::map_points(&filtered).is_empty());
}
