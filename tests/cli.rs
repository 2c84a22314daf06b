mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{TestWorkspace, fixture_path};

fn restolens() -> Command {
    Command::cargo_bin("restolens").expect("binary built")
}

fn fixture_arg() -> String {
    fixture_path("restaurants.csv").display().to_string()
}

#[test]
fn overview_prints_platform_metrics() {
    restolens()
        .args(["overview", "--input", &fixture_arg(), "--no-map"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform metrics"))
        .stdout(predicate::str::contains("12,064"));
}

#[test]
fn cities_lists_every_ranked_view() {
    restolens()
        .args(["cities", "--input", &fixture_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Top cities by registered restaurants",
        ))
        .stdout(predicate::str::contains("rated above 4.0"))
        .stdout(predicate::str::contains("rated below 2.5"))
        .stdout(predicate::str::contains("New York"));
}

#[test]
fn countries_reports_aggregates_per_country() {
    restolens()
        .args(["countries", "--input", &fixture_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("United States of America"))
        .stdout(predicate::str::contains("New Zeland"))
        .stdout(predicate::str::contains("1086.50"));
}

#[test]
fn cuisines_respects_the_top_limit() {
    restolens()
        .args(["cuisines", "--input", &fixture_arg(), "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spice Route"))
        .stdout(predicate::str::contains("American"))
        .stdout(predicate::str::contains("Rajasthani"));
}

#[test]
fn cuisines_rejects_out_of_range_top() {
    restolens()
        .args(["cuisines", "--input", &fixture_arg(), "--top", "21"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("21"));
}

#[test]
fn country_filter_narrows_every_view() {
    restolens()
        .args([
            "countries",
            "--input",
            &fixture_arg(),
            "--country",
            "Brazil",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brazil"))
        .stdout(predicate::str::contains("India").not());
}

#[test]
fn json_format_emits_structured_summaries() {
    restolens()
        .args([
            "overview",
            "--input",
            &fixture_arg(),
            "--no-map",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Platform metrics\""))
        .stdout(predicate::str::contains("\"rows\""));
}

#[test]
fn filters_lists_distinct_options() {
    restolens()
        .args(["filters", "--input", &fixture_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Countries"))
        .stdout(predicate::str::contains("gourmet"))
        .stdout(predicate::str::contains("Seafood"));
}

#[test]
fn export_writes_the_cleaned_table() {
    let workspace = TestWorkspace::new();
    let out = workspace.path().join("export.csv");
    restolens()
        .args([
            "export",
            "--input",
            &fixture_arg(),
            "--output",
            &out.display().to_string(),
        ])
        .assert()
        .success();
    let written = std::fs::read_to_string(&out).expect("export file");
    let mut lines = written.lines();
    let header = lines.next().expect("header row");
    assert!(header.starts_with("restaurant_id,restaurant_name,country_code"));
    // Header plus the 16 surviving rows.
    assert_eq!(lines.count(), 16);
    assert!(!written.contains("Sky Palace"));
    assert!(!written.contains("Lost Kitchen"));
}

#[test]
fn export_filters_before_writing() {
    let workspace = TestWorkspace::new();
    let out = workspace.path().join("brazil.csv");
    restolens()
        .args([
            "export",
            "--input",
            &fixture_arg(),
            "--country",
            "Brazil",
            "--output",
            &out.display().to_string(),
        ])
        .assert()
        .success();
    let written = std::fs::read_to_string(&out).expect("export file");
    assert_eq!(written.lines().count(), 5);
    assert!(written.contains("Casa do Sabor"));
}

#[test]
fn unknown_country_code_fails_with_context() {
    let workspace = TestWorkspace::new();
    let path = workspace.write(
        "bad_code.csv",
        "Restaurant ID,Restaurant Name,Country Code,City,Longitude,Latitude,Cuisines,\
         Average Cost for two,Currency,Price range,Aggregate rating,Rating color,Votes\n\
         1,Mystery,999,Nowhere,0.0,0.0,Fusion,50,Dollar($),2,3.0,5BA829,10\n",
    );
    restolens()
        .args(["overview", "--input", &path.display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown country code 999"));
}

#[test]
fn missing_input_file_fails_cleanly() {
    restolens()
        .args(["overview", "--input", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
