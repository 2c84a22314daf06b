pub mod clean;
pub mod cli;
pub mod enrich;
pub mod filter;
pub mod io_utils;
pub mod lookup;
pub mod normalize;
pub mod outlier;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod table;
pub mod views;

use std::{env, path::Path, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};

use crate::{
    cli::{Cli, Commands},
    filter::RowFilter,
    pipeline::PipelineOptions,
    record::Restaurant,
    views::{Summary, cities, countries, cuisines, overview},
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("restolens", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Overview(args) => handle_overview(&args),
        Commands::Cities(args) => handle_cities(&args),
        Commands::Countries(args) => handle_countries(&args),
        Commands::Cuisines(args) => handle_cuisines(&args),
        Commands::Filters(args) => handle_filters(&args),
        Commands::Export(args) => handle_export(&args),
    }
}

fn load_filtered(
    input: &Path,
    delimiter: Option<u8>,
    input_encoding: Option<String>,
    row_filter: &RowFilter,
) -> Result<Vec<Restaurant>> {
    let options = PipelineOptions {
        delimiter,
        input_encoding,
    };
    let rows = pipeline::load(input, &options)?;
    let filtered = row_filter.apply(rows);
    info!("{} row(s) after filters", filtered.len());
    Ok(filtered)
}

fn handle_overview(args: &cli::OverviewArgs) -> Result<()> {
    let row_filter = RowFilter {
        countries: args.countries.clone(),
        price_tiers: args.price_tiers.clone(),
        ..RowFilter::default()
    };
    let rows = load_filtered(
        &args.input,
        args.delimiter,
        args.input_encoding.clone(),
        &row_filter,
    )?;
    let mut summaries = vec![overview::platform_metrics(&rows)];
    if !args.no_map {
        summaries.push(overview::map_points(&rows));
    }
    report::emit(&summaries, args.format)
}

fn handle_cities(args: &cli::CitiesArgs) -> Result<()> {
    let row_filter = RowFilter {
        countries: args.countries.clone(),
        price_tiers: args.price_tiers.clone(),
        ..RowFilter::default()
    };
    let rows = load_filtered(
        &args.input,
        args.delimiter,
        args.input_encoding.clone(),
        &row_filter,
    )?;
    let summaries = vec![
        cities::top_restaurant_cities(&rows, args.top),
        cities::high_rated_cities(&rows),
        cities::low_rated_cities(&rows),
        cities::cuisine_variety_cities(&rows, args.top),
    ];
    report::emit(&summaries, args.format)
}

fn handle_countries(args: &cli::CountriesArgs) -> Result<()> {
    let row_filter = RowFilter {
        countries: args.countries.clone(),
        ..RowFilter::default()
    };
    let rows = load_filtered(
        &args.input,
        args.delimiter,
        args.input_encoding.clone(),
        &row_filter,
    )?;
    let summaries = vec![
        countries::restaurants_by_country(&rows),
        countries::cities_by_country(&rows),
        countries::votes_by_country(&rows),
        countries::cost_by_country(&rows),
    ];
    report::emit(&summaries, args.format)
}

fn handle_cuisines(args: &cli::CuisinesArgs) -> Result<()> {
    let row_filter = RowFilter {
        countries: args.countries.clone(),
        cuisines: args.cuisines.clone(),
        ..RowFilter::default()
    };
    let rows = load_filtered(
        &args.input,
        args.delimiter,
        args.input_encoding.clone(),
        &row_filter,
    )?;
    let top = usize::from(args.top);
    let summaries = vec![
        cuisines::top_restaurants(&rows, top),
        cuisines::best_cuisines(&rows, top),
        cuisines::worst_cuisines(&rows, top),
    ];
    report::emit(&summaries, args.format)
}

fn handle_filters(args: &cli::FiltersArgs) -> Result<()> {
    let rows = load_filtered(
        &args.input,
        args.delimiter,
        args.input_encoding.clone(),
        &RowFilter::default(),
    )?;
    let as_rows = |values: Vec<String>| values.into_iter().map(|v| vec![v]).collect();
    let summaries = vec![
        Summary::new("Countries", ["country"], as_rows(filter::distinct_countries(&rows))),
        Summary::new(
            "Price tiers",
            ["price_tier"],
            filter::distinct_price_tiers(&rows)
                .into_iter()
                .map(|tier| vec![tier.to_string()])
                .collect(),
        ),
        Summary::new("Cuisines", ["cuisine"], as_rows(filter::distinct_cuisines(&rows))),
    ];
    report::emit(&summaries, args.format)
}

fn handle_export(args: &cli::ExportArgs) -> Result<()> {
    let row_filter = RowFilter {
        countries: args.countries.clone(),
        price_tiers: args.price_tiers.clone(),
        cuisines: args.cuisines.clone(),
    };
    let rows = load_filtered(
        &args.input,
        args.delimiter,
        args.input_encoding.clone(),
        &row_filter,
    )?;
    let delimiter = args
        .output_delimiter
        .unwrap_or(io_utils::DEFAULT_CSV_DELIMITER);
    let mut writer = io_utils::open_csv_writer(args.output.as_deref(), delimiter)?;
    report::write_export(
        &mut writer,
        record::CANONICAL_HEADERS,
        rows.iter().map(Restaurant::export_cells),
    )?;
    info!("Exported {} row(s)", rows.len());
    Ok(())
}
