//! The single canonical data pipeline.
//!
//! Every command runs the same sequence once per invocation:
//! load raw rows → scrub sentinel/null rows → bind headers → typed parse with
//! enrichment → remove the cost outlier. The dashboard this replaces duplicated
//! the sequence per page; here [`load`] is the one source of truth.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::{
    clean, io_utils, outlier,
    record::{ColumnLayout, Restaurant},
};

#[derive(Debug, Default, Clone)]
pub struct PipelineOptions {
    pub delimiter: Option<u8>,
    pub input_encoding: Option<String>,
}

/// Reads, cleans, and enriches the dataset at `input`.
pub fn load(input: &Path, options: &PipelineOptions) -> Result<Vec<Restaurant>> {
    let delimiter = io_utils::resolve_input_delimiter(input, options.delimiter);
    let encoding = io_utils::resolve_encoding(options.input_encoding.as_deref())?;

    let mut reader = io_utils::open_csv_reader_from_path(input, delimiter)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)?;

    let mut raw_rows = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        raw_rows.push(io_utils::decode_record(&record, encoding)?);
    }
    info!("Loaded {} row(s) from {}", raw_rows.len(), input.display());

    build(&headers, raw_rows)
}

/// Runs the pipeline over rows already in memory.
pub fn build(headers: &[String], raw_rows: Vec<Vec<String>>) -> Result<Vec<Restaurant>> {
    let (clean_rows, dropped) = clean::scrub_rows(raw_rows);
    if dropped > 0 {
        info!("Dropped {dropped} row(s) containing missing-value cells");
    }

    let layout = ColumnLayout::resolve(headers)?;
    let mut rows = Vec::with_capacity(clean_rows.len());
    for (index, raw) in clean_rows.iter().enumerate() {
        let row = layout
            .parse_row(raw)
            .with_context(|| format!("Parsing record {}", index + 1))?;
        rows.push(row);
    }

    let removed = outlier::remove_cost_outlier(&mut rows)?;
    info!(
        "Removed cost outlier '{}' in {} ({} {})",
        removed.restaurant_name,
        removed.city,
        removed.average_cost_for_two.normalize(),
        removed.currency
    );
    Ok(rows)
}
