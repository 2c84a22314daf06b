//! Summary emission: elastic tables for terminals, JSON or CSV for anything
//! downstream (the chart and map layers consume these directly).

use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use crate::{cli::OutputFormat, io_utils, table, views::Summary};

pub fn emit(summaries: &[Summary], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for (index, summary) in summaries.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("{}", summary.title);
                if summary.is_empty() {
                    println!("(no rows)");
                } else {
                    table::print_table(&summary.headers, &summary.rows);
                }
            }
        }
        OutputFormat::Json => {
            let rendered =
                serde_json::to_string_pretty(summaries).context("Serializing summaries to JSON")?;
            println!("{rendered}");
        }
        OutputFormat::Csv => {
            let mut writer = io_utils::open_csv_writer(None, io_utils::DEFAULT_CSV_DELIMITER)?;
            for (index, summary) in summaries.iter().enumerate() {
                if index > 0 {
                    // Blank record separates consecutive summaries.
                    writer.write_record([""])?;
                }
                writer.write_record(&summary.headers)?;
                for row in &summary.rows {
                    writer.write_record(row)?;
                }
            }
            writer.flush().context("Flushing CSV output")?;
        }
    }
    info!("Rendered {} summary table(s)", summaries.len());
    Ok(())
}

/// Writes the canonical enriched table as CSV to `output` (stdout when `None`).
pub fn write_export<W: Write>(
    writer: &mut csv::Writer<W>,
    headers: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) -> Result<()> {
    writer
        .write_record(headers)
        .context("Writing export header row")?;
    for row in rows {
        writer.write_record(&row).context("Writing export row")?;
    }
    writer.flush().context("Flushing export output")?;
    Ok(())
}
