//! Row cleansing.
//!
//! The raw dataset marks missing values with the literal string `"Nan "`
//! (trailing space included). Cleaning treats that sentinel and empty cells as
//! nulls and drops every row containing one, so downstream stages never see a
//! partial record. An empty result is valid.

/// The dataset's stand-in for missing data, matched exactly.
pub const INVALID_SENTINEL: &str = "Nan ";

/// Drops every row with a null cell and reports how many were removed.
pub fn scrub_rows(rows: Vec<Vec<String>>) -> (Vec<Vec<String>>, usize) {
    let before = rows.len();
    let kept = rows
        .into_iter()
        .filter(|row| !row.iter().any(|cell| is_null_cell(cell)))
        .collect::<Vec<_>>();
    let dropped = before - kept.len();
    (kept, dropped)
}

fn is_null_cell(cell: &str) -> bool {
    cell.is_empty() || cell == INVALID_SENTINEL
}
