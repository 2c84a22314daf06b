//! Cost outlier removal.
//!
//! The working table always sheds exactly one row: the restaurant with the
//! highest dollar-normalized cost. Ties keep the earliest row, so removal is
//! deterministic for a given input order.

use anyhow::{Result, bail};

use crate::record::Restaurant;

/// Removes and returns the row with the maximum `avg_cost_for_two_dol`.
///
/// Fails when the table is empty; the pipeline cannot proceed without at least
/// one row to compare.
pub fn remove_cost_outlier(rows: &mut Vec<Restaurant>) -> Result<Restaurant> {
    if rows.is_empty() {
        bail!("cannot remove the cost outlier from an empty table");
    }
    let mut max_index = 0;
    for (index, row) in rows.iter().enumerate() {
        if row.avg_cost_for_two_dol > rows[max_index].avg_cost_for_two_dol {
            max_index = index;
        }
    }
    Ok(rows.remove(max_index))
}
