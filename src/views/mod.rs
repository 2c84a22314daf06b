//! Aggregation views: pure functions from the filtered table to small,
//! chart-ready summary tables.
//!
//! Shared conventions across every view:
//! - grouping preserves first-encounter order;
//! - sorts are stable, so ties keep that encounter order;
//! - truncation happens after sorting;
//! - numeric results are rounded to two decimals for display;
//! - an input with zero rows produces an empty summary, never an error.

pub mod cities;
pub mod countries;
pub mod cuisines;
pub mod overview;

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::record::Restaurant;

/// One chart-ready summary table.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Summary {
    pub fn new<const N: usize>(title: &str, headers: [&str; N], rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Groups rows by `key`, keeping groups in first-encounter order.
pub(crate) fn grouped<'a, K, F, I>(rows: I, key: F) -> Vec<(K, Vec<&'a Restaurant>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Restaurant) -> K,
    I: IntoIterator<Item = &'a Restaurant>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&Restaurant>)> = Vec::new();
    for row in rows {
        let k = key(row);
        match slots.get(&k) {
            Some(&index) => groups[index].1.push(row),
            None => {
                slots.insert(k.clone(), groups.len());
                groups.push((k, vec![row]));
            }
        }
    }
    groups
}

/// Truncates to the requested head size; zero means "keep everything".
pub(crate) fn take_top<T>(items: &mut Vec<T>, top: usize) {
    if top > 0 && items.len() > top {
        items.truncate(top);
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `12064` → `"12,064"`, matching the dashboard's vote counter.
pub(crate) fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
