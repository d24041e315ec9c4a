//! Chart aggregations over the in-memory dataset.
//!
//! Every function here is pure: it reads a `&Dataset` and returns JSON
//! ready to be sent to a chart. Results are insertion-ordered objects
//! (serde_json is built with `preserve_order`), so the order computed here
//! is the order the client sees.
//!
//! # Chart mapping
//!
//! - Bar chart → [`value_counts`]
//! - Constrained bar chart → [`constrained_values`]
//! - Histogram → [`grouped_counts`]
//! - Line chart → [`ordered_counts`]

use crate::error::AppError;
use crate::models::cell::CellKey;
use crate::models::dataset::Dataset;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Maximum number of entries any chart aggregation returns.
pub const TOP_N: usize = 10;

/// The whole dataset as `{ column: { "<row index>": value } }`.
pub fn table_json(dataset: &Dataset) -> Map<String, Value> {
    dataset
        .columns()
        .iter()
        .map(|column| {
            let values: Map<String, Value> = column
                .values
                .iter()
                .enumerate()
                .map(|(index, cell)| (index.to_string(), cell.to_json()))
                .collect();
            (column.name.clone(), Value::Object(values))
        })
        .collect()
}

/// Column names in dataset order.
pub fn column_names(dataset: &Dataset) -> Vec<String> {
    dataset.columns().iter().map(|c| c.name.clone()).collect()
}

/// Occurrences of each non-null value of `column`, most frequent first.
///
/// Ties keep the order in which the values first appear. At most
/// [`TOP_N`] entries are returned.
pub fn value_counts(dataset: &Dataset, column: &str) -> Result<Map<String, Value>, AppError> {
    let column = dataset.column(column)?;

    let mut positions: BTreeMap<CellKey<'_>, usize> = BTreeMap::new();
    let mut counts: Vec<(CellKey<'_>, usize)> = Vec::new();

    for key in column.values.iter().filter_map(|cell| cell.key()) {
        match positions.get(&key) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }

    // stable: equal counts stay in first-appearance order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(counts
        .into_iter()
        .take(TOP_N)
        .map(|(key, count)| (key.cell().key_string(), Value::from(count)))
        .collect())
}

/// Values of `value_column` for the first [`TOP_N`] rows whose
/// `filter_column` equals `constraint`, keyed by row index.
pub fn constrained_values(
    dataset: &Dataset,
    filter_column: &str,
    constraint: &Value,
    value_column: &str,
) -> Result<Map<String, Value>, AppError> {
    let filter = dataset.column(filter_column)?;
    let values = dataset.column(value_column)?;

    Ok(filter
        .values
        .iter()
        .zip(&values.values)
        .enumerate()
        .filter(|(_, (cell, _))| cell.matches(constraint))
        .take(TOP_N)
        .map(|(index, (_, value))| (index.to_string(), value.to_json()))
        .collect())
}

/// Cross-tabulated row counts of two columns.
///
/// Returns `{ value_column_key: { group_key: count | null } }`:
///
/// - outer keys are every distinct non-null value of `value_column`, ascending
/// - inner keys are the [`TOP_N`] values of `group_column` with the most rows,
///   in descending order of total (ties in ascending key order)
/// - a combination that never occurs is `null`
///
/// Rows where either column is null are ignored.
pub fn grouped_counts(
    dataset: &Dataset,
    group_column: &str,
    value_column: &str,
) -> Result<Map<String, Value>, AppError> {
    let groups = dataset.column(group_column)?;
    let values = dataset.column(value_column)?;

    let mut table: BTreeMap<CellKey<'_>, BTreeMap<CellKey<'_>, usize>> = BTreeMap::new();
    let mut value_keys: BTreeSet<CellKey<'_>> = BTreeSet::new();

    for (group, value) in groups.values.iter().zip(&values.values) {
        let (Some(group), Some(value)) = (group.key(), value.key()) else {
            continue;
        };
        value_keys.insert(value);
        *table.entry(group).or_default().entry(value).or_insert(0) += 1;
    }

    let mut ranked: Vec<(CellKey<'_>, usize)> = table
        .iter()
        .map(|(group, row)| (*group, row.values().sum()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_N);

    Ok(value_keys
        .into_iter()
        .map(|value| {
            let column: Map<String, Value> = ranked
                .iter()
                .map(|(group, _)| {
                    let count = table
                        .get(group)
                        .and_then(|row| row.get(&value))
                        .map_or(Value::Null, |&n| Value::from(n));
                    (group.cell().key_string(), count)
                })
                .collect();
            (value.cell().key_string(), Value::Object(column))
        })
        .collect())
}

/// Row counts per distinct non-null value of `column`, in ascending key
/// order, limited to the first [`TOP_N`] keys.
pub fn ordered_counts(dataset: &Dataset, column: &str) -> Result<Map<String, Value>, AppError> {
    let column = dataset.column(column)?;

    let mut counts: BTreeMap<CellKey<'_>, usize> = BTreeMap::new();
    for key in column.values.iter().filter_map(|cell| cell.key()) {
        *counts.entry(key).or_insert(0) += 1;
    }

    Ok(counts
        .into_iter()
        .take(TOP_N)
        .map(|(key, count)| (key.cell().key_string(), Value::from(count)))
        .collect())
}

/// Distinct values of `column` in first-appearance order.
///
/// Unlike the chart aggregations, `null` is reported (once) when present,
/// and the list is not capped.
pub fn unique_values(dataset: &Dataset, column: &str) -> Result<Vec<Value>, AppError> {
    let column = dataset.column(column)?;

    let mut seen: BTreeSet<CellKey<'_>> = BTreeSet::new();
    let mut seen_null = false;
    let mut unique = Vec::new();

    for cell in &column.values {
        let first = match cell.key() {
            Some(key) => seen.insert(key),
            None => !std::mem::replace(&mut seen_null, true),
        };
        if first {
            unique.push(cell.to_json());
        }
    }

    Ok(unique)
}
