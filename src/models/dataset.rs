//! The in-memory dataset behind every chart.

use crate::error::AppError;
use crate::models::cell::Cell;
use std::collections::HashSet;

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Cell>,
}

/// Column-major table loaded once at startup.
///
/// # Invariants
///
/// - Column names are unique
/// - Every column has the same number of values; row `i` is position `i`
///   in each column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a dataset from whole columns, checking the invariants.
    pub fn new(columns: Vec<Column>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(AppError::InvalidDataset(format!(
                    "duplicate column '{}'",
                    column.name
                )));
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.values.len();
            if let Some(bad) = columns.iter().find(|c| c.values.len() != expected) {
                return Err(AppError::InvalidDataset(format!(
                    "column '{}' has {} values, expected {}",
                    bad.name,
                    bad.values.len(),
                    expected
                )));
            }
        }

        Ok(Self { columns })
    }

    /// Build a dataset from row-major records.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, AppError> {
        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column {
                name,
                values: Vec::with_capacity(rows.len()),
            })
            .collect();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != columns.len() {
                return Err(AppError::InvalidDataset(format!(
                    "row {} has {} fields, expected {}",
                    index,
                    row.len(),
                    columns.len()
                )));
            }
            for (column, cell) in columns.iter_mut().zip(row) {
                column.values.push(cell);
            }
        }

        Self::new(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    ///
    /// # Errors
    ///
    /// `ColumnNotFound` if the dataset has no such column.
    pub fn column(&self, name: &str) -> Result<&Column, AppError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AppError::ColumnNotFound(name.to_string()))
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, values: Vec<Cell>) -> Column {
        Column {
            name: name.to_string(),
            values,
        }
    }

    #[test]
    fn from_rows_transposes_records() {
        let dataset = Dataset::from_rows(
            vec!["country".into(), "likelihood".into()],
            vec![
                vec![Cell::Text("India".into()), Cell::Integer(3)],
                vec![Cell::Text("Chile".into()), Cell::Null],
            ],
        )
        .unwrap();

        assert_eq!(dataset.row_count(), 2);
        let likelihood = dataset.column("likelihood").unwrap();
        assert_eq!(likelihood.values, vec![Cell::Integer(3), Cell::Null]);
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = Dataset::from_rows(
            vec!["a".into(), "b".into()],
            vec![vec![Cell::Integer(1)]],
        );
        assert!(matches!(result, Err(AppError::InvalidDataset(_))));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = Dataset::new(vec![column("a", vec![]), column("a", vec![])]);
        assert!(matches!(result, Err(AppError::InvalidDataset(_))));
    }

    #[test]
    fn rejects_uneven_columns() {
        let result = Dataset::new(vec![
            column("a", vec![Cell::Null]),
            column("b", vec![]),
        ]);
        assert!(matches!(result, Err(AppError::InvalidDataset(_))));
    }

    #[test]
    fn unknown_column_is_reported() {
        let dataset = Dataset::empty();
        assert!(dataset.is_empty());
        assert_eq!(dataset.row_count(), 0);
        match dataset.column("country") {
            Err(AppError::ColumnNotFound(name)) => assert_eq!(name, "country"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
