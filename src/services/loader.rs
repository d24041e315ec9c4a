//! Dataset loading from PostgreSQL or CSV.
//!
//! The dataset is read once at startup. Column types are taken from the
//! database when available and inferred field by field for CSV input.

use crate::config::DatasetSource;
use crate::db::DbPool;
use crate::error::AppError;
use crate::models::cell::Cell;
use crate::models::dataset::Dataset;
use sqlx::{Column as _, Executor, Row, TypeInfo, postgres::PgRow};
use std::io;
use std::path::Path;

/// Load the dataset from the configured source.
///
/// `pool` must be present for [`DatasetSource::Database`]; a missing pool
/// (e.g. the connection failed at startup) yields an error so the caller
/// can fall back to an empty dataset.
pub async fn load_dataset(
    source: &DatasetSource,
    pool: Option<&DbPool>,
) -> Result<Dataset, AppError> {
    match source {
        DatasetSource::Csv(path) => load_csv(path),
        DatasetSource::Database { table, .. } => {
            let pool = pool.ok_or_else(|| {
                AppError::InvalidDataset("no database connection available".to_string())
            })?;
            load_table(pool, table).await
        }
        DatasetSource::Empty => Ok(Dataset::empty()),
    }
}

/// Read a CSV file whose first row holds the column names.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset, AppError> {
    let file = std::fs::File::open(path.as_ref())?;
    read_csv(file)
}

/// Parse CSV data from any reader. Field types are inferred with [`Cell::infer`].
pub fn read_csv<R: io::Read>(reader: R) -> Result<Dataset, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let names: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::infer).collect());
    }

    Dataset::from_rows(names, rows)
}

/// Load every row of `table`.
///
/// # Errors
///
/// - `InvalidRequest` if `table` is not a plain SQL identifier
/// - `Database` if the query fails
pub async fn load_table(pool: &DbPool, table: &str) -> Result<Dataset, AppError> {
    validate_table_name(table)?;

    // Identifier checked above; it cannot be bound as a parameter
    let sql = format!("SELECT * FROM {table}");
    let rows: Vec<PgRow> = sqlx::query(&sql).fetch_all(pool).await?;

    let names: Vec<String> = match rows.first() {
        Some(first) => first
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect(),
        None => {
            // No row to read column metadata from; ask the server instead
            tracing::warn!("Table {} is empty", table);
            pool.describe(&sql)
                .await?
                .columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect()
        }
    };

    let records = rows
        .iter()
        .map(|row| (0..row.len()).map(|index| decode_cell(row, index)).collect())
        .collect();

    Dataset::from_rows(names, records)
}

/// Accepts `[A-Za-z_][A-Za-z0-9_]*`.
pub fn validate_table_name(table: &str) -> Result<(), AppError> {
    let mut chars = table.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidRequest(format!(
            "'{table}' is not a valid table name"
        )))
    }
}

/// Decode one field using its PostgreSQL type.
///
/// SQL NULL and types with no cell counterpart become [`Cell::Null`].
fn decode_cell(row: &PgRow, index: usize) -> Cell {
    let type_name = row.columns()[index].type_info().name();

    let decoded = match type_name {
        "INT2" => row
            .try_get::<Option<i16>, _>(index)
            .map(|v| v.map(|v| Cell::Integer(v.into()))),
        "INT4" => row
            .try_get::<Option<i32>, _>(index)
            .map(|v| v.map(|v| Cell::Integer(v.into()))),
        "INT8" => row
            .try_get::<Option<i64>, _>(index)
            .map(|v| v.map(Cell::Integer)),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)
            .map(|v| v.map(|v| Cell::Float(v.into()))),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(index)
            .map(|v| v.map(Cell::Float)),
        "BOOL" => row
            .try_get::<Option<bool>, _>(index)
            .map(|v| v.map(Cell::Bool)),
        _ => row
            .try_get::<Option<String>, _>(index)
            .map(|v| v.map(Cell::Text)),
    };

    match decoded {
        Ok(cell) => cell.unwrap_or(Cell::Null),
        Err(e) => {
            tracing::debug!("Column {} ({}) not decodable: {}", index, type_name, e);
            Cell::Null
        }
    }
}
