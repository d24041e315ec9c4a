//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (optional): PostgreSQL connection string holding the dataset table
/// - `DATASET_TABLE` (optional): table to load, defaults to `insights`
/// - `DATASET_PATH` (optional): CSV file to load instead of the database
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: Option<String>,

    #[serde(default = "default_table")]
    pub dataset_table: String,

    pub dataset_path: Option<String>,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

/// Default table if DATASET_TABLE environment variable is not set.
fn default_table() -> String {
    "insights".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

/// Where the dataset is read from at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Csv(String),
    Database { url: String, table: String },
    Empty,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into expected types
    /// (e.g. a non-numeric SERVER_PORT).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: dataset_path -> DATASET_PATH
        envy::from_env::<Config>()
    }

    /// Pick the dataset source. A CSV path wins over a database URL.
    pub fn dataset_source(&self) -> DatasetSource {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty(&self.dataset_path) {
            DatasetSource::Csv(path)
        } else if let Some(url) = non_empty(&self.database_url) {
            DatasetSource::Database {
                url,
                table: self.dataset_table.clone(),
            }
        } else {
            DatasetSource::Empty
        }
    }
}
