//! Climate Dashboard - Main Application Entry Point
//!
//! Serves a homepage with four chart panels (bar, constrained bar, histogram, line)
//! and the JSON API that computes the data behind them from a tabular insights dataset.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Dataset**: loaded once from PostgreSQL (sqlx) or a CSV file, then held in memory
//! - **Format**: HTML homepage, JSON requests/responses for the API
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Connect to the database, if one backs the dataset
//! 3. Load the dataset (falls back to an empty dataset on failure)
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod services;
mod state;
mod views;

use config::DatasetSource;
use models::dataset::Dataset;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let source = config.dataset_source();

    let pool = match &source {
        DatasetSource::Database { url, .. } => match db::create_pool(url).await {
            Ok(pool) => {
                tracing::info!("Database pool created");
                Some(pool)
            }
            Err(e) => {
                tracing::error!("Error connecting to database: {}", e);
                None
            }
        },
        _ => None,
    };

    // Load failures leave an empty dataset; the homepage is still served
    let dataset = match services::loader::load_dataset(&source, pool.as_ref()).await {
        Ok(dataset) => {
            if dataset.is_empty() {
                tracing::warn!("No dataset loaded; chart endpoints will report missing columns");
            }
            tracing::info!(
                "Dataset loaded: {} columns, {} rows",
                dataset.columns().len(),
                dataset.row_count()
            );
            dataset
        }
        Err(e) => {
            tracing::error!("Error loading dataset: {}", e);
            Dataset::empty()
        }
    };

    let database_configured = matches!(source, DatasetSource::Database { .. });
    let app = routes::build_router(AppState::new(dataset, pool, database_configured));

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
