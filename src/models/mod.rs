//! Data models for the dataset and the API request bodies.

/// Single dataset value and its grouping order
pub mod cell;
/// Column-major dataset
pub mod dataset;
/// Chart and dataset request bodies
pub mod requests;
