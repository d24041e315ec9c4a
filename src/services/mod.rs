//! Dataset services.
//!
//! Loading is separated from the aggregations so the latter stay pure
//! functions over an in-memory `Dataset`.

pub mod aggregation;
pub mod loader;
