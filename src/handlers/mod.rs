//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, shared state)
//! 2. Runs the matching aggregation over the in-memory dataset
//! 3. Returns HTTP response (JSON or HTML, status code)

/// Chart data endpoints
pub mod charts;
/// Dataset inspection endpoints
pub mod dataset;
/// Health and welcome endpoints
pub mod health;
/// Homepage
pub mod page;
