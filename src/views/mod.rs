//! Server-rendered HTML documents.

/// Homepage shell with the four chart panels
pub mod homepage;
