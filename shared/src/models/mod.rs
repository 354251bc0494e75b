//! Data models
//!
//! Shared between the HTTP client and the floor plan UI. Tables arrive from
//! the remote service as JSON and are replaced wholesale on every fetch.

pub mod floor_table;

// Re-exports
pub use floor_table::*;
