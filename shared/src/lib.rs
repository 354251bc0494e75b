//! Shared types for Seatmap
//!
//! Common types used across multiple crates: floor plan models, the pure
//! seat-geometry layout engine, and the wire types of the reservation API.

pub mod client;
pub mod layout;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{ErrorBody, ReservationRequest, TableListResponse};
pub use layout::SeatPosition;
pub use models::{FloorTable, Seat, TableShape};
