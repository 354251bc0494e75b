//! Seatmap TUI - interactive floor plan
//!
//! Renders seating tables, lets the user pick a seat and submit a
//! reservation, and keeps the displayed list in sync with the remote table
//! service.

pub mod app;
pub mod reservation;
pub mod store;
pub mod ui;
pub mod worker;

#[cfg(test)]
mod testutil;

pub use app::App;
pub use reservation::{ReservationController, ReservationState, SelectedSeat};
pub use store::TableStore;
pub use worker::{AppEvent, StoreSnapshot, WorkerCommand};
