//! Seatmap Client - HTTP client for the table / reservation service
//!
//! Provides network-based calls to the remote floor plan API, plus the
//! [`TableApi`] trait the UI layers program against.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::TableApi;
pub use reqwest::StatusCode;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared wire types for convenience
pub use shared::client::{ErrorBody, ReservationRequest, TableListResponse};
