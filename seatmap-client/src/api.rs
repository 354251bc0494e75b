//! Table service trait
//!
//! The seam between UI-side stores/controllers and the network. Implemented
//! by [`crate::HttpClient`] for the real service and by scripted fakes in
//! tests.

use crate::ClientResult;
use async_trait::async_trait;
use shared::client::ReservationRequest;
use shared::models::FloorTable;

/// Remote table / reservation service operations
#[async_trait]
pub trait TableApi: Send + Sync {
    /// Fetch the full table list.
    async fn list_tables(&self) -> ClientResult<Vec<FloorTable>>;

    /// Trigger server-side demo data creation. One-shot bootstrap; the
    /// response body is ignored beyond its status.
    async fn seed(&self) -> ClientResult<()>;

    /// Submit a reservation for a specific seat.
    async fn reserve(&self, request: &ReservationRequest) -> ClientResult<()>;
}
