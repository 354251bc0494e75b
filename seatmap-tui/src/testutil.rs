//! Scripted [`TableApi`] fake for store/worker tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use seatmap_client::{ClientError, ClientResult, StatusCode, TableApi};
use shared::client::ReservationRequest;
use shared::models::FloorTable;

/// In-memory table service double. Results are consumed FIFO; an exhausted
/// queue answers with an empty list / success.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    list_results: Mutex<VecDeque<ClientResult<Vec<FloorTable>>>>,
    reserve_results: Mutex<VecDeque<ClientResult<()>>>,
    reserve_seen: Mutex<Vec<ReservationRequest>>,
    list_calls: AtomicUsize,
    seed_calls: AtomicUsize,
}

impl FakeApi {
    pub fn push_list(&self, result: ClientResult<Vec<FloorTable>>) {
        self.inner.list_results.lock().unwrap().push_back(result);
    }

    pub fn push_reserve(&self, result: ClientResult<()>) {
        self.inner.reserve_results.lock().unwrap().push_back(result);
    }

    pub fn list_calls(&self) -> usize {
        self.inner.list_calls.load(Ordering::SeqCst)
    }

    pub fn seed_calls(&self) -> usize {
        self.inner.seed_calls.load(Ordering::SeqCst)
    }

    pub fn reserve_seen(&self) -> Vec<ReservationRequest> {
        self.inner.reserve_seen.lock().unwrap().clone()
    }

    pub fn rejected(detail: &str) -> ClientError {
        ClientError::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: Some(detail.to_string()),
        }
    }
}

#[async_trait]
impl TableApi for FakeApi {
    async fn list_tables(&self) -> ClientResult<Vec<FloorTable>> {
        self.inner.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .list_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn seed(&self) -> ClientResult<()> {
        self.inner.seed_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn reserve(&self, request: &ReservationRequest) -> ClientResult<()> {
        self.inner
            .reserve_seen
            .lock()
            .unwrap()
            .push(request.clone());
        self.inner
            .reserve_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}
