//! Background network worker
//!
//! A single task owns the [`TableStore`] and processes commands strictly in
//! order, so a reservation always reaches its terminal outcome before the
//! follow-up refresh is issued and no stale in-flight state leaks into the
//! refreshed list. The UI never blocks on the network: it sends commands and
//! consumes [`AppEvent`]s.

use seatmap_client::TableApi;
use shared::client::ReservationRequest;
use shared::models::FloorTable;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::store::TableStore;

/// Commands the UI sends to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    /// Refetch the table list (no seed fallback).
    Reload,
    /// Submit a reservation; on success the worker refreshes on its own.
    Reserve(ReservationRequest),
}

/// Events the worker pushes back to the UI.
#[derive(Debug)]
pub enum AppEvent {
    /// Fresh view of the store after a load/refresh.
    Tables(StoreSnapshot),
    /// The service confirmed the reservation; a refresh is on its way.
    ReserveOk,
    /// The service declined the reservation.
    ReserveFailed(String),
}

/// Immutable copy of the store state, cheap enough to ship over the channel.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub tables: Vec<FloorTable>,
    pub loading: bool,
    pub status: Option<String>,
}

fn snapshot<S: TableApi>(store: &TableStore<S>) -> StoreSnapshot {
    StoreSnapshot {
        tables: store.tables().to_vec(),
        loading: store.is_loading(),
        status: store.status().map(str::to_string),
    }
}

/// Spawn the worker task. Returns the command sender; the task stops when
/// the token is cancelled or the sender is dropped, after which no further
/// events are emitted.
pub fn spawn<S>(
    api: S,
    events: mpsc::Sender<AppEvent>,
    cancel: CancellationToken,
) -> mpsc::Sender<WorkerCommand>
where
    S: TableApi + Clone + 'static,
{
    let (tx, mut rx) = mpsc::channel::<WorkerCommand>(16);

    tokio::spawn(async move {
        let mut store = TableStore::new(api.clone());

        // initial activation: load with the one-shot seed fallback
        store.load().await;
        if events.send(AppEvent::Tables(snapshot(&store))).await.is_err() {
            return;
        }

        loop {
            let cmd = tokio::select! {
                _ = cancel.cancelled() => break,
                cmd = rx.recv() => match cmd {
                    Some(cmd) => cmd,
                    None => break,
                },
            };

            match cmd {
                WorkerCommand::Reload => {
                    store.refresh().await;
                    if events.send(AppEvent::Tables(snapshot(&store))).await.is_err() {
                        break;
                    }
                }
                WorkerCommand::Reserve(request) => {
                    tracing::info!(
                        table_id = %request.table_id,
                        seat_index = request.seat_index,
                        "submitting reservation"
                    );
                    match api.reserve(&request).await {
                        Ok(()) => {
                            if events.send(AppEvent::ReserveOk).await.is_err() {
                                break;
                            }
                            // refresh only after the terminal outcome
                            store.refresh().await;
                            if events.send(AppEvent::Tables(snapshot(&store))).await.is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "reservation declined");
                            if events
                                .send(AppEvent::ReserveFailed(err.message()))
                                .await
                                .is_err()
                            {
                                break;
                            }
                        }
                    }
                }
            }
        }
        tracing::debug!("network worker stopped");
    });

    tx
}
