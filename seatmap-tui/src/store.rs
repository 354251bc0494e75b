//! Table store
//!
//! Owns the fetched table list and the load/seed bootstrap sequence. Tables
//! are replaced wholesale on every successful fetch; nothing else in the
//! application mutates them.

use seatmap_client::TableApi;
use shared::models::FloorTable;

const SEEDING_MSG: &str = "No tables found. Seeding demo layout...";
const LOAD_FAILED_MSG: &str = "Failed to load demo layout";

/// Holds the current table list and drives re-renders of the floor plan.
pub struct TableStore<S> {
    api: S,
    tables: Vec<FloorTable>,
    loading: bool,
    seeded: bool,
    status: Option<String>,
}

impl<S: TableApi> TableStore<S> {
    pub fn new(api: S) -> Self {
        Self {
            api,
            tables: Vec::new(),
            loading: true,
            seeded: false,
            status: None,
        }
    }

    /// Initial load: fetch the table list, falling back to a one-time seed
    /// (then exactly one refetch) when the fetch fails or comes back empty.
    ///
    /// `loading` resolves false in every path. Seeding is bootstrap, not
    /// recovery: once attempted it is never retried, a later failure is
    /// terminal.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.list_tables().await {
            Ok(items) if !items.is_empty() => self.adopt(items),
            Ok(_) => {
                tracing::info!("table list empty");
                self.bootstrap().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "table list fetch failed");
                self.bootstrap().await;
            }
        }
        self.loading = false;
    }

    /// Refetch the table list, no seed fallback. Used after a confirmed
    /// reservation so the displayed `reserved` flags come from the server.
    pub async fn refresh(&mut self) {
        match self.api.list_tables().await {
            Ok(items) => self.adopt(items),
            Err(err) => {
                tracing::warn!(error = %err, "table refresh failed");
                // keep the previous list, surface the failure
                self.status = Some(err.message());
            }
        }
    }

    async fn bootstrap(&mut self) {
        if self.seeded {
            self.fail_terminal();
            return;
        }
        self.seeded = true;
        self.status = Some(SEEDING_MSG.to_string());
        tracing::info!("seeding demo layout");

        let refetched = match self.api.seed().await {
            Ok(()) => self.api.list_tables().await,
            Err(err) => Err(err),
        };
        match refetched {
            Ok(items) if !items.is_empty() => self.adopt(items),
            Ok(_) => self.fail_terminal(),
            Err(err) => {
                tracing::error!(error = %err, "seed bootstrap failed");
                self.fail_terminal();
            }
        }
    }

    fn adopt(&mut self, items: Vec<FloorTable>) {
        tracing::debug!(count = items.len(), "adopted table list");
        self.tables = items;
        self.status = None;
    }

    fn fail_terminal(&mut self) {
        self.tables.clear();
        self.status = Some(LOAD_FAILED_MSG.to_string());
    }

    pub fn tables(&self) -> &[FloorTable] {
        &self.tables
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current load-path banner message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
