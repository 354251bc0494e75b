//! Application state
//!
//! UI-side state container: the latest store snapshot, the seat cursor, the
//! reservation state machine and the name input. All network work goes
//! through the worker channel; nothing here blocks.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shared::models::FloorTable;
use tokio::sync::mpsc;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::reservation::{ReservationController, ReservationState, SelectedSeat};
use crate::worker::{AppEvent, WorkerCommand};

/// Keyboard cursor over the floor plan: table index plus seat index.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatCursor {
    pub table: usize,
    pub seat: usize,
}

pub struct App {
    /// Latest table list snapshot, owned by the store, read-only here.
    pub tables: Vec<FloorTable>,
    pub loading: bool,
    /// Load-path banner message from the store.
    pub status: Option<String>,
    /// Transient confirmation message ("Seat reserved!").
    pub notice: Option<String>,
    pub cursor: SeatCursor,
    pub controller: ReservationController,
    pub input: Input,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
    commands: mpsc::Sender<WorkerCommand>,
}

impl App {
    pub fn new(commands: mpsc::Sender<WorkerCommand>) -> Self {
        Self {
            tables: Vec::new(),
            loading: true,
            status: None,
            notice: None,
            cursor: SeatCursor::default(),
            controller: ReservationController::default(),
            input: Input::default(),
            logger_state: TuiWidgetState::new(),
            should_quit: false,
            commands,
        }
    }

    /// Apply an event pushed by the network worker.
    pub fn on_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tables(snapshot) => {
                self.tables = snapshot.tables;
                self.loading = snapshot.loading;
                self.status = snapshot.status;
                self.clamp_cursor();
            }
            AppEvent::ReserveOk => {
                self.controller.submit_succeeded();
                self.input.reset();
                self.notice = Some("Seat reserved!".to_string());
            }
            AppEvent::ReserveFailed(message) => {
                self.controller.submit_failed(message);
            }
        }
    }

    /// Handle a key press from the terminal.
    pub fn on_key(&mut self, key: KeyEvent) {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.controller.is_submitting() {
            // in-flight guard: the selection is locked until the outcome
            self.logger_key(key.code);
            return;
        }
        match self.controller.state() {
            ReservationState::Idle => self.on_browse_key(key),
            ReservationState::SeatSelected { .. } => self.on_panel_key(key),
            ReservationState::Submitting { .. } => {}
        }
    }

    fn on_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.request_reload(),
            KeyCode::Tab => self.next_table(1),
            KeyCode::BackTab => self.next_table(-1),
            KeyCode::Right | KeyCode::Down => self.next_seat(1),
            KeyCode::Left | KeyCode::Up => self.next_seat(-1),
            KeyCode::Enter => self.open_selection(),
            code => self.logger_key(code),
        }
    }

    fn on_panel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.controller.close();
                self.input.reset();
            }
            KeyCode::Enter => self.submit(),
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }

    fn logger_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {}
        }
    }

    fn request_reload(&mut self) {
        self.notice = None;
        if self.commands.try_send(WorkerCommand::Reload).is_err() {
            tracing::warn!("worker busy, reload dropped");
        }
    }

    /// The seat under the cursor, if the floor plan is non-empty.
    pub fn seat_under_cursor(&self) -> Option<SelectedSeat> {
        let table = self.tables.get(self.cursor.table)?;
        let seat = table.seats.get(self.cursor.seat)?;
        Some(SelectedSeat {
            table_id: table.id.clone(),
            seat_index: self.cursor.seat,
            label: seat.label.clone(),
            reserved: seat.reserved,
        })
    }

    fn open_selection(&mut self) {
        if let Some(seat) = self.seat_under_cursor() {
            self.notice = None;
            self.input.reset();
            self.controller.select(seat);
        }
    }

    /// Validate and hand the reservation to the worker. A reserved seat or
    /// blank name never reaches the network.
    ///
    /// A full command channel rolls the controller back out of `Submitting`:
    /// a request that never reached the worker gets no terminal outcome, so
    /// leaving the state machine in flight would lock the UI for good.
    fn submit(&mut self) {
        if let Some(request) = self.controller.begin_submit(self.input.value()) {
            if self.commands.try_send(WorkerCommand::Reserve(request)).is_err() {
                tracing::warn!("worker busy, reservation not submitted");
                self.controller.submit_failed("Service busy, try again");
            }
        }
    }

    fn next_table(&mut self, dir: isize) {
        let count = self.tables.len();
        if count == 0 {
            return;
        }
        self.cursor.table = wrap(self.cursor.table, dir, count);
        self.cursor.seat = 0;
    }

    fn next_seat(&mut self, dir: isize) {
        let Some(table) = self.tables.get(self.cursor.table) else {
            return;
        };
        let count = table.seats.len();
        if count == 0 {
            return;
        }
        self.cursor.seat = wrap(self.cursor.seat, dir, count);
    }

    fn clamp_cursor(&mut self) {
        if self.tables.is_empty() {
            self.cursor = SeatCursor::default();
            return;
        }
        self.cursor.table = self.cursor.table.min(self.tables.len() - 1);
        let seats = self.tables[self.cursor.table].seats.len();
        self.cursor.seat = if seats == 0 {
            0
        } else {
            self.cursor.seat.min(seats - 1)
        };
    }
}

fn wrap(index: usize, dir: isize, count: usize) -> usize {
    (index as isize + dir).rem_euclid(count as isize) as usize
}
