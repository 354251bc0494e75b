//! Reservation state machine
//!
//! Governs seat selection and submission as explicit typed transitions:
//!
//! ```text
//! Idle -> SeatSelected -> Submitting -> Idle          (success, refresh follows)
//!                                    -> SeatSelected  (failure, error attached)
//! ```
//!
//! The controller never touches the table list: a confirmed reservation is
//! only ever reflected by the refetch the success path triggers.

use shared::client::ReservationRequest;

/// The seat the user is looking at. Identity is table id plus positional
/// index; seats have no id of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSeat {
    pub table_id: String,
    pub seat_index: usize,
    pub label: String,
    pub reserved: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReservationState {
    #[default]
    Idle,
    SeatSelected {
        seat: SelectedSeat,
        error: Option<String>,
    },
    Submitting {
        seat: SelectedSeat,
    },
}

#[derive(Debug, Default)]
pub struct ReservationController {
    state: ReservationState,
}

impl ReservationController {
    pub fn state(&self) -> &ReservationState {
        &self.state
    }

    pub fn selected(&self) -> Option<&SelectedSeat> {
        match &self.state {
            ReservationState::Idle => None,
            ReservationState::SeatSelected { seat, .. } => Some(seat),
            ReservationState::Submitting { seat } => Some(seat),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ReservationState::SeatSelected { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ReservationState::Submitting { .. })
    }

    /// Open (or move) the selection. Reserved seats may be viewed, so the
    /// flag does not gate this transition. Ignored while a submission is in
    /// flight.
    pub fn select(&mut self, seat: SelectedSeat) {
        if self.is_submitting() {
            return;
        }
        self.state = ReservationState::SeatSelected { seat, error: None };
    }

    /// Close the selection. Ignored while a submission is in flight.
    pub fn close(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.state = ReservationState::Idle;
    }

    /// Whether a submission with this name would be accepted client-side.
    /// Drives the disabled state of the submit control.
    pub fn can_submit(&self, name: &str) -> bool {
        matches!(
            &self.state,
            ReservationState::SeatSelected { seat, .. } if !seat.reserved
        ) && !name.trim().is_empty()
    }

    /// Validate and enter `Submitting`. Returns the request to send, or
    /// `None` when the submission is rejected client-side (reserved seat,
    /// blank name, wrong state) — in which case no network call may happen.
    pub fn begin_submit(&mut self, name: &str) -> Option<ReservationRequest> {
        if !self.can_submit(name) {
            return None;
        }
        let ReservationState::SeatSelected { seat, .. } = std::mem::take(&mut self.state) else {
            unreachable!("can_submit checked the state");
        };
        let request = ReservationRequest {
            table_id: seat.table_id.clone(),
            seat_index: seat.seat_index,
            name: name.trim().to_string(),
        };
        self.state = ReservationState::Submitting { seat };
        Some(request)
    }

    /// The service confirmed the reservation: close the selection. The
    /// caller triggers the table refetch; local seat state stays untouched.
    pub fn submit_succeeded(&mut self) {
        if self.is_submitting() {
            self.state = ReservationState::Idle;
        }
    }

    /// The service declined: reopen the selection with the error attached so
    /// the user can retry or close.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        if let ReservationState::Submitting { seat } = std::mem::take(&mut self.state) {
            self.state = ReservationState::SeatSelected {
                seat,
                error: Some(message.into()),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(reserved: bool) -> SelectedSeat {
        SelectedSeat {
            table_id: "T1".to_string(),
            seat_index: 2,
            label: "S3".to_string(),
            reserved,
        }
    }

    #[test]
    fn select_and_close() {
        let mut ctl = ReservationController::default();
        assert_eq!(*ctl.state(), ReservationState::Idle);

        ctl.select(seat(false));
        assert_eq!(ctl.selected(), Some(&seat(false)));

        ctl.close();
        assert_eq!(*ctl.state(), ReservationState::Idle);
    }

    #[test]
    fn reserved_seat_may_be_viewed_but_not_submitted() {
        let mut ctl = ReservationController::default();
        ctl.select(seat(true));
        assert_eq!(ctl.selected(), Some(&seat(true)));
        assert!(!ctl.can_submit("Ada"));
        assert!(ctl.begin_submit("Ada").is_none());
        // still just selected, nothing in flight
        assert!(!ctl.is_submitting());
    }

    #[test]
    fn blank_name_is_rejected_client_side() {
        let mut ctl = ReservationController::default();
        ctl.select(seat(false));
        assert!(ctl.begin_submit("").is_none());
        assert!(ctl.begin_submit("   ").is_none());
        assert!(!ctl.is_submitting());
    }

    #[test]
    fn begin_submit_builds_request_and_enters_submitting() {
        let mut ctl = ReservationController::default();
        ctl.select(seat(false));
        let req = ctl.begin_submit(" Ada Lovelace ").unwrap();
        assert_eq!(req.table_id, "T1");
        assert_eq!(req.seat_index, 2);
        assert_eq!(req.name, "Ada Lovelace");
        assert!(ctl.is_submitting());
    }

    #[test]
    fn success_closes_selection() {
        let mut ctl = ReservationController::default();
        ctl.select(seat(false));
        ctl.begin_submit("Ada").unwrap();
        ctl.submit_succeeded();
        assert_eq!(*ctl.state(), ReservationState::Idle);
    }

    #[test]
    fn failure_keeps_seat_selected_with_error() {
        let mut ctl = ReservationController::default();
        ctl.select(seat(false));
        ctl.begin_submit("Ada").unwrap();
        ctl.submit_failed("Seat already reserved");
        assert_eq!(ctl.selected(), Some(&seat(false)));
        assert_eq!(ctl.error(), Some("Seat already reserved"));
        // retry is allowed
        assert!(ctl.begin_submit("Ada").is_some());
    }

    #[test]
    fn in_flight_submission_blocks_everything() {
        let mut ctl = ReservationController::default();
        ctl.select(seat(false));
        ctl.begin_submit("Ada").unwrap();

        // no reselect, no close, no duplicate submit while in flight
        ctl.select(seat(true));
        assert!(ctl.is_submitting());
        ctl.close();
        assert!(ctl.is_submitting());
        assert!(ctl.begin_submit("Ada").is_none());
    }

    #[test]
    fn terminal_events_outside_submitting_are_ignored() {
        let mut ctl = ReservationController::default();
        ctl.submit_succeeded();
        ctl.submit_failed("late failure");
        assert_eq!(*ctl.state(), ReservationState::Idle);
    }
}
