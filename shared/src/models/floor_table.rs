//! Floor Table Model

use serde::{Deserialize, Serialize};

/// Table shape, closed set.
///
/// Serialized lowercase over the wire (`"round"` / `"rectangular"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Round,
    Rectangular,
}

/// Seating table entity
///
/// `rotation` is the clockwise angular offset in degrees applied to the seat
/// layout relative to the unrotated default orientation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorTable {
    pub id: String,
    pub name: String,
    pub shape: TableShape,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

/// A labeled position at a table.
///
/// Seats carry no id of their own: a seat's identity is its index within the
/// owning table's `seats` sequence (`seat_index` on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub label: String,
    #[serde(default)]
    pub reserved: bool,
}

impl FloorTable {
    /// Compute screen positions for this table's seats, index-aligned with
    /// `seats`. See [`crate::layout::seat_positions`].
    pub fn seat_positions(&self) -> Vec<crate::layout::SeatPosition> {
        crate::layout::seat_positions(
            self.shape,
            self.width,
            self.height,
            self.rotation,
            self.seats.len(),
        )
    }
}
