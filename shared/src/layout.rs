//! Seat-geometry layout engine
//!
//! Pure functions converting a table's shape, dimensions, rotation and seat
//! count into concrete screen positions. No state, no side effects: identical
//! inputs always produce identical outputs.

use crate::models::TableShape;
use serde::{Deserialize, Serialize};

/// Derived screen position of a seat, relative to the table's bounding box.
///
/// Transient: recomputed whenever the layout inputs change, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatPosition {
    pub x: f64,
    pub y: f64,
}

/// Compute positions for `seat_count` seats, index-aligned with the owning
/// table's `seats` sequence.
///
/// `rotation` is in degrees, clockwise. `seat_count == 0` yields an empty
/// vec (guard here, not in the callers).
pub fn seat_positions(
    shape: TableShape,
    width: f64,
    height: f64,
    rotation: f64,
    seat_count: usize,
) -> Vec<SeatPosition> {
    if seat_count == 0 {
        return Vec::new();
    }
    match shape {
        TableShape::Round => round_positions(width, height, rotation, seat_count),
        TableShape::Rectangular => rect_positions(width, height, rotation, seat_count),
    }
}

/// Visual seat diameter for a table of the given dimensions.
pub fn seat_size(width: f64, height: f64) -> f64 {
    (width.min(height) * 0.12).max(10.0)
}

/// Seats evenly spaced on a circle of radius `min(w,h) * 0.55 / 2` centered
/// on the table. Angle 0 is the top of an unrotated table, increasing
/// clockwise.
fn round_positions(width: f64, height: f64, rotation: f64, seat_count: usize) -> Vec<SeatPosition> {
    let radius = width.min(height) * 0.55 / 2.0;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let step = 360.0 / seat_count as f64;

    (0..seat_count)
        .map(|i| {
            let angle = step * i as f64 + rotation;
            polar_to_cartesian(cx, cy, radius, angle)
        })
        .collect()
}

/// Seats evenly spaced along the rectangle's perimeter, walking clockwise
/// from the top-left corner: top edge left→right, right edge top→bottom,
/// bottom edge right→left, left edge bottom→top.
fn rect_positions(width: f64, height: f64, rotation: f64, seat_count: usize) -> Vec<SeatPosition> {
    let perimeter = 2.0 * (width + height);
    let step = perimeter / seat_count as f64;
    let phase = rotation / 360.0 * perimeter;

    (0..seat_count)
        .map(|i| {
            let d = (step * i as f64 + phase).rem_euclid(perimeter);
            let (x, y) = if d <= width {
                (d, 0.0)
            } else if d <= width + height {
                (width, d - width)
            } else if d <= 2.0 * width + height {
                (2.0 * width + height - d, height)
            } else {
                (0.0, perimeter - d)
            };
            SeatPosition { x, y }
        })
        .collect()
}

/// Angle measured clockwise from the top of the circle (subtract 90° before
/// the trig so that angle 0 maps to top-center).
fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> SeatPosition {
    let angle = (angle_deg - 90.0).to_radians();
    SeatPosition {
        x: cx + radius * angle.cos(),
        y: cy + radius * angle.sin(),
    }
}
