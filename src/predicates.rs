//! Spatial predicates over two grid positions.
//!
//! These are coarse proxies rather than geometry: "aligned" and "facing" both
//! mean sharing a row or a column, and "clear view" is a per-axis distance cap.

use crate::grid::Position;

/// Largest per-axis distance at which one item still has a clear view of another.
pub const MAX_VIEW_DISTANCE: u64 = 5;

/// Two items are aligned when they share a row or a column.
pub fn is_aligned(a: &Position, b: &Position) -> bool {
    a.row == b.row || a.col == b.col
}

/// Two items face each other when they share a row or a column.
///
/// Same formula as [`is_aligned`]. Item orientation is not modelled, so the
/// two stay separate functions until it is.
pub fn is_facing(a: &Position, b: &Position) -> bool {
    a.row == b.row || a.col == b.col
}

/// Whether `a` can see `b`: neither axis distance exceeds [`MAX_VIEW_DISTANCE`].
pub fn has_clear_view(a: &Position, b: &Position) -> bool {
    let row_dist = a.row.abs_diff(b.row);
    let col_dist = a.col.abs_diff(b.col);
    row_dist <= MAX_VIEW_DISTANCE && col_dist <= MAX_VIEW_DISTANCE
}
