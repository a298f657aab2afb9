//! The room grid: fixed dimensions, cell positions and the furniture that can
//! be placed on them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows in the room grid.
pub const ROWS: i64 = 8;

/// Number of columns in the room grid.
pub const COLS: i64 = 8;

/// A cell on the room grid.
///
/// Coordinates are signed so that out-of-grid input can still be represented
/// and reported on; see [`Position::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Whether the position lies inside the `ROWS` x `COLS` grid.
    pub fn in_bounds(&self) -> bool {
        (0..ROWS).contains(&self.row) && (0..COLS).contains(&self.col)
    }

    /// Whether the position touches any wall of the room.
    pub fn on_perimeter(&self) -> bool {
        self.row == 0 || self.row == ROWS - 1 || self.col == 0 || self.col == COLS - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Furniture the simulator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Door,
    Bed,
    Desk,
    Mirror,
}

impl Item {
    /// Every item a room must contain, in the order missing items are reported.
    pub const REQUIRED: [Item; 4] = [Item::Door, Item::Bed, Item::Desk, Item::Mirror];

    pub fn as_str(&self) -> &'static str {
        match self {
            Item::Door => "door",
            Item::Bed => "bed",
            Item::Desk => "desk",
            Item::Mirror => "mirror",
        }
    }

    pub fn from_str(name: &str) -> Option<Self> {
        match name {
            "door" => Some(Item::Door),
            "bed" => Some(Item::Bed),
            "desk" => Some(Item::Desk),
            "mirror" => Some(Item::Mirror),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
