//! Simulated device position
//!
//! The demo has no real localization. The backend holds a single mutable
//! position that clients can read and overwrite, plus a grid-square
//! projection of it for the map overlay.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A simulated device position on the floor plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub floor: i32,
}

impl Position {
    pub fn new(x: i32, y: i32, floor: i32) -> Self {
        Self { x, y, floor }
    }
}

/// Shared holder for the simulated position (reads dominate writes)
#[derive(Debug)]
pub struct PositionTracker {
    current: RwLock<Position>,
}

impl PositionTracker {
    pub fn new(initial: Position) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub async fn get(&self) -> Position {
        *self.current.read().await
    }

    pub async fn set(&self, position: Position) {
        *self.current.write().await = position;
    }
}

/// A grid cell on the floor plan, labelled spreadsheet-style ("A1", "C4")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridSquare {
    pub label: String,
    pub col: i32,
    pub row: i32,
}

/// Project a position onto the navigation grid for the given cell size.
///
/// Columns map to letters and rows to 1-based numbers. Positions left of or
/// above the grid origin clamp to the first cell.
pub fn grid_square(position: Position, cell_size: u32) -> GridSquare {
    let cell = cell_size.max(1) as i32;
    let col = position.x.div_euclid(cell).max(0);
    let row = position.y.div_euclid(cell).max(0);

    GridSquare {
        label: format!("{}{}", column_letters(col), row + 1),
        col,
        row,
    }
}

/// Spreadsheet-style column letters: 0 -> A, 25 -> Z, 26 -> AA
fn column_letters(index: i32) -> String {
    let mut index = index.max(0) as u32;
    let mut letters = String::new();

    loop {
        letters.insert(0, char::from(b'A' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }

    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tracker_round_trip() {
        let tracker = PositionTracker::new(Position::new(12, 24, 0));
        assert_eq!(tracker.get().await, Position::new(12, 24, 0));

        tracker.set(Position::new(70, 50, 2)).await;
        assert_eq!(tracker.get().await, Position::new(70, 50, 2));
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(2), "C");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
    }

    #[test]
    fn test_grid_square_projection() {
        let square = grid_square(Position::new(12, 24, 0), 10);
        assert_eq!(square.col, 1);
        assert_eq!(square.row, 2);
        assert_eq!(square.label, "B3");

        let origin = grid_square(Position::new(0, 0, 0), 10);
        assert_eq!(origin.label, "A1");
    }

    #[test]
    fn test_grid_square_clamps_negative_positions() {
        let square = grid_square(Position::new(-5, -20, 0), 10);
        assert_eq!(square.col, 0);
        assert_eq!(square.row, 0);
        assert_eq!(square.label, "A1");
    }
}
