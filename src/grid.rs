//! Grid primitives shared by the simulation and the renderer.

use serde::Deserialize;

/// Discrete grid position. Rows grow downward, columns grow to the right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, movement: Movement) -> Self {
        Self {
            row: self.row + movement.rows,
            col: self.col + movement.cols,
        }
    }
}

/// Heading of the snake. `Stop` only ever comes out of a scripted path and means
/// "script finished, start over".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Direction {
    #[serde(rename = "UP", alias = "DIRECTION_UP")]
    Up,
    #[serde(rename = "DOWN", alias = "DIRECTION_DOWN")]
    Down,
    #[serde(rename = "LEFT", alias = "DIRECTION_LEFT")]
    Left,
    #[serde(rename = "RIGHT", alias = "DIRECTION_RIGHT")]
    Right,
    #[serde(rename = "STOP", alias = "DIRECTION_STOP")]
    Stop,
}

/// Whole-cell step produced by one integration, each component normally in -1..=1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Movement {
    pub rows: i32,
    pub cols: i32,
}

impl Movement {
    pub fn is_zero(&self) -> bool {
        self.rows == 0 && self.cols == 0
    }

    /// More than one cell per axis means the elapsed time was far outside the
    /// expected tick length (e.g. a backgrounded tab).
    pub fn is_valid(&self) -> bool {
        self.rows.abs() <= 1 && self.cols.abs() <= 1
    }
}
