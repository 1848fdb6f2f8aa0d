//! Scripted steering: turn commands keyed on the cell the head occupies.

use serde::Deserialize;

use crate::grid::{Cell, Direction};

/// One step of the script. In JSON the cell is inlined: `{row, col, direction}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Waypoint {
    #[serde(flatten)]
    pub cell: Cell,
    pub direction: Direction,
}

impl Waypoint {
    pub const fn new(row: i32, col: i32, direction: Direction) -> Self {
        Self {
            cell: Cell::new(row, col),
            direction,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathController {
    path: Vec<Waypoint>,
    index: usize,
    cycle: bool,
}

impl PathController {
    pub fn new(path: &[Waypoint], cycle: bool) -> Self {
        Self {
            path: path.to_vec(),
            index: 0,
            cycle,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Direction to take now that the head sits on `head`.
    ///
    /// `None` keeps the current heading. Running off the end of a non-cycling
    /// script yields `Direction::Stop` on every call.
    pub fn next_direction(&mut self, head: Cell) -> Option<Direction> {
        if self.index >= self.path.len() && self.cycle {
            self.index = 0;
        }

        match self.path.get(self.index) {
            Some(waypoint) if waypoint.cell == head => {
                self.index += 1;
                Some(waypoint.direction)
            }
            Some(_) => None,
            None => Some(Direction::Stop),
        }
    }
}
