//! Sequence of food positions consumed one at a time.

use crate::grid::Cell;

/// Yields the configured food cells in order. With `cycle` the sequence restarts
/// after the last cell; without it the cycler is exhausted and yields `None`,
/// which the animation treats as "no food on the board".
#[derive(Clone, Debug, PartialEq)]
pub struct FoodCycler {
    cells: Vec<Cell>,
    cursor: usize,
    cycle: bool,
}

impl FoodCycler {
    pub fn new(cells: &[Cell], cycle: bool) -> Self {
        Self {
            cells: cells.to_vec(),
            cursor: 0,
            cycle,
        }
    }
}

impl Iterator for FoodCycler {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.cursor >= self.cells.len() && self.cycle {
            self.cursor = 0;
        }
        let cell = self.cells.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(cell)
    }
}
