//! Continuous-time to discrete-grid motion.
//!
//! The snake carries a fractional position per axis. Each tick adds
//! `delta * speed` along the current heading and every whole unit that builds up
//! becomes one cell of movement.

use crate::grid::{Cell, Direction, Movement};

#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    pub direction: Direction,
    pub acc_x: f64,
    pub acc_y: f64,
    /// Never empty, head first.
    pub body: Vec<Cell>,
}

impl Snake {
    pub fn new(body: &[Cell], direction: Direction) -> Self {
        Self {
            direction,
            acc_x: 0.0,
            acc_y: 0.0,
            body: body.to_vec(),
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Integrate `delta_ms` of motion at `speed` cells/ms and shift the body when at
    /// least one whole cell was crossed. The returned movement may exceed one cell
    /// per axis; callers are expected to check [`Movement::is_valid`].
    pub fn advance(&mut self, delta_ms: f64, speed: f64) -> Movement {
        let distance = delta_ms * speed;
        match self.direction {
            Direction::Up => self.acc_y -= distance,
            Direction::Down => self.acc_y += distance,
            Direction::Left => self.acc_x -= distance,
            Direction::Right => self.acc_x += distance,
            Direction::Stop => {}
        }

        let movement = Movement {
            rows: drain(&mut self.acc_y),
            cols: drain(&mut self.acc_x),
        };

        if !movement.is_zero() {
            self.shift(movement);
        }
        movement
    }

    fn shift(&mut self, movement: Movement) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].offset(movement);
    }
}

// Pull whole units out of the accumulator, leaving it in (-1, 1).
fn drain(acc: &mut f64) -> i32 {
    let mut steps = 0;
    while *acc >= 1.0 {
        *acc -= 1.0;
        steps += 1;
    }
    while *acc <= -1.0 {
        *acc += 1.0;
        steps -= 1;
    }
    steps
}
