//! The animation state machine: one call to [`AnimationState::tick`] per timer tick.

use log::{debug, warn};

use crate::config::{AnimationConfig, ConfigError, canvas_dimension};
use crate::food::FoodCycler;
use crate::grid::{Cell, Direction};
use crate::motion::Snake;
use crate::path::PathController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetCause {
    /// The elapsed time produced more than one cell of movement on an axis.
    InvalidMovement,
    /// The path controller ran out of waypoints.
    EndOfPath,
}

/// What a tick did. Only informative; the state has already been updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// No snake configured.
    Idle,
    /// Time passed but not enough to cross a cell boundary.
    Stationary,
    Moved { ate: bool },
    Reset(ResetCause),
}

pub struct AnimationState {
    config: AnimationConfig,
    pub width: f64,
    pub height: f64,
    pub snake: Option<Snake>,
    pub food: Option<Cell>,
    pub blocks: Vec<Cell>,
    controller: Option<PathController>,
    food_cycler: Option<FoodCycler>,
}

impl AnimationState {
    pub fn new(config: AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = Self {
            width: canvas_dimension(config.width),
            height: canvas_dimension(config.height),
            config,
            snake: None,
            food: None,
            blocks: Vec::new(),
            controller: None,
            food_cycler: None,
        };
        state.reset();
        Ok(state)
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn controller(&self) -> Option<&PathController> {
        self.controller.as_ref()
    }

    /// Called by the host when the canvas is resized. The simulation itself does not
    /// depend on the size; only the renderer reads it.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = canvas_dimension(width);
        self.height = canvas_dimension(height);
        if (self.width, self.height) != (width, height) {
            warn!("canvas size {width}x{height} clamped to {}x{}", self.width, self.height);
        }
    }

    /// Rebuild food, snake, path and blocks from the configuration the state was
    /// created with.
    pub fn reset(&mut self) {
        let cfg = &self.config;

        if let Some(positions) = &cfg.food_positions {
            let mut cycler = FoodCycler::new(positions, cfg.food_cycle);
            self.food = cycler.next();
            self.food_cycler = Some(cycler);
        }

        if let (Some(positions), Some(direction)) = (&cfg.snake_positions, cfg.snake_direction) {
            self.snake = Some(Snake::new(positions, direction));
        }

        if self.snake.is_some() {
            if let Some(path) = &cfg.snake_path {
                self.controller = Some(PathController::new(path, cfg.snake_path_cycle));
            }
        }

        self.blocks = cfg.blocks.clone();
    }

    pub fn tick(&mut self, delta_ms: f64) -> Tick {
        let speed = self.config.tuning.speed;
        let Some(snake) = self.snake.as_mut() else {
            return Tick::Idle;
        };

        // Growth re-appends the tail as it was before this move.
        let tail = snake.tail();
        let movement = snake.advance(delta_ms, speed);

        if !movement.is_valid() {
            debug!("movement {movement:?} after {delta_ms}ms, restarting");
            self.reset();
            return Tick::Reset(ResetCause::InvalidMovement);
        }
        if movement.is_zero() {
            return Tick::Stationary;
        }

        let head = snake.head();
        let ate = self.food == Some(head);
        if ate {
            self.grow(tail);
            self.food = self.food_cycler.as_mut().and_then(Iterator::next);
            debug!("food eaten at {head:?}, next {:?}", self.food);
        }

        if let Some(direction) = self.controller.as_mut().and_then(|c| c.next_direction(head)) {
            if direction == Direction::Stop {
                debug!("path finished at {head:?}, restarting");
                self.reset();
                return Tick::Reset(ResetCause::EndOfPath);
            }
            if let Some(snake) = self.snake.as_mut() {
                snake.direction = direction;
            }
        }

        Tick::Moved { ate }
    }

    fn grow(&mut self, tail: Cell) {
        if !self.config.growing_enabled() {
            return;
        }
        let Some(snake) = self.snake.as_mut() else {
            return;
        };
        let limit = self.config.snake_growing_limit.unwrap_or(snake.body.len());
        if snake.body.len() < limit {
            snake.body.push(tail);
        }
    }
}
