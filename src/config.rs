//! Animation configuration as supplied by the host page.
//!
//! Keys are camelCase so the JSON a page already hands to the animation keeps
//! working unchanged. Everything except the snake itself is optional.

use serde::Deserialize;
use thiserror::Error;

use crate::grid::{Cell, Direction};
use crate::path::Waypoint;

/// Cells per millisecond.
pub const DEFAULT_SPEED: f64 = 0.002;
/// Pixel edge of one grid cell.
pub const DEFAULT_TILE_SIZE: f64 = 30.0;
/// Interval between ticks, in milliseconds.
pub const DEFAULT_LOOP_DELAY_MS: i32 = 100;
/// Largest canvas edge browsers will back with pixels.
pub const MAX_CANVAS_SIZE: f64 = 32_767.0;

pub const DEFAULT_BG_COLOR: &str = "white";
pub const DEFAULT_NET_COLOR: &str = "blue";
pub const DEFAULT_SNAKE_COLOR: &str = "white";
// Matches the grid net, which is what a snake without a border style ends up
// stroked with.
pub const DEFAULT_SNAKE_BORDER_COLOR: &str = DEFAULT_NET_COLOR;
pub const DEFAULT_BLOCK_COLOR: &str = "#b9c49d";
pub const DEFAULT_BLOCK_BORDER_COLOR: &str = "#000000";
pub const DEFAULT_FOOD_COLOR: &str = "#ffdd57";
pub const DEFAULT_FOOD_BORDER_COLOR: &str = "black";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("snakePositions given without snakeDirection")]
    MissingDirection,
    #[error("snakeDirection given without snakePositions")]
    MissingPositions,
    #[error("snakePositions must contain at least one cell")]
    EmptyBody,
    #[error("snakeDirection cannot be STOP")]
    StopHeading,
    #[error("snakePath requires a snake")]
    PathWithoutSnake,
    #[error("snakePath must contain at least one waypoint")]
    EmptyPath,
    #[error("snakePath waypoint {index} at {cell:?} is not ahead of {from:?} heading {heading:?}")]
    UnreachableWaypoint {
        index: usize,
        cell: Cell,
        from: Cell,
        heading: Direction,
    },
    #[error("speed must be a positive finite number, got {0}")]
    InvalidSpeed(f64),
    #[error("tileSize must be a positive finite number, got {0}")]
    InvalidTileSize(f64),
    #[error("loopDelayMs must be positive, got {0}")]
    InvalidLoopDelay(i32),
    #[error("malformed animation config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Simulation and layout constants. Kept per instance so several animations can
/// run side by side with different settings.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tuning {
    pub speed: f64,
    pub tile_size: f64,
    pub loop_delay_ms: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            tile_size: DEFAULT_TILE_SIZE,
            loop_delay_ms: DEFAULT_LOOP_DELAY_MS,
        }
    }
}

/// Colours used by the renderer. Missing keys fall back to the `DEFAULT_*` colours.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Styles {
    pub bg_color: String,
    pub snake_color: String,
    pub snake_border_color: String,
    pub block_color: String,
    pub block_border_color: String,
    pub food_color: String,
    pub food_border_color: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            bg_color: DEFAULT_BG_COLOR.into(),
            snake_color: DEFAULT_SNAKE_COLOR.into(),
            snake_border_color: DEFAULT_SNAKE_BORDER_COLOR.into(),
            block_color: DEFAULT_BLOCK_COLOR.into(),
            block_border_color: DEFAULT_BLOCK_BORDER_COLOR.into(),
            food_color: DEFAULT_FOOD_COLOR.into(),
            food_border_color: DEFAULT_FOOD_BORDER_COLOR.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationConfig {
    /// Canvas size in pixels. Usually filled in by the host from the element.
    pub width: f64,
    pub height: f64,
    pub styles: Styles,
    pub tuning: Tuning,
    pub blocks: Vec<Cell>,
    pub snake_positions: Option<Vec<Cell>>,
    pub snake_direction: Option<Direction>,
    /// Growth is on unless this is `Some(false)`.
    pub snake_growing: Option<bool>,
    /// Maximum body length reached by eating. Unset means the body never grows.
    pub snake_growing_limit: Option<usize>,
    pub snake_path: Option<Vec<Waypoint>>,
    pub snake_path_cycle: bool,
    pub food_positions: Option<Vec<Cell>>,
    pub food_cycle: bool,
}

impl AnimationConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let has_snake = match (&self.snake_positions, self.snake_direction) {
            (Some(_), None) => return Err(ConfigError::MissingDirection),
            (None, Some(_)) => return Err(ConfigError::MissingPositions),
            (Some(body), _) if body.is_empty() => return Err(ConfigError::EmptyBody),
            (Some(_), Some(Direction::Stop)) => return Err(ConfigError::StopHeading),
            (Some(_), Some(_)) => true,
            (None, None) => false,
        };

        match &self.snake_path {
            Some(_) if !has_snake => return Err(ConfigError::PathWithoutSnake),
            Some(path) if path.is_empty() => return Err(ConfigError::EmptyPath),
            _ => {}
        }
        self.check_route()?;

        let Tuning {
            speed,
            tile_size,
            loop_delay_ms,
        } = self.tuning;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(tile_size));
        }
        if loop_delay_ms <= 0 {
            return Err(ConfigError::InvalidLoopDelay(loop_delay_ms));
        }
        Ok(())
    }

    pub fn growing_enabled(&self) -> bool {
        self.snake_growing != Some(false)
    }

    // Follows the script from the head. Waypoints only trigger on an exact head
    // match, so each one has to lie on the line the snake is travelling. A STOP
    // waypoint ends the walk; a cycling path also has to lead back to the first.
    fn check_route(&self) -> Result<(), ConfigError> {
        let (Some(body), Some(mut heading), Some(path)) =
            (&self.snake_positions, self.snake_direction, &self.snake_path)
        else {
            return Ok(());
        };
        let (Some(&head), Some(first)) = (body.first(), path.first()) else {
            return Ok(());
        };

        let wrap = self.snake_path_cycle.then_some((0, first));
        let mut at = head;
        for (index, waypoint) in path.iter().enumerate().chain(wrap) {
            if !lies_ahead(at, heading, waypoint.cell) {
                return Err(ConfigError::UnreachableWaypoint {
                    index,
                    cell: waypoint.cell,
                    from: at,
                    heading,
                });
            }
            if waypoint.direction == Direction::Stop {
                break;
            }
            at = waypoint.cell;
            heading = waypoint.direction;
        }
        Ok(())
    }
}

fn lies_ahead(from: Cell, heading: Direction, to: Cell) -> bool {
    match heading {
        Direction::Right => to.row == from.row && to.col > from.col,
        Direction::Left => to.row == from.row && to.col < from.col,
        Direction::Down => to.col == from.col && to.row > from.row,
        Direction::Up => to.col == from.col && to.row < from.row,
        Direction::Stop => false,
    }
}

/// Canvas sizes arrive from the page unchecked. NaN and negative values become
/// zero and anything larger than a canvas can be is capped.
pub fn canvas_dimension(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_CANVAS_SIZE)
    }
}
