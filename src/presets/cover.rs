// Cover-page animation: a teal snake that laps the hero area, eating its way up
// to thirteen segments between the decorative blocks.
use crate::config::{AnimationConfig, Styles};
use crate::grid::{Cell, Direction};
use crate::path::Waypoint;

const COVER_GROWING_LIMIT: usize = 13;

const COVER_BLOCKS: &[(i32, i32)] = &[
    (5, 5),
    (6, 6),
    (6, 7),
    (6, 5),
    (11, 11),
    (12, 12),
    (12, 11),
    (6, 13),
    (8, 15),
    (8, 14),
    (8, 13),
    (8, 16),
    (11, 18),
    (4, 18),
    (9, 23),
    (9, 22),
    (9, 14),
    (5, 26),
    (6, 27),
    (7, 30),
    (8, 30),
    (9, 30),
    (4, 32),
    (5, 33),
    (11, 40),
    (12, 39),
];

const COVER_SNAKE: &[(i32, i32)] = &[(10, 15), (10, 14), (10, 13)];

const COVER_FOOD: &[(i32, i32)] = &[(10, 20), (10, 25), (8, 20), (10, 6), (9, 21), (7, 14)];

const COVER_PATH: &[Waypoint] = &[
    Waypoint::new(10, 16, Direction::Right),
    Waypoint::new(10, 25, Direction::Up),
    Waypoint::new(8, 25, Direction::Left),
    Waypoint::new(8, 20, Direction::Down),
    Waypoint::new(10, 20, Direction::Left),
    Waypoint::new(10, 6, Direction::Up),
    Waypoint::new(9, 6, Direction::Right),
    Waypoint::new(9, 21, Direction::Up),
    Waypoint::new(7, 21, Direction::Left),
    Waypoint::new(7, 12, Direction::Down),
    Waypoint::new(10, 12, Direction::Right),
];

fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
    raw.iter().map(|&(row, col)| Cell::new(row, col)).collect()
}

/// Width and height are left at zero; the host fills them from the canvas.
pub fn cover() -> AnimationConfig {
    AnimationConfig {
        styles: Styles {
            snake_color: "#00d1b2".into(),
            snake_border_color: "black".into(),
            ..Styles::default()
        },
        blocks: cells(COVER_BLOCKS),
        snake_positions: Some(cells(COVER_SNAKE)),
        snake_direction: Some(Direction::Right),
        snake_growing: Some(true),
        snake_growing_limit: Some(COVER_GROWING_LIMIT),
        snake_path: Some(COVER_PATH.to_vec()),
        snake_path_cycle: true,
        food_positions: Some(cells(COVER_FOOD)),
        food_cycle: true,
        ..AnimationConfig::default()
    }
}
