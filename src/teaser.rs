//! Small looping teaser: the grid draws itself in, then a three-cell snake is
//! outlined one cell at a time.

use crate::config::canvas_dimension;
use crate::grid::Cell;
use crate::render::{Surface, cell_origin, render_background, render_border, render_net};

pub const TEASER_PERIOD_MS: i32 = 300;
/// Progress wraps back to zero after this value.
pub const TEASER_MAX_PROGRESS: u32 = 35;

const TEASER_BG_COLOR: &str = "white";
const TEASER_SNAKE_COLOR: &str = "#0000ff";
const TEASER_NET_LINE_WIDTH: f64 = 0.4;
const TEASER_SNAKE_LINE_WIDTH: f64 = 3.0;
const HORIZONTAL_NET_AFTER: u32 = 5;

// Each cell appears once progress passes its threshold.
static TEASER_SNAKE: [(u32, Cell); 3] = [
    (10, Cell::new(3, 3)),
    (15, Cell::new(3, 4)),
    (20, Cell::new(3, 5)),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Teaser {
    pub progress: u32,
    pub width: f64,
    pub height: f64,
    pub tile_size: f64,
}

impl Teaser {
    pub fn new(width: f64, height: f64, tile_size: f64) -> Self {
        Self {
            progress: 0,
            width: canvas_dimension(width),
            height: canvas_dimension(height),
            tile_size,
        }
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = canvas_dimension(width);
        self.height = canvas_dimension(height);
    }

    pub fn advance(&mut self) {
        self.progress += 1;
        if self.progress > TEASER_MAX_PROGRESS {
            self.progress = 0;
        }
    }

    /// Cells of the teaser snake visible at the current progress.
    pub fn visible_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        TEASER_SNAKE
            .iter()
            .filter(|(after, _)| self.progress > *after)
            .map(|&(_, cell)| cell)
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear_rect(0.0, 0.0, self.width, self.height);
        render_background(surface, self.width, self.height, TEASER_BG_COLOR);
        render_net(
            surface,
            self.width,
            self.height,
            self.tile_size,
            TEASER_NET_LINE_WIDTH,
            self.progress > HORIZONTAL_NET_AFTER,
        );

        surface.set_line_width(TEASER_SNAKE_LINE_WIDTH);
        surface.set_stroke_style(TEASER_SNAKE_COLOR);
        for cell in self.visible_cells() {
            let (x, y) = cell_origin(cell, self.tile_size);
            render_border(surface, x, y, self.tile_size, self.tile_size);
        }
    }
}
