//! Stateless drawing of an [`AnimationState`] onto a 2D surface.

use web_sys::CanvasRenderingContext2d;

use crate::animation::AnimationState;
use crate::config::{DEFAULT_NET_COLOR, MAX_CANVAS_SIZE, Styles, Tuning};
use crate::grid::Cell;

const NET_LINE_WIDTH: f64 = 0.1;

/// The handful of 2D-context calls the renderer needs. Implemented for the browser
/// canvas context; tests record the calls instead.
pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

impl Surface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }
    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }
    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }
    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }
    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }
    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
}

/// Full frame: background, grid, food, snake, blocks (in that order, so blocks
/// sit on top).
pub fn render_animation<S: Surface + ?Sized>(
    surface: &mut S,
    state: &AnimationState,
    styles: &Styles,
    tuning: &Tuning,
) {
    let (width, height) = (state.width, state.height);
    let tile = tuning.tile_size;

    surface.clear_rect(0.0, 0.0, width, height);
    render_background(surface, width, height, &styles.bg_color);
    render_net(surface, width, height, tile, NET_LINE_WIDTH, true);

    if let Some(food) = state.food {
        render_tiles(
            surface,
            &[food],
            tile,
            &styles.food_color,
            &styles.food_border_color,
        );
    }
    if let Some(snake) = &state.snake {
        render_tiles(
            surface,
            &snake.body,
            tile,
            &styles.snake_color,
            &styles.snake_border_color,
        );
    }
    render_tiles(
        surface,
        &state.blocks,
        tile,
        &styles.block_color,
        &styles.block_border_color,
    );
}

pub fn render_background<S: Surface + ?Sized>(surface: &mut S, width: f64, height: f64, color: &str) {
    surface.set_fill_style(color);
    surface.fill_rect(0.0, 0.0, width, height);
}

/// Grid lines every `tile` pixels. Horizontal lines are optional so the teaser can
/// reveal them later than the vertical ones.
pub fn render_net<S: Surface + ?Sized>(
    surface: &mut S,
    width: f64,
    height: f64,
    tile: f64,
    line_width: f64,
    horizontal: bool,
) {
    surface.set_line_width(line_width);
    surface.set_stroke_style(DEFAULT_NET_COLOR);

    for i in 0..line_count(width, tile) {
        let x = i as f64 * tile;
        line(surface, x, 0.0, x, height);
    }
    if horizontal {
        for i in 0..line_count(height, tile) {
            let y = i as f64 * tile;
            line(surface, 0.0, y, width, y);
        }
    }
}

// Lines at 0, tile, 2*tile.. up to and including `extent`. Extents the canvas
// could never have draw nothing.
fn line_count(extent: f64, tile: f64) -> usize {
    if !(extent >= 0.0 && extent <= MAX_CANVAS_SIZE && tile > 0.0) {
        return 0;
    }
    (extent / tile).floor() as usize + 1
}

/// Filled + outlined square per cell.
pub fn render_tiles<S: Surface + ?Sized>(
    surface: &mut S,
    cells: &[Cell],
    tile: f64,
    color: &str,
    border_color: &str,
) {
    surface.set_fill_style(color);
    surface.set_stroke_style(border_color);
    for &cell in cells {
        let (x, y) = cell_origin(cell, tile);
        surface.fill_rect(x, y, tile, tile);
        render_border(surface, x, y, tile, tile);
    }
}

pub fn render_border<S: Surface + ?Sized>(surface: &mut S, x: f64, y: f64, w: f64, h: f64) {
    surface.begin_path();
    surface.move_to(x, y);
    surface.line_to(x + w, y);
    surface.line_to(x + w, y + h);
    surface.line_to(x, y + h);
    surface.line_to(x, y);
    surface.stroke();
}

/// Top-left pixel of a cell.
pub fn cell_origin(cell: Cell, tile: f64) -> (f64, f64) {
    (cell.col as f64 * tile, cell.row as f64 * tile)
}

fn line<S: Surface + ?Sized>(surface: &mut S, x1: f64, y1: f64, x2: f64, y2: f64) {
    surface.begin_path();
    surface.move_to(x1, y1);
    surface.line_to(x2, y2);
    surface.stroke();
}

/// Surface that records every call, for asserting on what was drawn.
#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear(f64, f64, f64, f64),
        Fill(f64, f64, f64, f64),
        FillStyle(String),
        StrokeStyle(String),
        LineWidth(f64),
        BeginPath,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Stroke,
    }

    #[derive(Default)]
    pub struct Recorder {
        pub ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.ops.push(Op::Clear(x, y, w, h));
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.ops.push(Op::Fill(x, y, w, h));
        }
        fn set_fill_style(&mut self, color: &str) {
            self.ops.push(Op::FillStyle(color.to_string()));
        }
        fn set_stroke_style(&mut self, color: &str) {
            self.ops.push(Op::StrokeStyle(color.to_string()));
        }
        fn set_line_width(&mut self, width: f64) {
            self.ops.push(Op::LineWidth(width));
        }
        fn begin_path(&mut self) {
            self.ops.push(Op::BeginPath);
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.ops.push(Op::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.ops.push(Op::LineTo(x, y));
        }
        fn stroke(&mut self) {
            self.ops.push(Op::Stroke);
        }
    }

    impl Recorder {
        pub fn fills(&self) -> Vec<(f64, f64, f64, f64)> {
            self.ops
                .iter()
                .filter_map(|op| match *op {
                    Op::Fill(x, y, w, h) => Some((x, y, w, h)),
                    _ => None,
                })
                .collect()
        }

        pub fn strokes(&self) -> usize {
            self.ops.iter().filter(|op| **op == Op::Stroke).count()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{Op, Recorder};
    use super::*;
    use crate::config::AnimationConfig;
    use crate::grid::Direction;

    fn state() -> AnimationState {
        AnimationState::new(AnimationConfig {
            width: 90.0,
            height: 60.0,
            blocks: vec![Cell::new(0, 2)],
            snake_positions: Some(vec![Cell::new(1, 1), Cell::new(1, 0)]),
            snake_direction: Some(Direction::Right),
            food_positions: Some(vec![Cell::new(0, 0)]),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn frame_order_and_tiles() {
        let state = state();
        let mut rec = Recorder::default();
        render_animation(&mut rec, &state, &Styles::default(), &Tuning::default());

        assert_eq!(rec.ops[0], Op::Clear(0.0, 0.0, 90.0, 60.0));
        assert_eq!(
            rec.fills(),
            vec![
                (0.0, 0.0, 90.0, 60.0),   // background
                (0.0, 0.0, 30.0, 30.0),   // food
                (30.0, 30.0, 30.0, 30.0), // head
                (0.0, 30.0, 30.0, 30.0),  // tail
                (60.0, 0.0, 30.0, 30.0),  // block
            ]
        );
        // 4 vertical + 3 horizontal net lines, then one outline per tile.
        assert_eq!(rec.strokes(), 7 + 4);
    }

    #[test]
    fn missing_style_keys_use_defaults() {
        let state = state();
        let styles: Styles = serde_json::from_str(r##"{"snakeColor": "#00d1b2"}"##).unwrap();
        let mut rec = Recorder::default();
        render_animation(&mut rec, &state, &styles, &Tuning::default());

        let fill_styles: Vec<&str> = rec
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::FillStyle(c) => Some(c.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(fill_styles, vec!["white", "#ffdd57", "#00d1b2", "#b9c49d"]);
    }

    #[test]
    fn resize_to_infinity_renders_a_bounded_net() {
        let mut state = state();
        state.set_size(f64::INFINITY, 450.0);
        let mut rec = Recorder::default();
        render_animation(&mut rec, &state, &Styles::default(), &Tuning::default());

        let vertical = (MAX_CANVAS_SIZE / 30.0).floor() as usize + 1;
        assert_eq!(rec.strokes(), vertical + 16 + 4);
    }

    #[test]
    fn net_skips_extents_no_canvas_has() {
        let mut rec = Recorder::default();
        render_net(&mut rec, f64::INFINITY, f64::NAN, 30.0, 1.0, true);
        render_net(&mut rec, -30.0, 60.0, 30.0, 1.0, false);
        assert_eq!(rec.strokes(), 0);
    }

    #[test]
    fn border_is_closed_square() {
        let mut rec = Recorder::default();
        render_border(&mut rec, 30.0, 60.0, 30.0, 30.0);
        assert_eq!(
            rec.ops,
            vec![
                Op::BeginPath,
                Op::MoveTo(30.0, 60.0),
                Op::LineTo(60.0, 60.0),
                Op::LineTo(60.0, 90.0),
                Op::LineTo(30.0, 90.0),
                Op::LineTo(30.0, 60.0),
                Op::Stroke,
            ]
        );
    }
}
