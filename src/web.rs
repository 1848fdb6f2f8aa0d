//! Browser glue: finds the canvas, runs the fixed-interval loop and follows
//! window resizes. Everything here is a thin shell around the pure core; the
//! simulation and drawing live in `animation`, `render` and `teaser`.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window, window};

use crate::animation::AnimationState;
use crate::clock::DeltaClock;
use crate::config::{AnimationConfig, ConfigError, Tuning};
use crate::presets;
use crate::render::render_animation;
use crate::teaser::{TEASER_PERIOD_MS, Teaser};

/// Live interval + resize listener. Dropping the closures releases everything they
/// captured, including the 2D context.
struct Running {
    window: Window,
    interval_id: i32,
    _tick: Closure<dyn FnMut()>,
    resize: Closure<dyn FnMut()>,
}

impl Running {
    fn schedule(
        window: &Window,
        period_ms: i32,
        tick: Closure<dyn FnMut()>,
        resize: Closure<dyn FnMut()>,
    ) -> Result<Self, JsValue> {
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
        let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            window: window.clone(),
            interval_id,
            _tick: tick,
            resize,
        })
    }

    fn cancel(self) {
        self.window.clear_interval_with_handle(self.interval_id);
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref())
        {
            warn!("could not detach resize listener: {err:?}");
        }
    }
}

/// Handle to a running snake animation. Call `stop()` (or `free()`) to cancel it.
#[wasm_bindgen]
pub struct SnakeAnimation {
    state: Rc<RefCell<AnimationState>>,
    running: Option<Running>,
}

#[wasm_bindgen]
impl SnakeAnimation {
    /// Start an animation described by a JSON config on the canvas `canvas_id`. The
    /// canvas width follows `container_id` (or the window when absent).
    pub fn start(
        canvas_id: &str,
        container_id: Option<String>,
        config_json: &str,
    ) -> Result<SnakeAnimation, JsValue> {
        let config = AnimationConfig::from_json(config_json).map_err(to_js)?;
        Self::launch(canvas_id, container_id.as_deref(), config)
    }

    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.cancel();
            info!("snake animation stopped");
        }
    }

    /// Override the drawing area, e.g. when the host manages layout itself.
    pub fn resize(&self, width: f64, height: f64) {
        self.state.borrow_mut().set_size(width, height);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running.is_some()
    }
}

impl SnakeAnimation {
    fn launch(
        canvas_id: &str,
        container_id: Option<&str>,
        mut config: AnimationConfig,
    ) -> Result<Self, JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let doc = win
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = canvas_by_id(&doc, canvas_id)?;
        let container = container_by_id(&doc, container_id)?;
        let mut ctx = context_2d(&canvas)?;

        let width = container_width(&win, container.as_ref());
        canvas.set_width(width as u32);
        config.width = width;
        config.height = canvas.height() as f64;

        let styles = config.styles.clone();
        let tuning = config.tuning;
        let state = Rc::new(RefCell::new(AnimationState::new(config).map_err(to_js)?));

        let tick = {
            let state = state.clone();
            let win = win.clone();
            let mut clock = DeltaClock::new(now(&win));
            Closure::wrap(Box::new(move || {
                let delta = clock.lap(now(&win));
                let mut state = state.borrow_mut();
                state.tick(delta);
                render_animation(&mut ctx, &state, &styles, &tuning);
            }) as Box<dyn FnMut()>)
        };

        let resize = {
            let state = state.clone();
            let win = win.clone();
            Closure::wrap(Box::new(move || {
                let width = container_width(&win, container.as_ref());
                canvas.set_width(width as u32);
                state
                    .borrow_mut()
                    .set_size(width, canvas.height() as f64);
            }) as Box<dyn FnMut()>)
        };

        let running = Running::schedule(&win, tuning.loop_delay_ms, tick, resize)?;
        info!("snake animation started on #{canvas_id} ({width}px wide)");
        Ok(Self {
            state,
            running: Some(running),
        })
    }
}

impl Drop for SnakeAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start the built-in cover-page animation.
#[wasm_bindgen]
pub fn start_cover_animation(
    canvas_id: &str,
    container_id: Option<String>,
) -> Result<SnakeAnimation, JsValue> {
    SnakeAnimation::launch(canvas_id, container_id.as_deref(), presets::cover())
}

/// Handle to the looping teaser canvas.
#[wasm_bindgen]
pub struct TeaserAnimation {
    teaser: Rc<RefCell<Teaser>>,
    running: Option<Running>,
}

#[wasm_bindgen]
impl TeaserAnimation {
    pub fn start(canvas_id: &str, container_id: Option<String>) -> Result<TeaserAnimation, JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let doc = win
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = canvas_by_id(&doc, canvas_id)?;
        let container = container_by_id(&doc, container_id.as_deref())?;
        let mut ctx = context_2d(&canvas)?;

        let width = container_width(&win, container.as_ref());
        canvas.set_width(width as u32);
        let tile_size = Tuning::default().tile_size;
        let teaser = Rc::new(RefCell::new(Teaser::new(
            width,
            canvas.height() as f64,
            tile_size,
        )));

        let tick = {
            let teaser = teaser.clone();
            Closure::wrap(Box::new(move || {
                let mut teaser = teaser.borrow_mut();
                teaser.advance();
                teaser.render(&mut ctx);
            }) as Box<dyn FnMut()>)
        };

        let resize = {
            let teaser = teaser.clone();
            let win = win.clone();
            Closure::wrap(Box::new(move || {
                let width = container_width(&win, container.as_ref());
                canvas.set_width(width as u32);
                teaser
                    .borrow_mut()
                    .set_size(width, canvas.height() as f64);
            }) as Box<dyn FnMut()>)
        };

        let running = Running::schedule(&win, TEASER_PERIOD_MS, tick, resize)?;
        info!("teaser started on #{canvas_id}");
        Ok(Self {
            teaser,
            running: Some(running),
        })
    }

    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.cancel();
            info!("teaser stopped");
        }
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.teaser.borrow_mut().set_size(width, height);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running.is_some()
    }
}

impl Drop for TeaserAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn now(win: &Window) -> f64 {
    win.performance().map(|p| p.now()).unwrap_or(0.0)
}

fn canvas_by_id(doc: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let el = doc
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{id}")))?;
    Ok(el.dyn_into()?)
}

fn container_by_id(doc: &Document, id: Option<&str>) -> Result<Option<HtmlElement>, JsValue> {
    let Some(id) = id else {
        return Ok(None);
    };
    let el = doc
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{id}")))?;
    Ok(Some(el.dyn_into()?))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?;
    Ok(ctx.dyn_into()?)
}

// Canvas width tracks its container, or the whole window when there is none.
fn container_width(win: &Window, container: Option<&HtmlElement>) -> f64 {
    match container {
        Some(el) => el.client_width() as f64,
        None => win
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0),
    }
}
