// Browser smoke tests, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use snake_cover::web::{SnakeAnimation, TeaserAnimation, start_cover_animation};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) -> HtmlCanvasElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_id(id);
    canvas.set_height(450);
    doc.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn cover_animation_starts_and_stops() {
    mount_canvas("cover-test");
    let mut anim = start_cover_animation("cover-test", None).unwrap();
    assert!(anim.running());
    anim.stop();
    assert!(!anim.running());
    // Stopping twice is harmless.
    anim.stop();
}

#[wasm_bindgen_test]
fn malformed_config_is_rejected() {
    mount_canvas("bad-config");
    let err = SnakeAnimation::start("bad-config", None, r#"{"snakeDirection": "UP"}"#);
    assert!(err.is_err());
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    assert!(TeaserAnimation::start("does-not-exist", None).is_err());
}

#[wasm_bindgen_test]
fn teaser_starts_and_stops() {
    mount_canvas("teaser-test");
    let mut teaser = TeaserAnimation::start("teaser-test", None).unwrap();
    assert!(teaser.running());
    teaser.stop();
    assert!(!teaser.running());
}
