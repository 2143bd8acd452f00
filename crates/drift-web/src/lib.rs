pub mod runner;

pub use runner::SandboxRunner;

use std::cell::RefCell;

use drift_engine::{InputEvent, Key, MouseButton, SandboxConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SandboxRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SandboxRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Sandbox not initialized. Call sandbox_init() first.");
        f(runner)
    })
}

/// Create the sandbox. `config_json` may hold any subset of `SandboxConfig`;
/// without a seed the sandbox is seeded from `Math.random()`.
#[wasm_bindgen]
pub fn sandbox_init(config_json: Option<String>, timestamp: f64) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json.as_deref() {
        Some(json) => SandboxConfig::from_json(json).map_err(|e| {
            let message = JsValue::from_str(&format!("drift: bad config: {}", e));
            web_sys::console::error_1(&message);
            message
        })?,
        None => SandboxConfig {
            seed: (js_sys::Math::random() * u32::MAX as f64) as u64 + 1,
            ..SandboxConfig::default()
        },
    };

    let mut runner = SandboxRunner::new(config);
    runner.init(timestamp);
    let entities = runner.sandbox().world.len();
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("drift: initialized with {} entities", entities);
    Ok(())
}

#[wasm_bindgen]
pub fn sandbox_start(timestamp: f64) {
    with_runner(|r| r.start(timestamp));
}

#[wasm_bindgen]
pub fn sandbox_stop() {
    with_runner(|r| r.stop());
}

/// Advance one animation frame. Returns false if nothing was drawn.
#[wasm_bindgen]
pub fn sandbox_frame(timestamp: f64) -> bool {
    with_runner(|r| r.frame(timestamp))
}

#[wasm_bindgen]
pub fn sandbox_resize(width: f32, height: f32) {
    with_runner(|r| r.sandbox_mut().resize(glam::Vec2::new(width, height)));
}

// ---- Input ----

#[wasm_bindgen]
pub fn sandbox_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn sandbox_pointer_down(button: u32, x: f32, y: f32) {
    if let Some(button) = MouseButton::from_index(button) {
        with_runner(|r| r.push_input(InputEvent::PointerDown { button, x, y }));
    }
}

#[wasm_bindgen]
pub fn sandbox_pointer_up(button: u32, x: f32, y: f32) {
    if let Some(button) = MouseButton::from_index(button) {
        with_runner(|r| r.push_input(InputEvent::PointerUp { button, x, y }));
    }
}

/// `code` is a DOM `KeyboardEvent.code`; unknown keys are ignored.
#[wasm_bindgen]
pub fn sandbox_key_down(code: &str) {
    if let Some(key) = Key::from_code(code) {
        with_runner(|r| r.push_input(InputEvent::KeyDown { key }));
    }
}

#[wasm_bindgen]
pub fn sandbox_key_up(code: &str) {
    if let Some(key) = Key::from_code(code) {
        with_runner(|r| r.push_input(InputEvent::KeyUp { key }));
    }
}

#[wasm_bindgen]
pub fn sandbox_wheel(delta: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
}

/// Call from the window `blur` handler.
#[wasm_bindgen]
pub fn sandbox_blur() {
    with_runner(|r| r.focus_lost());
}

// ---- Persistence ----

#[wasm_bindgen]
pub fn sandbox_save() -> Result<String, JsValue> {
    with_runner(|r| r.save()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Replace the world with a snapshot. Returns the number of loaded entities.
#[wasm_bindgen]
pub fn sandbox_load(json: &str) -> Result<u32, JsValue> {
    with_runner(|r| r.load(json))
        .map(|count| count as u32)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn sandbox_load_scenario(slot: u8) -> bool {
    with_runner(|r| r.sandbox_mut().load_builtin(slot))
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_instance_floats() -> u32 {
    drift_engine::ShapeInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const u32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

/// Full draw list for canvas hosts.
#[wasm_bindgen]
pub fn get_frame_json() -> Result<String, JsValue> {
    with_runner(|r| r.frame_json()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn get_fps() -> f64 {
    with_runner(|r| r.fps())
}

#[wasm_bindgen]
pub fn get_panic() -> bool {
    with_runner(|r| r.panicked())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.sandbox().world_size().x)
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.sandbox().world_size().y)
}
