use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::input::keys::{Control, Key, MouseButton};
use crate::input::queue::InputEvent;

/// Continuous input state folded from queued events.
///
/// Besides what is held right now, it remembers which controls went down
/// since the last simulation update so a tap shorter than one frame is
/// still seen.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    down: HashSet<Control>,
    pressed: HashSet<Control>,
    pointer: Vec2,
    wheel: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.pointer = Vec2::new(x, y),
            InputEvent::PointerDown { button, x, y } => {
                self.pointer = Vec2::new(x, y);
                self.press(button.into());
            }
            InputEvent::PointerUp { button, x, y } => {
                self.pointer = Vec2::new(x, y);
                self.down.remove(&Control::Button(button));
            }
            InputEvent::KeyDown { key } => self.press(key.into()),
            InputEvent::KeyUp { key } => {
                self.down.remove(&Control::Key(key));
            }
            InputEvent::Wheel { delta } => self.wheel += delta,
        }
    }

    fn press(&mut self, control: Control) {
        if self.down.insert(control) {
            self.pressed.insert(control);
        }
    }

    pub fn is_down(&self, control: impl Into<Control>) -> bool {
        self.down.contains(&control.into())
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.is_down(key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.is_down(button)
    }

    /// Went down since the last `end_update`.
    pub fn was_pressed(&self, control: impl Into<Control>) -> bool {
        self.pressed.contains(&control.into())
    }

    /// Pointer position in screen pixels.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Wheel movement accumulated since the last `end_update`.
    pub fn wheel(&self) -> f32 {
        self.wheel
    }

    /// Forget per-update edges once a simulation update has consumed them.
    pub fn end_update(&mut self) {
        self.pressed.clear();
        self.wheel = 0.0;
    }

    /// Drop everything, e.g. when the host loses focus.
    pub fn reset(&mut self) {
        self.down.clear();
        self.end_update();
    }
}

/// Turns held state into press edges with a maximum press duration.
///
/// `started` fires once when a control goes down; `ended` fires once when
/// it comes back up, but only if it was held for less than `max_duration_ms`.
/// Times come from the caller's clock.
#[derive(Debug, Clone)]
pub struct PressTracker {
    max_duration_ms: f64,
    started_at: HashMap<Control, f64>,
}

impl PressTracker {
    pub const DEFAULT_DURATION_MS: f64 = 200.0;

    pub fn new(max_duration_ms: f64) -> Self {
        Self {
            max_duration_ms,
            started_at: HashMap::new(),
        }
    }

    pub fn started(&mut self, control: impl Into<Control>, input: &InputState, now_ms: f64) -> bool {
        let control = control.into();
        let active = input.is_down(control) || input.was_pressed(control);
        if active && !self.started_at.contains_key(&control) {
            self.started_at.insert(control, now_ms);
            return true;
        }
        false
    }

    pub fn ended(&mut self, control: impl Into<Control>, input: &InputState, now_ms: f64) -> bool {
        let control = control.into();
        if input.is_down(control) {
            return false;
        }
        match self.started_at.remove(&control) {
            Some(start) => now_ms - start < self.max_duration_ms,
            None => false,
        }
    }

    /// `started` then `ended`, for callers that only care about completed presses.
    pub fn pressed(&mut self, control: impl Into<Control>, input: &InputState, now_ms: f64) -> bool {
        let control = control.into();
        self.started(control, input, now_ms);
        self.ended(control, input, now_ms)
    }

    /// Forget every press in progress.
    pub fn clear(&mut self) {
        self.started_at.clear();
    }
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION_MS)
    }
}
