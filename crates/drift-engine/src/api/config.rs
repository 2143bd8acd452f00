use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::time::MainLoop;
use crate::input::state::PressTracker;

/// Configuration for the sandbox, provided by the host.
///
/// Every field has a default, so hosts only send what they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// World extent in world units, centred on the origin.
    pub world_size: Vec2,
    /// Viewport size in screen pixels.
    pub viewport_size: Vec2,
    /// Fixed simulation timestep in milliseconds (default: 1000/60).
    pub simulation_timestep_ms: f64,
    /// Maximum fixed updates per frame before the backlog is dropped.
    pub max_update_steps: u32,
    /// Weight of the newest FPS sample.
    pub fps_alpha: f64,
    pub fps_update_interval_ms: f64,
    /// Longest hold that still counts as a press.
    pub press_duration_ms: f64,
    /// Minimum half-size used when picking small entities.
    pub pick_radius: f32,
    pub camera_pan_speed: f32,
    pub camera_follow_factor: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Seed for every random draw the sandbox makes.
    pub seed: u64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            world_size: Vec2::new(5000.0, 2400.0),
            viewport_size: Vec2::new(1280.0, 720.0),
            simulation_timestep_ms: MainLoop::DEFAULT_TIMESTEP,
            max_update_steps: MainLoop::DEFAULT_MAX_UPDATE_STEPS,
            fps_alpha: 0.9,
            fps_update_interval_ms: 1000.0,
            press_duration_ms: PressTracker::DEFAULT_DURATION_MS,
            pick_radius: 5.0,
            camera_pan_speed: 10.0,
            camera_follow_factor: 0.1,
            min_zoom: 0.01,
            max_zoom: 1000.0,
            seed: 0x5EED_CAFE,
        }
    }
}

impl SandboxConfig {
    /// Parse a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// A main loop matching this config's timing fields.
    pub fn main_loop(&self) -> MainLoop {
        MainLoop::new(self.simulation_timestep_ms)
            .with_max_update_steps(self.max_update_steps)
            .with_fps_smoothing(self.fps_alpha, self.fps_update_interval_ms)
    }
}
