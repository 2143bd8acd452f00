use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear and angular kinematics. Inert without a `Transform`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub velocity: Vec2,
    /// Speed above which acceleration is dropped and velocity damped.
    pub max_speed: f32,
    pub acceleration: Vec2,
    #[serde(default)]
    pub angular_velocity: f32,
    #[serde(default)]
    pub angular_acceleration: f32,
    /// Teleport to the opposite world edge instead of leaving the world.
    #[serde(default = "default_wraparound")]
    pub wraparound: bool,
}

fn default_wraparound() -> bool {
    true
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            max_speed: Self::UNBOUNDED,
            acceleration: Vec2::ZERO,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            wraparound: true,
        }
    }
}

impl Motion {
    /// Finite stand-in for "no speed limit" that survives a JSON round trip.
    pub const UNBOUNDED: f32 = f32::MAX;

    pub fn new(velocity: Vec2, max_speed: f32, acceleration: Vec2) -> Self {
        Self {
            velocity,
            max_speed,
            acceleration,
            ..Default::default()
        }
    }

    pub fn with_angular(mut self, velocity: f32, acceleration: f32) -> Self {
        self.angular_velocity = velocity;
        self.angular_acceleration = acceleration;
        self
    }

    pub fn with_wraparound(mut self, wraparound: bool) -> Self {
        self.wraparound = wraparound;
        self
    }
}
