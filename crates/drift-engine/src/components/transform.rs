use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// World-space size, not a multiplier.
    pub scale: Vec2,
    /// Rotation in radians.
    #[serde(default)]
    pub angle: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            angle: 0.0,
        }
    }
}

impl Transform {
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            scale,
            angle: 0.0,
        }
    }

    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}
