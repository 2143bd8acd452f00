use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::EntityId;

/// Axis-aligned collider centred on the entity's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionDetection {
    pub half_extents: Vec2,
}

impl CollisionDetection {
    pub fn new(half_extents: Vec2) -> Self {
        Self { half_extents }
    }
}

/// Transient tag left by collision detection, consumed by collision handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionHandling {
    pub collided_with: EntityId,
}
