use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Steers an entity toward `target`; removed on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    pub target: Vec2,
    /// Fraction of the remaining offset used as velocity each tick.
    pub slow_factor: f32,
    /// Distance at which the entity counts as arrived.
    pub arrive_threshold: f32,
}

impl Navigation {
    pub const DEFAULT_SLOW_FACTOR: f32 = 0.01;
    pub const DEFAULT_ARRIVE_THRESHOLD: f32 = 10.0;

    pub fn new(target: Vec2) -> Self {
        Self {
            target,
            slow_factor: Self::DEFAULT_SLOW_FACTOR,
            arrive_threshold: Self::DEFAULT_ARRIVE_THRESHOLD,
        }
    }
}

/// Marks an entity as accepting navigation commands while selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationRecipient {}
