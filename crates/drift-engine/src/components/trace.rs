use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::Color;

/// Polyline of recent positions, bounded to `max_points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub width: f32,
    pub color: Color,
    #[serde(default)]
    pub points: VecDeque<Vec2>,
    pub max_points: usize,
}

impl Trace {
    pub const DEFAULT_MAX_POINTS: usize = 25;

    pub fn new(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            points: VecDeque::with_capacity(Self::DEFAULT_MAX_POINTS),
            max_points: Self::DEFAULT_MAX_POINTS,
        }
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Append a point, dropping the oldest ones beyond `max_points`.
    pub fn record(&mut self, point: Vec2) {
        self.points.push_back(point);
        while self.points.len() > self.max_points {
            self.points.pop_front();
        }
    }
}
