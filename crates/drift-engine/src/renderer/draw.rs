use glam::Vec2;
use serde::Serialize;

use crate::api::types::EntityId;
use crate::components::shape::ShapeKind;
use crate::math::Color;

/// One filled primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeDraw {
    pub id: EntityId,
    pub kind: ShapeKind,
    pub position: Vec2,
    pub scale: Vec2,
    pub angle: f32,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outline {
    pub color: Color,
    pub width: f32,
}

/// A trace, already cut into connected runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceDraw {
    pub color: Color,
    pub width: f32,
    pub polylines: Vec<Vec<Vec2>>,
}

/// Outline rectangle around a selected entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HighlightDraw {
    pub position: Vec2,
    pub size: Vec2,
    pub color: Color,
}

/// Camera parameters the host needs to map world units to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewDraw {
    pub position: Vec2,
    pub zoom: f32,
    pub viewport: Vec2,
}

/// Everything drawable for one frame, back to front:
/// traces, then shapes, then highlights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawList {
    pub view: ViewDraw,
    pub world_size: Vec2,
    pub interpolation: f32,
    pub show_debug: bool,
    pub traces: Vec<TraceDraw>,
    pub shapes: Vec<ShapeDraw>,
    pub highlights: Vec<HighlightDraw>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            view: ViewDraw {
                position: Vec2::ZERO,
                zoom: 1.0,
                viewport: Vec2::ZERO,
            },
            world_size: Vec2::ZERO,
            interpolation: 0.0,
            show_debug: false,
            traces: Vec::new(),
            shapes: Vec::with_capacity(512),
            highlights: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.traces.clear();
        self.shapes.clear();
        self.highlights.clear();
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
