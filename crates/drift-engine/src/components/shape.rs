use serde::{Deserialize, Serialize};

use crate::math::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShapeKind {
    #[default]
    Rectangle = 0,
    Ellipse = 1,
    Triangle = 2,
}

/// Filled primitive drawn at the entity's transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub color: Color,
    #[serde(default)]
    pub kind: ShapeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f32>,
}

impl Shape {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            kind: ShapeKind::Rectangle,
            outline_color: None,
            outline_width: None,
        }
    }

    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_outline(mut self, color: Color, width: f32) -> Self {
        self.outline_color = Some(color);
        self.outline_width = Some(width);
        self
    }
}
