use serde::{Deserialize, Serialize};

use crate::math::Color;

/// Entity can be picked with the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selectable {
    #[serde(default)]
    pub highlight: bool,
    pub highlight_color: Color,
}

impl Selectable {
    pub const DEFAULT_HIGHLIGHT: Color = Color::new(0.0, 100.0, 100.0, 1.0);
}

impl Default for Selectable {
    fn default() -> Self {
        Self {
            highlight: false,
            highlight_color: Self::DEFAULT_HIGHLIGHT,
        }
    }
}
