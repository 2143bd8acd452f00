use serde::{Deserialize, Serialize};

/// Which end of the world list emitted particles are inserted at.
///
/// Background particles are prepended so they draw under everything
/// already in the world; foreground particles are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    #[default]
    Foreground = 1,
}

impl RenderLayer {
    /// Convert from a u8 value to a RenderLayer.
    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Background),
            1 => Some(Self::Foreground),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
