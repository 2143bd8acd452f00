use serde::{Deserialize, Serialize};

/// Scheduled removal. A zero duration means "remove on the next pass".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Expiration {
    #[serde(default)]
    pub elapsed_ms: f32,
    pub duration_ms: f32,
}

impl Expiration {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            elapsed_ms: 0.0,
            duration_ms,
        }
    }

    /// Expire on the next expiration pass.
    pub fn immediate() -> Self {
        Self::new(0.0)
    }

    pub fn is_due(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}
