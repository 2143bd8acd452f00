use serde::{Deserialize, Serialize};

/// Unique identifier for an entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

/// Notification raised by the sandbox for the host to act on.
/// Drained once per frame via `Sandbox::drain_events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SandboxEvent {
    /// The user asked to persist the world; the host owns storage.
    SaveRequested,
    /// The user asked to restore the last saved world.
    LoadRequested,
    /// A built-in scenario replaced the world.
    ScenarioLoaded(u8),
    /// The simulation was paused or resumed.
    RunningChanged(bool),
    /// The debug overlay was toggled.
    DebugToggled(bool),
}

impl SandboxEvent {
    /// Numeric kind used when events cross the WASM boundary.
    pub fn code(self) -> u32 {
        match self {
            SandboxEvent::SaveRequested => 1,
            SandboxEvent::LoadRequested => 2,
            SandboxEvent::ScenarioLoaded(_) => 3,
            SandboxEvent::RunningChanged(_) => 4,
            SandboxEvent::DebugToggled(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&EntityId(7)).unwrap(), "7");
        let id: EntityId = serde_json::from_str("12").unwrap();
        assert_eq!(id, EntityId(12));
    }

    #[test]
    fn event_codes_are_distinct() {
        let codes = [
            SandboxEvent::SaveRequested.code(),
            SandboxEvent::LoadRequested.code(),
            SandboxEvent::ScenarioLoaded(1).code(),
            SandboxEvent::RunningChanged(true).code(),
            SandboxEvent::DebugToggled(false).code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
