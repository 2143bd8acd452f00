use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::api::types::EntityId;

/// Inverse-cube attractor centred on the entity's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceField {
    pub mass: f32,
    /// Radius inside which a destructive field removes subjects.
    pub radius: f32,
    pub destructive: bool,
    pub enabled: bool,
}

impl Default for ForceField {
    fn default() -> Self {
        Self {
            mass: 1.0,
            radius: 1.0,
            destructive: true,
            enabled: true,
        }
    }
}

impl ForceField {
    pub fn new(mass: f32, radius: f32) -> Self {
        Self {
            mass,
            radius,
            ..Default::default()
        }
    }

    pub fn with_destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Entity is pulled by the listed fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForceFieldSubject {
    pub field_ids: BTreeSet<EntityId>,
}

impl ForceFieldSubject {
    pub fn new(field_ids: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            field_ids: field_ids.into_iter().collect(),
        }
    }
}
