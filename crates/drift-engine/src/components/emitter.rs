use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::EntityId;
use crate::components::layer::RenderLayer;
use crate::math::Color;

/// Component for spawning particles from an entity's position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleEmitter {
    /// Half-angle of the emission cone, radians.
    pub spread: f32,
    /// Base particle velocity; its direction is the cone axis.
    pub velocity: Vec2,
    /// Speed is drawn from `[|velocity|, |velocity| * velocity_randomness]`.
    pub velocity_randomness: f32,
    /// Half-width of the spawn slit.
    pub size: f32,
    pub start_color: Color,
    pub end_color: Color,
    /// Particles per millisecond.
    pub emission_rate: f32,
    pub particle_size: f32,
    pub particle_size_randomness: f32,
    /// Particle lifespan in milliseconds.
    pub particle_lifespan: f32,
    pub particle_lifespan_randomness: f32,
    pub enabled: bool,
    #[serde(default)]
    pub layer: RenderLayer,
    /// Force fields every emitted particle is subject to.
    #[serde(default)]
    pub field_ids: Vec<EntityId>,
    /// Time accumulated toward the next emission.
    #[serde(default)]
    emission_timer: f32,
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self {
            spread: std::f32::consts::TAU,
            velocity: Vec2::ZERO,
            velocity_randomness: 1.0,
            size: 1.0,
            start_color: Color::TRANSPARENT,
            end_color: Color::TRANSPARENT,
            emission_rate: 1.0,
            particle_size: 1.0,
            particle_size_randomness: 1.0,
            particle_lifespan: 1.0,
            particle_lifespan_randomness: 1.0,
            enabled: true,
            layer: RenderLayer::Foreground,
            field_ids: Vec::new(),
            emission_timer: 0.0,
        }
    }
}

impl ParticleEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder pattern --

    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2, randomness: f32) -> Self {
        self.velocity = velocity;
        self.velocity_randomness = randomness;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_colors(mut self, start: Color, end: Color) -> Self {
        self.start_color = start;
        self.end_color = end;
        self
    }

    pub fn with_rate(mut self, emission_rate: f32) -> Self {
        self.emission_rate = emission_rate;
        self
    }

    pub fn with_particle_size(mut self, size: f32, randomness: f32) -> Self {
        self.particle_size = size;
        self.particle_size_randomness = randomness;
        self
    }

    pub fn with_lifespan(mut self, lifespan_ms: f32, randomness: f32) -> Self {
        self.particle_lifespan = lifespan_ms;
        self.particle_lifespan_randomness = randomness;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_fields(mut self, field_ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.field_ids = field_ids.into_iter().collect();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Milliseconds between two emissions.
    pub fn period(&self) -> f32 {
        1.0 / self.emission_rate
    }

    pub fn emission_timer(&self) -> f32 {
        self.emission_timer
    }

    /// Advance the emitter by `dt` milliseconds. Returns the number of particles to spawn.
    ///
    /// The remainder is kept in the timer, which stays within `[0, period)`.
    pub fn tick(&mut self, dt: f32) -> usize {
        if !self.enabled || !(self.emission_rate > 0.0) {
            return 0;
        }

        self.emission_timer += dt;
        let period = self.period();
        if self.emission_timer < period {
            return 0;
        }
        let count = (self.emission_timer / period).floor();
        self.emission_timer = (self.emission_timer - count * period).max(0.0);
        if self.emission_timer >= period {
            self.emission_timer = 0.0;
        }
        count as usize
    }
}
