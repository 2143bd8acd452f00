use glam::Vec2;

use crate::core::world::World;
use crate::math::Rng;

/// Initial world content the sandbox can load.
pub trait Scenario {
    fn name(&self) -> &'static str;

    /// World extent this scenario is laid out for.
    fn world_size(&self) -> Vec2;

    /// Spawn the scenario's entities into an empty world.
    fn populate(&self, world: &mut World, rng: &mut Rng);
}
