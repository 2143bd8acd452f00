use glam::Vec2;

use crate::components::entity::ComponentKind;
use crate::core::world::World;

/// Velocity multiplier applied instead of acceleration when a step would exceed `max_speed`.
pub const DAMPING: f32 = 0.95;

/// Integrate every `Transform + Motion` entity over `dt` ms.
///
/// Position uses the velocity from before this tick. If `velocity +
/// acceleration * dt` would exceed `max_speed`, the acceleration is dropped
/// and the current velocity damped instead. Wrapping entities that leave
/// `±world_size / 2` on an axis reappear at the opposite edge.
pub fn tick_movement(world: &mut World, world_size: Vec2, dt: f32) {
    let half = world_size / 2.0;
    world.for_each_with(&[ComponentKind::Transform, ComponentKind::Motion], |entity| {
        let (Some(transform), Some(motion)) = (entity.transform.as_mut(), entity.motion.as_mut()) else {
            return;
        };

        transform.position += motion.velocity * dt;
        transform.angle += motion.angular_velocity * dt;

        let candidate = motion.velocity + motion.acceleration * dt;
        if candidate.length() <= motion.max_speed {
            motion.velocity = candidate;
        } else {
            motion.velocity *= DAMPING;
        }
        motion.angular_velocity += motion.angular_acceleration * dt;

        if motion.wraparound {
            transform.position.x = wrap(transform.position.x, half.x);
            transform.position.y = wrap(transform.position.y, half.y);
        }
    });
}

#[inline]
fn wrap(value: f32, half: f32) -> f32 {
    if value > half {
        -half
    } else if value < -half {
        half
    } else {
        value
    }
}
