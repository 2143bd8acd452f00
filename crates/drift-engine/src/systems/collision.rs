use crate::api::types::EntityId;
use crate::components::collision::CollisionHandling;
use crate::components::entity::ComponentKind;
use crate::core::world::World;
use crate::math::Aabb;

/// Tag every moving collider with the first entity its box overlaps.
///
/// Colliders are `Transform + Motion + CollisionDetection`; candidates only
/// need `Transform + CollisionDetection`. Boxes are snapshotted first so
/// tagging never affects later comparisons. Returns how many were tagged.
pub fn detect_collisions(world: &mut World) -> usize {
    let boxes: Vec<(EntityId, Aabb)> = world
        .live()
        .filter_map(|e| {
            let transform = e.transform.as_ref()?;
            let detection = e.collision_detection.as_ref()?;
            Some((e.id, Aabb::from_center(transform.position, detection.half_extents)))
        })
        .collect();

    let mut tagged = 0;
    world.for_each_with(
        &[ComponentKind::Transform, ComponentKind::Motion, ComponentKind::CollisionDetection],
        |collider| {
            let Some(own) = boxes.iter().find(|(id, _)| *id == collider.id).map(|(_, b)| *b) else {
                return;
            };
            let hit = boxes
                .iter()
                .find(|(id, other)| *id != collider.id && own.overlaps(other));
            if let Some((other, _)) = hit {
                collider.collision_handling = Some(CollisionHandling { collided_with: *other });
                tagged += 1;
            }
        },
    );
    tagged
}

/// Bounce tagged entities by negating velocity and acceleration, then
/// clear every `CollisionHandling` tag. Returns how many tags were consumed.
pub fn handle_collisions(world: &mut World) -> usize {
    let mut handled = 0;
    world.for_each_with(&[ComponentKind::CollisionHandling], |entity| {
        if entity.collision_handling.take().is_none() {
            return;
        }
        if let Some(motion) = entity.motion.as_mut() {
            motion.velocity = -motion.velocity;
            motion.acceleration = -motion.acceleration;
        }
        handled += 1;
    });
    handled
}
