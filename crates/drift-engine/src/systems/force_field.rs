use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::entity::ComponentKind;
use crate::components::expiration::Expiration;
use crate::components::force_field::ForceField;
use crate::core::world::World;

/// Pull every `ForceFieldSubject + Transform + Motion` toward its fields.
///
/// Each enabled field listed in the subject contributes
/// `offset * mass / |offset|^3`. The sum overwrites the subject's
/// acceleration. A subject strictly inside a destructive field's radius gets
/// a zero-duration `Expiration`, so it is removed on the next expiration pass.
/// Returns how many subjects were doomed this pass.
pub fn apply_force_fields(world: &mut World) -> usize {
    let fields: Vec<(EntityId, Vec2, ForceField)> = world
        .live()
        .filter_map(|e| {
            let field = e.force_field.filter(|f| f.enabled)?;
            Some((e.id, e.transform.as_ref()?.position, field))
        })
        .collect();

    let mut doomed = 0;
    world.for_each_with(
        &[ComponentKind::ForceFieldSubject, ComponentKind::Transform, ComponentKind::Motion],
        |entity| {
            let (Some(subject), Some(transform)) = (entity.field_subject.as_ref(), entity.transform.as_ref()) else {
                return;
            };
            let position = transform.position;
            let mut acceleration = Vec2::ZERO;
            let mut destroy = false;

            for (id, field_position, field) in &fields {
                if !subject.field_ids.contains(id) {
                    continue;
                }
                let offset = *field_position - position;
                let distance_sq = offset.length_squared();
                if distance_sq > 0.0 {
                    acceleration += offset * (field.mass / distance_sq.powf(1.5));
                }
                if field.destructive && distance_sq < field.radius * field.radius {
                    destroy = true;
                }
            }

            if let Some(motion) = entity.motion.as_mut() {
                motion.acceleration = acceleration;
            }
            if destroy {
                match entity.expiration.as_mut() {
                    Some(expiration) => expiration.duration_ms = 0.0,
                    None => entity.expiration = Some(Expiration::immediate()),
                }
                doomed += 1;
            }
        },
    );
    doomed
}
