use crate::components::entity::ComponentKind;
use crate::core::world::World;

/// Advance all animation sequences by `dt` ms and write their values.
///
/// A write whose target component is missing, or whose value kind does not
/// match the property, is skipped silently.
pub fn tick_animations(world: &mut World, dt: f32) {
    world.for_each_with(&[ComponentKind::Animation], |entity| {
        let Some(mut animation) = entity.animation.take() else {
            return;
        };
        for sequence in animation.sequences.iter_mut() {
            if let Some(value) = sequence.tick(dt) {
                sequence.property.set(entity, value);
            }
        }
        entity.animation = Some(animation);
    });
}
