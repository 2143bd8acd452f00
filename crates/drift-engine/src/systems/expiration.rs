use crate::components::entity::ComponentKind;
use crate::core::world::World;

/// Age every `Expiration` by `dt` ms and mark the due ones expired.
/// Walks the world from the back; marked entities are dropped by `World::compact`.
/// Returns how many entities were marked.
pub fn tick_expiration(world: &mut World, dt: f32) -> usize {
    let mut due = 0;
    world.for_each_with_rev(&[ComponentKind::Expiration], |entity| {
        let Some(expiration) = entity.expiration.as_mut() else {
            return;
        };
        expiration.elapsed_ms += dt;
        if expiration.is_due() {
            entity.expired = true;
            due += 1;
        }
    });
    if due > 0 {
        log::trace!("expired {} entities", due);
    }
    due
}
