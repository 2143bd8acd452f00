use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::entity::ComponentKind;
use crate::core::world::World;

/// Highlight the first selectable entity under `point` and clear the rest.
///
/// An entity is hit when `point` lies within `max(scale / 2, pick_radius)`
/// of its centre on both axes. Returns the id of the hit entity.
pub fn select_at(world: &mut World, point: Vec2, pick_radius: f32) -> Option<EntityId> {
    let mut selected = None;
    world.for_each_with(&[ComponentKind::Transform, ComponentKind::Selectable], |entity| {
        let (Some(transform), Some(selectable)) = (entity.transform.as_ref(), entity.selectable.as_mut()) else {
            return;
        };
        selectable.highlight = false;
        if selected.is_some() {
            return;
        }
        let reach = (transform.scale.abs() / 2.0).max(Vec2::splat(pick_radius));
        let delta = (transform.position - point).abs();
        if delta.x <= reach.x && delta.y <= reach.y {
            selectable.highlight = true;
            selected = Some(entity.id);
        }
    });
    selected
}

/// Ids of every highlighted entity, in world order.
pub fn highlighted(world: &World) -> Vec<EntityId> {
    world
        .live()
        .filter(|e| e.selectable.is_some_and(|s| s.highlight))
        .map(|e| e.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Selectable, Transform};

    fn selectable(world: &mut World, pos: Vec2, size: f32) -> EntityId {
        world.spawn_with(|e| {
            e.with_transform(Transform::new(pos, Vec2::splat(size)))
                .with_selectable(Selectable::default())
        })
    }

    #[test]
    fn picks_first_hit_and_clears_others() {
        let mut world = World::new();
        let a = selectable(&mut world, Vec2::ZERO, 20.0);
        let b = selectable(&mut world, Vec2::new(5.0, 0.0), 20.0);
        world.get_mut(b).unwrap().selectable.as_mut().unwrap().highlight = true;

        assert_eq!(select_at(&mut world, Vec2::new(3.0, 3.0), 1.0), Some(a));
        assert_eq!(highlighted(&world), vec![a]);
    }

    #[test]
    fn pick_radius_widens_small_targets() {
        let mut world = World::new();
        let tiny = selectable(&mut world, Vec2::ZERO, 2.0);
        assert_eq!(select_at(&mut world, Vec2::new(4.0, 0.0), 1.0), None);
        assert_eq!(select_at(&mut world, Vec2::new(4.0, 0.0), 5.0), Some(tiny));
    }

    #[test]
    fn missing_clears_everything() {
        let mut world = World::new();
        let a = selectable(&mut world, Vec2::ZERO, 20.0);
        select_at(&mut world, Vec2::ZERO, 1.0);
        assert_eq!(highlighted(&world), vec![a]);
        assert_eq!(select_at(&mut world, Vec2::new(500.0, 0.0), 1.0), None);
        assert!(highlighted(&world).is_empty());
    }
}
