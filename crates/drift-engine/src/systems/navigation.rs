use glam::Vec2;

use crate::components::entity::ComponentKind;
use crate::components::navigation::Navigation;
use crate::core::world::World;
use crate::math::vector::clamp_magnitude;

/// Steer every `Transform + Motion + Navigation` entity toward its target.
///
/// Within `arrive_threshold` the entity stops and loses its `Navigation`.
/// Otherwise its velocity becomes `offset * slow_factor`, capped at
/// `max_speed`, with acceleration cleared. Returns how many arrived.
pub fn steer_navigation(world: &mut World) -> usize {
    let mut arrived = 0;
    world.for_each_with(
        &[ComponentKind::Transform, ComponentKind::Motion, ComponentKind::Navigation],
        |entity| {
            let (Some(transform), Some(motion), Some(navigation)) =
                (entity.transform.as_ref(), entity.motion.as_mut(), entity.navigation.as_ref())
            else {
                return;
            };
            let offset = navigation.target - transform.position;
            motion.acceleration = Vec2::ZERO;
            if offset.length() <= navigation.arrive_threshold {
                motion.velocity = Vec2::ZERO;
                entity.navigation = None;
                arrived += 1;
            } else {
                motion.velocity = clamp_magnitude(offset * navigation.slow_factor, motion.max_speed);
            }
        },
    );
    arrived
}

/// Send every highlighted `NavigationRecipient` with `Motion` toward `target`,
/// replacing any navigation already in progress. Returns how many accepted.
pub fn command_navigation(world: &mut World, target: Vec2) -> usize {
    let mut commanded = 0;
    world.for_each_with(
        &[ComponentKind::NavigationRecipient, ComponentKind::Selectable, ComponentKind::Motion],
        |entity| {
            if entity.selectable.is_some_and(|s| s.highlight) {
                entity.navigation = Some(Navigation::new(target));
                commanded += 1;
            }
        },
    );
    commanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Motion, NavigationRecipient, Selectable, Transform};

    fn navigator(world: &mut World, pos: Vec2, target: Vec2, max_speed: f32) -> crate::api::types::EntityId {
        world.spawn_with(|e| {
            e.with_transform(Transform::at(pos))
                .with_motion(Motion::new(Vec2::ONE, max_speed, Vec2::ONE))
                .with_navigation(Navigation::new(target))
        })
    }

    #[test]
    fn steers_toward_target() {
        let mut world = World::new();
        let id = navigator(&mut world, Vec2::ZERO, Vec2::new(100.0, 0.0), 10.0);
        assert_eq!(steer_navigation(&mut world), 0);
        let m = world.get(id).unwrap().motion.unwrap();
        assert!((m.velocity - Vec2::new(1.0, 0.0)).length() < 1e-6);
        assert_eq!(m.acceleration, Vec2::ZERO);
    }

    #[test]
    fn speed_is_capped() {
        let mut world = World::new();
        let id = navigator(&mut world, Vec2::ZERO, Vec2::new(10_000.0, 0.0), 2.0);
        steer_navigation(&mut world);
        let v = world.get(id).unwrap().motion.unwrap().velocity;
        assert!((v.length() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn arrival_stops_and_removes_navigation() {
        let mut world = World::new();
        let id = navigator(&mut world, Vec2::ZERO, Vec2::new(5.0, 5.0), 10.0);
        assert_eq!(steer_navigation(&mut world), 1);
        let e = world.get(id).unwrap();
        assert!(e.navigation.is_none());
        assert_eq!(e.motion.unwrap().velocity, Vec2::ZERO);
    }

    #[test]
    fn only_highlighted_recipients_take_commands() {
        let mut world = World::new();
        let recipient = |highlight: bool| {
            move |e: crate::components::Entity| {
                e.with_transform(Transform::default())
                    .with_motion(Motion::default())
                    .with_navigation_recipient(NavigationRecipient::default())
                    .with_selectable(Selectable { highlight, ..Default::default() })
            }
        };
        let picked = world.spawn_with(recipient(true));
        let idle = world.spawn_with(recipient(false));
        let not_recipient = world.spawn_with(|e| {
            e.with_motion(Motion::default())
                .with_selectable(Selectable { highlight: true, ..Default::default() })
        });

        assert_eq!(command_navigation(&mut world, Vec2::new(7.0, 8.0)), 1);
        assert_eq!(world.get(picked).unwrap().navigation.unwrap().target, Vec2::new(7.0, 8.0));
        assert!(world.get(idle).unwrap().navigation.is_none());
        assert!(world.get(not_recipient).unwrap().navigation.is_none());
    }
}
