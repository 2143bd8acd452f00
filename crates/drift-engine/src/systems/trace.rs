use crate::components::entity::ComponentKind;
use crate::core::world::World;

/// Append each traced entity's position to its trace.
pub fn record_traces(world: &mut World) {
    world.for_each_with(&[ComponentKind::Transform, ComponentKind::Trace], |entity| {
        if let (Some(transform), Some(trace)) = (entity.transform.as_ref(), entity.trace.as_mut()) {
            trace.record(transform.position);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Trace, Transform};
    use crate::math::Color;
    use glam::Vec2;

    #[test]
    fn records_bounded_history() {
        let mut world = World::new();
        let id = world.spawn_with(|e| {
            e.with_transform(Transform::default())
                .with_trace(Trace::new(1.0, Color::WHITE).with_max_points(4))
        });
        for i in 0..6 {
            world.get_mut(id).unwrap().transform.as_mut().unwrap().position = Vec2::new(i as f32, 0.0);
            record_traces(&mut world);
            let len = world.get(id).unwrap().trace.as_ref().unwrap().points.len();
            assert_eq!(len, (i + 1).min(4));
        }
        let xs: Vec<f32> = world.get(id).unwrap().trace.as_ref().unwrap().points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0, 5.0]);
    }
}
