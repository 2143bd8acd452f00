use drift_engine::components::{
    AnimProperty, AnimValue, Animation, AnimationSequence, CollisionDetection, ComponentKind, Expiration, ForceField,
    ForceFieldSubject, Motion, ParticleEmitter, Selectable, Shape, Trace, Transform,
};
use drift_engine::core::persist;
use drift_engine::math::vector::{normalize, rotate};
use drift_engine::systems;
use drift_engine::{Color, Easing, EntityId, Rng, Sandbox, SandboxConfig, World};
use glam::Vec2;

const EPSILON: f32 = 1e-4;

fn empty_sandbox() -> Sandbox {
    Sandbox::new(SandboxConfig::default())
}

#[test]
fn normalize_and_rotate() {
    let samples = [Vec2::new(3.0, 4.0), Vec2::new(-0.001, 0.0), Vec2::new(1e4, -2e4), Vec2::new(0.5, 0.5)];
    for v in samples {
        assert!((normalize(v).length() - 1.0).abs() < EPSILON);
        for theta in [0.0, 0.3, -2.0, 10.0, std::f32::consts::PI] {
            let back = rotate(rotate(v, theta), -theta);
            assert!((back - v).length() <= EPSILON * v.length().max(1.0));
        }
    }
    assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn trace_keeps_the_most_recent_positions() {
    let mut sandbox = empty_sandbox();
    let id = sandbox.world.spawn_with(|e| {
        e.with_transform(Transform::at(Vec2::ZERO))
            .with_motion(Motion::new(Vec2::new(1.0, 0.0), 10.0, Vec2::ZERO))
            .with_trace(Trace::new(1.0, Color::WHITE).with_max_points(5))
    });

    let mut positions = Vec::new();
    for n in 1..=12 {
        sandbox.simulate(1.0);
        let entity = sandbox.world.get(id).unwrap();
        positions.push(entity.transform.unwrap().position);
        let trace = entity.trace.as_ref().unwrap();
        assert_eq!(trace.points.len(), n.min(5));
        let expected: Vec<Vec2> = positions[positions.len().saturating_sub(5)..].to_vec();
        assert_eq!(trace.points.iter().copied().collect::<Vec<_>>(), expected);
    }
}

fn count_emissions(rate: f32, dt: f32, steps: usize) -> usize {
    let mut world = World::new();
    let mut rng = Rng::new(11);
    world.spawn_with(|e| {
        e.with_transform(Transform::at(Vec2::ZERO))
            .with_emitter(ParticleEmitter::new().with_rate(rate).with_lifespan(1e9, 1.0))
    });
    (0..steps).map(|_| systems::emit_particles(&mut world, &mut rng, dt)).sum()
}

#[test]
fn emission_rate_is_conserved() {
    for (rate, dt) in [(0.1, 16.0), (0.03, 7.0)] {
        let steps = 1000;
        let emitted = count_emissions(rate, dt, steps) as f32;
        let expected = steps as f32 * dt * rate;
        assert!((emitted - expected).abs() <= 1.0, "rate {rate} dt {dt}: {emitted} vs {expected}");
    }
}

#[test]
fn collision_tags_are_consumed_in_one_pass() {
    let mut world = World::new();
    for x in [0.0, 5.0] {
        world.spawn_with(|e| {
            e.with_transform(Transform::at(Vec2::new(x, 0.0)))
                .with_motion(Motion::new(Vec2::new(1.0, 0.0), 10.0, Vec2::ZERO))
                .with_collision_detection(CollisionDetection::new(Vec2::splat(10.0)))
        });
    }
    assert!(systems::detect_collisions(&mut world) >= 1);
    systems::handle_collisions(&mut world);
    assert!(world.iter().all(|e| e.collision_handling.is_none()));
}

#[test]
fn colliding_box_bounces() {
    let mut world = World::new();
    let mover = world.spawn_with(|e| {
        e.with_transform(Transform::at(Vec2::ZERO))
            .with_motion(Motion::new(Vec2::new(1.0, -2.0), 10.0, Vec2::new(0.5, 0.25)))
            .with_collision_detection(CollisionDetection::new(Vec2::splat(10.0)))
    });
    let wall = world.spawn_with(|e| {
        e.with_transform(Transform::at(Vec2::ZERO))
            .with_collision_detection(CollisionDetection::new(Vec2::splat(10.0)))
    });

    assert_eq!(systems::detect_collisions(&mut world), 1);
    let tagged: Vec<EntityId> = world
        .iter()
        .filter(|e| e.has(ComponentKind::CollisionHandling))
        .map(|e| e.id)
        .collect();
    assert_eq!(tagged, vec![mover]);
    assert_eq!(world.get(mover).unwrap().collision_handling.unwrap().collided_with, wall);

    systems::handle_collisions(&mut world);
    let entity = world.get(mover).unwrap();
    let motion = entity.motion.unwrap();
    assert_eq!(motion.velocity, Vec2::new(-1.0, 2.0));
    assert_eq!(motion.acceleration, Vec2::new(-0.5, -0.25));
    assert!(entity.collision_handling.is_none());
}

#[test]
fn destructive_field_removes_on_the_next_tick() {
    let mut sandbox = empty_sandbox();
    let field = sandbox.world.spawn_with(|e| {
        e.with_transform(Transform::at(Vec2::ZERO))
            .with_force_field(ForceField::new(1.0, 50.0).with_destructive(true))
    });
    let subject = sandbox.world.spawn_with(|e| {
        e.with_transform(Transform::at(Vec2::new(10.0, 0.0)))
            .with_motion(Motion::new(Vec2::ZERO, 10.0, Vec2::ZERO).with_wraparound(false))
            .with_expiration(Expiration::new(1e6))
            .with_field_subject(ForceFieldSubject::new([field]))
    });

    sandbox.simulate(16.0);
    let entity = sandbox.world.get(subject).expect("still present after the tick that doomed it");
    assert_eq!(entity.expiration.unwrap().duration_ms, 0.0);
    assert!(entity.motion.unwrap().acceleration.x < 0.0);

    sandbox.simulate(16.0);
    assert!(sandbox.world.get(subject).is_none());
    assert!(sandbox.world.get(field).is_some());
}

#[test]
fn keyframes_interpolate_and_pin() {
    let mut world = World::new();
    let id = world.spawn_with(|e| {
        e.with_transform(Transform::default()).with_animation(Animation::new().with_sequence(
            AnimationSequence::new(
                AnimProperty::TransformAngle,
                vec![0.0, 1000.0],
                vec![AnimValue::Number(0.0), AnimValue::Number(100.0)],
            )
            .with_easing(Easing::Linear)
            .with_looping(false),
        ))
    });
    let angle = |world: &World| world.get(id).unwrap().transform.unwrap().angle;

    systems::tick_animations(&mut world, 500.0);
    assert!((angle(&world) - 50.0).abs() < EPSILON);

    systems::tick_animations(&mut world, 500.0);
    assert!((angle(&world) - 100.0).abs() < EPSILON);
    let sequence = &world.get(id).unwrap().animation.as_ref().unwrap().sequences[0];
    assert!(!sequence.playing);

    for _ in 0..5 {
        systems::tick_animations(&mut world, 300.0);
        assert!((angle(&world) - 100.0).abs() < EPSILON);
    }
}

#[test]
fn particles_fade_and_expire() {
    let mut sandbox = empty_sandbox();
    let emitter = sandbox.world.spawn_with(|e| {
        e.with_transform(Transform::at(Vec2::ZERO)).with_emitter(
            ParticleEmitter::new()
                .with_rate(0.1)
                .with_lifespan(100.0, 1.0)
                .with_colors(Color::WHITE, Color::WHITE.with_alpha(0.0)),
        )
    });

    sandbox.simulate(16.0);
    let particles: Vec<_> = sandbox.world.iter().filter(|e| e.expiration.is_some()).collect();
    assert_eq!(particles.len(), 1);
    for particle in &particles {
        assert!(particle.has_all(&[
            ComponentKind::Transform,
            ComponentKind::Motion,
            ComponentKind::Shape,
            ComponentKind::Expiration,
            ComponentKind::Animation,
        ]));
    }

    sandbox.world.get_mut(emitter).unwrap().emitter.as_mut().unwrap().enabled = false;
    for _ in 0..10 {
        sandbox.simulate(16.0);
    }
    assert_eq!(sandbox.world.len(), 1);
}

#[test]
fn snapshot_round_trip() {
    let mut sandbox = empty_sandbox();
    sandbox.load_builtin(1);
    for _ in 0..30 {
        sandbox.simulate(16.0);
    }
    let json = sandbox.save().unwrap();

    let mut restored = empty_sandbox();
    let count = restored.load(&json).unwrap();
    assert_eq!(count, sandbox.world.live().count());
    for (before, after) in sandbox.world.live().zip(restored.world.live()) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.kinds(), after.kinds());
        let (a, b) = (before.transform.unwrap(), after.transform.unwrap());
        assert!((a.position - b.position).length() < EPSILON);
        assert!((a.scale - b.scale).length() < EPSILON);
    }

    let fresh = restored.world.spawn_with(|e| e);
    assert!(sandbox.world.live().all(|e| e.id < fresh));
    assert!(persist::load(&json).is_ok());
}

#[test]
fn paused_world_holds_still_but_still_selects() {
    let mut sandbox = empty_sandbox();
    let id = sandbox.world.spawn_with(|e| {
        e.with_transform(Transform::new(Vec2::ZERO, Vec2::splat(30.0)))
            .with_motion(Motion::new(Vec2::new(2.0, 0.0), 10.0, Vec2::ZERO))
            .with_shape(Shape::new(Color::WHITE))
            .with_selectable(Selectable::default())
    });
    sandbox.set_running(false);
    for _ in 0..10 {
        sandbox.update(16.0);
    }
    assert_eq!(sandbox.world.get(id).unwrap().transform.unwrap().position, Vec2::ZERO);

    assert_eq!(sandbox.select_at(Vec2::new(5.0, 5.0)), Some(id));
    assert_eq!(sandbox.draw(0.0).highlights.len(), 1);
}
