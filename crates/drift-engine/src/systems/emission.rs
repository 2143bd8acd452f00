use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::animation::{AnimProperty, AnimValue, Animation, AnimationSequence};
use crate::components::emitter::ParticleEmitter;
use crate::components::entity::{ComponentKind, Entity};
use crate::components::expiration::Expiration;
use crate::components::force_field::ForceFieldSubject;
use crate::components::layer::RenderLayer;
use crate::components::motion::Motion;
use crate::components::shape::Shape;
use crate::components::transform::Transform;
use crate::core::world::World;
use crate::extensions::easing::Easing;
use crate::math::vector::{angle, from_angle_and_magnitude};
use crate::math::Rng;

/// Tick every enabled emitter and spawn the particles it owes.
///
/// Emitters are ticked first and particles built afterwards, so new
/// particles never see this pass. Foreground particles are appended to the
/// world, background ones prepended. Returns the number of particles spawned.
pub fn emit_particles(world: &mut World, rng: &mut Rng, dt: f32) -> usize {
    let mut pending: Vec<(ParticleEmitter, Vec2, usize)> = Vec::new();
    world.for_each_with(&[ComponentKind::ParticleEmitter, ComponentKind::Transform], |entity| {
        let (Some(emitter), Some(transform)) = (entity.emitter.as_mut(), entity.transform.as_ref()) else {
            return;
        };
        let count = emitter.tick(dt);
        if count > 0 {
            pending.push((emitter.clone(), transform.position, count));
        }
    });

    let mut foreground = Vec::new();
    let mut background = Vec::new();
    for (emitter, origin, count) in &pending {
        for _ in 0..*count {
            let particle = spawn_particle(world.next_id(), emitter, *origin, rng);
            match emitter.layer {
                RenderLayer::Foreground => foreground.push(particle),
                RenderLayer::Background => background.push(particle),
            }
        }
    }

    let spawned = foreground.len() + background.len();
    for particle in foreground {
        world.spawn(particle);
    }
    world.spawn_front(background);
    if spawned > 0 {
        log::trace!("emitted {} particles", spawned);
    }
    spawned
}

/// Build one particle for `emitter` sitting at `origin`.
///
/// Spawn point lies on a slit across the emission axis: `size` to one side
/// plus a random `[0, 2 * size]` back toward the other, so the slit spans
/// `[-size, size]` around the emitter. Direction falls in a cone of
/// half-angle `spread`; speed, lifespan and size are drawn between their
/// base value and base times randomness.
pub fn spawn_particle(id: EntityId, emitter: &ParticleEmitter, origin: Vec2, rng: &mut Rng) -> Entity {
    let base_angle = angle(emitter.velocity);
    let base_speed = emitter.velocity.length();

    let direction = base_angle + emitter.spread - rng.range(0.0, emitter.spread * 2.0);
    let slit = from_angle_and_magnitude(base_angle + FRAC_PI_2, emitter.size)
        + from_angle_and_magnitude(base_angle - FRAC_PI_2, rng.range(0.0, emitter.size * 2.0));
    let speed = rng.range(base_speed, base_speed * emitter.velocity_randomness);
    let lifespan = rng.range(
        emitter.particle_lifespan,
        emitter.particle_lifespan * emitter.particle_lifespan_randomness,
    );
    let size = rng.range(emitter.particle_size, emitter.particle_size * emitter.particle_size_randomness);

    let fade = AnimationSequence::new(
        AnimProperty::ShapeColor,
        vec![0.0, lifespan],
        vec![AnimValue::Color(emitter.start_color), AnimValue::Color(emitter.end_color)],
    )
    .with_easing(Easing::QuadInOut)
    .with_looping(false);

    let particle = Entity::new(id)
        .with_transform(Transform::new(origin + slit, Vec2::splat(size)))
        .with_motion(Motion::new(from_angle_and_magnitude(direction, speed), Motion::UNBOUNDED, Vec2::ZERO))
        .with_shape(Shape::new(emitter.start_color))
        .with_expiration(Expiration::new(lifespan))
        .with_animation(Animation::new().with_sequence(fade));

    if emitter.field_ids.is_empty() {
        particle
    } else {
        particle.with_field_subject(ForceFieldSubject::new(emitter.field_ids.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Color;

    fn emitter_entity(world: &mut World, emitter: ParticleEmitter) -> EntityId {
        world.spawn_with(|e| e.with_transform(Transform::at(Vec2::new(100.0, 200.0))).with_emitter(emitter))
    }

    #[test]
    fn emits_owed_particles_with_required_components() {
        let mut world = World::new();
        let field = world.create();
        emitter_entity(
            &mut world,
            ParticleEmitter::new()
                .with_rate(0.1)
                .with_velocity(Vec2::new(0.1, 0.0), 2.0)
                .with_lifespan(500.0, 1.5)
                .with_colors(Color::WHITE, Color::TRANSPARENT)
                .with_fields([field]),
        );
        let mut rng = Rng::new(1);
        assert_eq!(emit_particles(&mut world, &mut rng, 25.0), 2);
        assert_eq!(world.len(), 4);

        for particle in &world.entities()[2..] {
            assert!(particle.has_all(&[
                ComponentKind::Transform,
                ComponentKind::Motion,
                ComponentKind::Shape,
                ComponentKind::Expiration,
                ComponentKind::Animation,
                ComponentKind::ForceFieldSubject,
            ]));
            let life = particle.expiration.unwrap().duration_ms;
            assert!((500.0..=750.0).contains(&life));
            let seq = &particle.animation.as_ref().unwrap().sequences[0];
            assert_eq!(seq.keyframes, vec![0.0, life]);
            assert_eq!(seq.values[1], AnimValue::Color(Color::TRANSPARENT));
            assert!(!seq.looping);
            assert_eq!(particle.shape.unwrap().color, Color::WHITE);
        }
    }

    #[test]
    fn background_particles_go_first() {
        let mut world = World::new();
        let source = emitter_entity(&mut world, ParticleEmitter::new().with_rate(1.0).with_layer(RenderLayer::Background));
        let mut rng = Rng::new(2);
        assert_eq!(emit_particles(&mut world, &mut rng, 3.0), 3);
        assert_eq!(world.entities().last().unwrap().id, source);
        assert!(world.entities()[0].emitter.is_none());
    }

    #[test]
    fn disabled_emitters_and_emitters_without_transform_are_skipped() {
        let mut world = World::new();
        emitter_entity(&mut world, ParticleEmitter::new().with_enabled(false));
        world.spawn_with(|e| e.with_emitter(ParticleEmitter::new()));
        let mut rng = Rng::new(3);
        assert_eq!(emit_particles(&mut world, &mut rng, 100.0), 0);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn particle_respects_cone_slit_and_ranges() {
        let emitter = ParticleEmitter::new()
            .with_velocity(Vec2::new(1.0, 0.0), 2.0)
            .with_spread(0.25)
            .with_size(10.0)
            .with_particle_size(3.0, 2.0);
        let mut rng = Rng::new(4);
        for _ in 0..200 {
            let p = spawn_particle(EntityId(1), &emitter, Vec2::ZERO, &mut rng);
            let t = p.transform.unwrap();
            // Slit runs across the x axis.
            assert!(t.position.x.abs() < 1e-3);
            assert!(t.position.y >= -10.001 && t.position.y <= 10.001);
            assert!(t.scale.x >= 3.0 && t.scale.x <= 6.0);
            let m = p.motion.unwrap();
            let speed = m.velocity.length();
            assert!(speed >= 0.999 && speed <= 2.001, "{}", speed);
            assert!(angle(m.velocity).abs() <= 0.2501);
            assert_eq!(m.max_speed, Motion::UNBOUNDED);
            assert!(p.field_subject.is_none());
        }
    }
}
