//! Built-in scenarios, loaded with the digit keys.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::scenario::Scenario;
use crate::components::{
    AnimProperty, AnimValue, Animation, AnimationSequence, Entity, ForceField, Motion, Navigation,
    NavigationRecipient, ParticleEmitter, RenderLayer, Selectable, Shape, ShapeKind, Transform,
};
use crate::core::world::World;
use crate::math::{Color, Rng};

/// Scenario for a digit-key slot.
pub fn builtin(slot: u8) -> Option<Box<dyn Scenario>> {
    match slot {
        1 => Some(Box::new(SwarmScenario::default())),
        2 => Some(Box::new(NavigationScenario)),
        _ => None,
    }
}

/// Hundreds of pulsing shapes drifting out from the origin, plus a
/// background particle emitter chased by a destructive force field.
#[derive(Debug, Clone)]
pub struct SwarmScenario {
    pub count: usize,
}

impl Default for SwarmScenario {
    fn default() -> Self {
        Self { count: 500 }
    }
}

fn random_vec(rng: &mut Rng, min: f32, max: f32) -> Vec2 {
    Vec2::new(rng.range(min, max), rng.range(min, max))
}

impl SwarmScenario {
    fn shape(rng: &mut Rng, entity: Entity) -> Entity {
        let scale = Vec2::new(rng.range_int(5, 50) as f32, rng.range_int(5, 50) as f32);
        let position = random_vec(rng, -100.0, 100.0);
        let motion = Motion::new(random_vec(rng, -0.1, 0.1), rng.range(0.05, 1.5), random_vec(rng, -0.0001, 0.0001));
        let color = Color::new(rng.range_int(0, 360) as f32, 75.0, 60.0, 1.0);
        let kind = *rng
            .pick(&[ShapeKind::Rectangle, ShapeKind::Ellipse, ShapeKind::Triangle])
            .unwrap_or(&ShapeKind::Rectangle);

        let pulse = AnimationSequence::new(
            AnimProperty::ShapeColor,
            vec![0.0, rng.range_int(1000, 2000) as f32, rng.range_int(3000, 4000) as f32],
            vec![
                AnimValue::Color(color),
                AnimValue::Color(color.with_hue(0.0)),
                AnimValue::Color(color),
            ],
        );
        let breathe = AnimationSequence::new(
            AnimProperty::TransformScale,
            vec![
                0.0,
                rng.range_int(200, 500) as f32,
                rng.range_int(800, 1000) as f32,
                rng.range_int(1200, 1500) as f32,
            ],
            vec![
                AnimValue::Vector(scale),
                AnimValue::Vector(scale * 2.0),
                AnimValue::Vector(Vec2::ZERO),
                AnimValue::Vector(scale),
            ],
        );

        entity
            .with_transform(Transform::new(position, scale))
            .with_motion(motion)
            .with_shape(Shape::new(color).with_kind(kind))
            .with_selectable(Selectable::default())
            .with_animation(Animation::new().with_sequence(pulse).with_sequence(breathe))
    }
}

impl Scenario for SwarmScenario {
    fn name(&self) -> &'static str {
        "swarm"
    }

    fn world_size(&self) -> Vec2 {
        Vec2::new(5000.0, 2400.0)
    }

    fn populate(&self, world: &mut World, rng: &mut Rng) {
        for _ in 0..self.count {
            let entity = Self::shape(rng, Entity::new(world.next_id()));
            world.spawn(entity);
        }

        let emitter_id = world.next_id();
        let field_id = world.next_id();
        let origin = random_vec(rng, -100.0, 100.0);
        let velocity = random_vec(rng, -0.1, 0.1);
        let max_speed = rng.range(0.05, 0.5);
        let acceleration = random_vec(rng, -0.0001, 0.0001);

        let emitter = ParticleEmitter::new()
            .with_velocity(Vec2::new(0.05, 0.05), 1.5)
            .with_spread(TAU)
            .with_size(1.0)
            .with_colors(Color::new(100.0, 100.0, 90.0, 1.0), Color::new(100.0, 100.0, 0.0, 0.0))
            .with_particle_size(2.0, 2.0)
            .with_rate(0.05)
            .with_lifespan(3000.0, 1.5)
            .with_layer(RenderLayer::Background)
            .with_fields([field_id]);
        world.spawn(
            Entity::new(emitter_id)
                .with_transform(Transform::at(origin))
                .with_emitter(emitter)
                .with_motion(Motion::new(velocity, max_speed, acceleration))
                .with_selectable(Selectable::default()),
        );

        world.spawn(
            Entity::new(field_id)
                .with_transform(Transform::at(origin - Vec2::new(0.0, 100.0)))
                .with_force_field(ForceField::new(3.0, 50.0).with_destructive(true))
                .with_motion(Motion::new(velocity, max_speed, acceleration))
                .with_selectable(Selectable::default()),
        );
    }
}

/// Four outlined boxes; two take navigation orders and one is already moving.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationScenario;

impl Scenario for NavigationScenario {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn world_size(&self) -> Vec2 {
        Vec2::new(5000.0, 5000.0)
    }

    fn populate(&self, world: &mut World, _rng: &mut Rng) {
        let boxed = |hue: f32, position: Vec2| {
            move |e: Entity| {
                e.with_transform(Transform::new(position, Vec2::splat(50.0)))
                    .with_shape(Shape::new(Color::new(hue, 100.0, 50.0, 1.0)).with_outline(Color::BLACK, 5.0))
            }
        };

        world.spawn_with(|e| {
            boxed(0.0, Vec2::new(-200.0, -200.0))(e)
                .with_motion(Motion::new(Vec2::ZERO, 1.0, Vec2::ZERO))
                .with_navigation(Navigation {
                    target: Vec2::new(500.0, 100.0),
                    slow_factor: 0.01,
                    arrive_threshold: 5.0,
                })
                .with_selectable(Selectable::default())
                .with_navigation_recipient(NavigationRecipient {})
        });
        world.spawn_with(|e| {
            boxed(50.0, Vec2::new(-200.0, 200.0))(e)
                .with_selectable(Selectable::default())
                .with_navigation_recipient(NavigationRecipient {})
        });
        world.spawn_with(|e| boxed(160.0, Vec2::new(200.0, -200.0))(e).with_selectable(Selectable::default()));
        world.spawn_with(boxed(270.0, Vec2::new(200.0, 200.0)));
    }
}
