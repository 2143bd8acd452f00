//! Versioned JSON snapshots of the entity collection.
//!
//! Every component is plain data, so a save/load round trip is lossless.
//! Loading validates the whole snapshot before anything touches the world.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::world::World;

/// Snapshot format version written by [`save`].
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("duplicate entity id {0:?}")]
    DuplicateId(EntityId),
    #[error("entity id {0:?} is out of range")]
    IdOutOfRange(EntityId),
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    entities: Vec<&'a Entity>,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    entities: Vec<Entity>,
}

/// Serialize every live entity in world order.
pub fn save(world: &World) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SnapshotRef {
        version: SNAPSHOT_VERSION,
        entities: world.live().collect(),
    })
}

/// Parse and validate a snapshot produced by [`save`].
pub fn load(json: &str) -> Result<Vec<Entity>, LoadError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(LoadError::UnsupportedVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    let mut seen = HashSet::with_capacity(snapshot.entities.len());
    for entity in &snapshot.entities {
        if entity.id.0 == u32::MAX {
            return Err(LoadError::IdOutOfRange(entity.id));
        }
        if !seen.insert(entity.id) {
            return Err(LoadError::DuplicateId(entity.id));
        }
    }
    Ok(snapshot.entities)
}

/// Load `json` into `world`, replacing its contents. On error the world is untouched.
pub fn load_into(world: &mut World, json: &str) -> Result<usize, LoadError> {
    let entities = load(json)?;
    let count = entities.len();
    world.replace(entities);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::*;
    use crate::extensions::Easing;
    use crate::math::Color;
    use glam::Vec2;

    fn populated() -> World {
        let mut world = World::new();
        let field = world.spawn_with(|e| e.with_transform(Transform::default()).with_force_field(ForceField::new(50.0, 10.0)));
        world.spawn_with(|e| {
            e.with_transform(Transform::new(Vec2::new(5.0, -3.0), Vec2::splat(20.0)).with_angle(0.5))
                .with_motion(Motion::new(Vec2::new(1.0, 2.0), 3.0, Vec2::ZERO).with_wraparound(false))
                .with_shape(Shape::new(Color::new(120.0, 50.0, 50.0, 1.0)).with_kind(ShapeKind::Ellipse))
                .with_trace(Trace::new(2.0, Color::WHITE))
                .with_field_subject(ForceFieldSubject::new([field]))
                .with_animation(Animation::new().with_sequence(
                    AnimationSequence::new(
                        AnimProperty::ShapeColor,
                        vec![0.0, 100.0],
                        vec![AnimValue::Color(Color::WHITE), AnimValue::Color(Color::BLACK)],
                    )
                    .with_easing(Easing::CubicOut),
                ))
        });
        world.spawn_with(|e| e.with_emitter(ParticleEmitter::new().with_rate(0.2).with_layer(RenderLayer::Background)));
        world
    }

    #[test]
    fn round_trip_is_lossless() {
        let world = populated();
        let json = save(&world).unwrap();
        let loaded = load(&json).unwrap();
        assert_eq!(loaded.as_slice(), world.entities());
    }

    #[test]
    fn expired_entities_are_not_saved() {
        let mut world = populated();
        let id = world.entities()[0].id;
        world.mark_expired(id);
        let loaded = load(&save(&world).unwrap()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.iter().all(|e| e.id != id));
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(load("not json"), Err(LoadError::Json(_))));
    }

    #[test]
    fn rejects_other_versions() {
        let err = load(r#"{"version":99,"entities":[]}"#).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedVersion { found: 99, .. }));
    }

    #[test]
    fn rejects_duplicate_ids_and_leaves_world_alone() {
        let mut world = populated();
        let err = load_into(&mut world, r#"{"version":1,"entities":[{"id":4},{"id":4}]}"#).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(EntityId(4))));
        assert_eq!(world.len(), 3);
    }

    #[test]
    fn load_into_replaces_and_bumps_ids() {
        let mut world = World::new();
        let n = load_into(&mut world, r#"{"version":1,"entities":[{"id":20}]}"#).unwrap();
        assert_eq!(n, 1);
        assert!(world.get(EntityId(20)).is_some());
        assert_eq!(world.next_id(), EntityId(21));
    }

    #[test]
    fn rejects_id_at_counter_ceiling() {
        let mut world = populated();
        let err = load_into(&mut world, r#"{"version":1,"entities":[{"id":4294967295}]}"#).unwrap_err();
        assert!(matches!(err, LoadError::IdOutOfRange(EntityId(u32::MAX))));
        assert_eq!(world.len(), 3);

        let fresh = world.create();
        assert_eq!(world.iter().filter(|e| e.id == fresh).count(), 1);
    }

    #[test]
    fn highest_loadable_id_keeps_create_working() {
        let mut world = World::new();
        load_into(&mut world, r#"{"version":1,"entities":[{"id":4294967294}]}"#).unwrap();
        let id = world.create();
        assert_eq!(id, EntityId(u32::MAX));
        world.create();
        assert_eq!(world.len(), 3);
    }
}
