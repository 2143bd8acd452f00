use crate::api::types::EntityId;
use crate::components::entity::{Component, ComponentKind, Entity};

/// Ordered entity storage using a flat Vec.
///
/// Order is iteration and draw order. Removal during a tick is deferred:
/// systems mark entities `expired` and [`World::compact`] drops them once
/// every system has run, so no index shifts under an active pass.
#[derive(Debug, Clone)]
pub struct World {
    entities: Vec<Entity>,
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a world with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            next_id: 1,
        }
    }

    /// Reserve a fresh id. Once the counter reaches `u32::MAX` it stops
    /// there and keeps handing out that id.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        match self.next_id.checked_add(1) {
            Some(next) => self.next_id = next,
            None => log::error!("entity id space exhausted"),
        }
        id
    }

    fn advance_past(&mut self, id: EntityId) {
        self.next_id = self.next_id.max(id.0.saturating_add(1));
    }

    /// Append an empty entity and return its id.
    pub fn create(&mut self) -> EntityId {
        let id = self.next_id();
        self.entities.push(Entity::new(id));
        id
    }

    /// Append an entity built by the caller.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.advance_past(id);
        self.entities.push(entity);
        id
    }

    /// Build an entity around a fresh id and append it.
    pub fn spawn_with(&mut self, build: impl FnOnce(Entity) -> Entity) -> EntityId {
        let id = self.next_id();
        self.spawn(build(Entity::new(id)))
    }

    /// Insert entities at the front, each ahead of the previous one,
    /// so the last of the batch ends up first.
    pub fn spawn_front(&mut self, batch: Vec<Entity>) {
        for entity in &batch {
            self.advance_past(entity.id);
        }
        self.entities.splice(0..0, batch.into_iter().rev());
    }

    /// Remove an entity by ID, preserving the order of the rest.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    /// Mark an entity for removal at the next compaction.
    pub fn mark_expired(&mut self, id: EntityId) -> bool {
        match self.get_mut(id) {
            Some(e) => {
                e.expired = true;
                true
            }
            None => false,
        }
    }

    /// Drop every entity marked expired. Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| !e.expired);
        before - self.entities.len()
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Attach a component to an entity. Returns false if the entity is unknown.
    pub fn add_component(&mut self, id: EntityId, component: impl Into<Component>) -> bool {
        match self.get_mut(id) {
            Some(e) => {
                e.add(component);
                true
            }
            None => false,
        }
    }

    pub fn get_component(&self, id: EntityId, kind: ComponentKind) -> Option<Component> {
        self.get(id)?.component(kind)
    }

    /// Detach a component. Absent entity or component is a no-op.
    pub fn remove_component(&mut self, id: EntityId, kind: ComponentKind) -> Option<Component> {
        self.get_mut(id)?.remove(kind)
    }

    pub fn has_components(&self, id: EntityId, kinds: &[ComponentKind]) -> bool {
        self.get(id).is_some_and(|e| e.has_all(kinds))
    }

    /// Iterate over all entities, including ones marked expired.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Entities not marked expired.
    pub fn live(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| !e.expired)
    }

    pub fn live_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut().filter(|e| !e.expired)
    }

    /// Call `f` on every live entity carrying all of `kinds`, in world order.
    pub fn for_each_with(&mut self, kinds: &[ComponentKind], mut f: impl FnMut(&mut Entity)) {
        for e in self.entities.iter_mut().filter(|e| !e.expired && e.has_all(kinds)) {
            f(e);
        }
    }

    /// Same as [`World::for_each_with`], walking from the back.
    pub fn for_each_with_rev(&mut self, kinds: &[ComponentKind], mut f: impl FnMut(&mut Entity)) {
        for e in self.entities.iter_mut().rev().filter(|e| !e.expired && e.has_all(kinds)) {
            f(e);
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Swap in a whole new collection. The id counter moves past every
    /// loaded id and never goes backwards.
    pub fn replace(&mut self, entities: Vec<Entity>) {
        let max = entities.iter().map(|e| e.id.0).max().unwrap_or(0);
        self.next_id = self.next_id.max(max.saturating_add(1));
        self.entities = entities;
    }

    /// Number of entities in the world.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities. Ids keep counting up.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Motion, Shape, Transform};
    use crate::math::Color;
    use glam::Vec2;

    #[test]
    fn component_round_trip_by_kind() {
        let mut world = World::new();
        let id = world.create();
        assert!(world.add_component(id, Shape::new(Color::WHITE)));
        assert_eq!(
            world.get_component(id, ComponentKind::Shape),
            Some(Component::Shape(Shape::new(Color::WHITE)))
        );
        assert!(world.remove_component(id, ComponentKind::Shape).is_some());
        assert!(world.remove_component(id, ComponentKind::Shape).is_none());
        assert_eq!(world.get_component(id, ComponentKind::Shape), None);
        assert!(!world.add_component(EntityId(999), Shape::new(Color::BLACK)));
    }

    #[test]
    fn create_assigns_unique_ids() {
        let mut world = World::new();
        let a = world.create();
        let b = world.create();
        assert_ne!(a, b);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn spawn_and_get() {
        let mut world = World::new();
        let id = world.spawn_with(|e| e.with_transform(Transform::at(Vec2::new(10.0, 20.0))));
        let e = world.get(id).unwrap();
        assert_eq!(e.transform.unwrap().position, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn spawn_advances_counter_past_explicit_ids() {
        let mut world = World::new();
        world.spawn(Entity::new(EntityId(40)));
        assert_eq!(world.next_id(), EntityId(41));
    }

    #[test]
    fn counter_saturates_at_the_top_of_the_id_range() {
        let mut world = World::new();
        world.spawn(Entity::new(EntityId(u32::MAX)));
        world.spawn_front(vec![Entity::new(EntityId(u32::MAX - 1))]);
        assert_eq!(world.next_id(), EntityId(u32::MAX));
        assert_eq!(world.next_id(), EntityId(u32::MAX));
    }

    #[test]
    fn despawn_keeps_order() {
        let mut world = World::new();
        let a = world.create();
        let b = world.create();
        let c = world.create();
        world.despawn(b);
        let ids: Vec<_> = world.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(world.despawn(b).is_none());
    }

    #[test]
    fn spawn_front_prepends_in_reverse() {
        let mut world = World::new();
        let existing = world.create();
        let first = Entity::new(world.next_id());
        let second = Entity::new(world.next_id());
        let (f, s) = (first.id, second.id);
        world.spawn_front(vec![first, second]);
        let ids: Vec<_> = world.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![s, f, existing]);
    }

    #[test]
    fn component_ops_through_world() {
        let mut world = World::new();
        let id = world.create();
        assert!(world.add_component(id, Motion::default()));
        assert!(world.has_components(id, &[ComponentKind::Motion]));
        assert!(!world.has_components(id, &[ComponentKind::Motion, ComponentKind::Transform]));
        assert!(world.remove_component(id, ComponentKind::Transform).is_none());
        assert!(world.remove_component(id, ComponentKind::Motion).is_some());
        assert!(!world.add_component(EntityId(999), Motion::default()));
    }

    #[test]
    fn iteration_filters_by_kind_and_skips_expired() {
        let mut world = World::new();
        let a = world.spawn_with(|e| e.with_shape(Shape::new(Color::WHITE)));
        let b = world.spawn_with(|e| e.with_shape(Shape::new(Color::WHITE)));
        world.create();
        world.mark_expired(a);

        let mut seen = Vec::new();
        world.for_each_with(&[ComponentKind::Shape], |e| seen.push(e.id));
        assert_eq!(seen, vec![b]);

        assert_eq!(world.compact(), 1);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn reverse_iteration_walks_from_the_back() {
        let mut world = World::new();
        let a = world.create();
        let b = world.create();
        let mut seen = Vec::new();
        world.for_each_with_rev(&[], |e| seen.push(e.id));
        assert_eq!(seen, vec![b, a]);
    }

    #[test]
    fn replace_moves_counter_forward() {
        let mut world = World::new();
        world.create();
        world.replace(vec![Entity::new(EntityId(10)), Entity::new(EntityId(3))]);
        assert_eq!(world.len(), 2);
        assert_eq!(world.next_id(), EntityId(11));

        world.replace(Vec::new());
        assert_eq!(world.next_id(), EntityId(12));
    }
}
