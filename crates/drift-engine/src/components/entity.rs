use serde::{Deserialize, Serialize};

use crate::api::types::EntityId;
use crate::components::animation::Animation;
use crate::components::collision::{CollisionDetection, CollisionHandling};
use crate::components::emitter::ParticleEmitter;
use crate::components::expiration::Expiration;
use crate::components::force_field::{ForceField, ForceFieldSubject};
use crate::components::motion::Motion;
use crate::components::navigation::{Navigation, NavigationRecipient};
use crate::components::selectable::Selectable;
use crate::components::shape::Shape;
use crate::components::trace::Trace;
use crate::components::transform::Transform;

/// Declares the entity struct, the closed set of component kinds and the
/// plumbing between them from a single field list.
macro_rules! components {
    ($($field:ident: $ty:ty => $kind:ident, $with:ident;)*) => {
        /// Closed set of component kinds an entity can carry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ComponentKind {
            $($kind,)*
        }

        impl ComponentKind {
            pub const ALL: &'static [ComponentKind] = &[$(ComponentKind::$kind,)*];
        }

        /// A component value of any kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Component {
            $($kind($ty),)*
        }

        impl Component {
            pub fn kind(&self) -> ComponentKind {
                match self {
                    $(Component::$kind(_) => ComponentKind::$kind,)*
                }
            }
        }

        $(
            impl From<$ty> for Component {
                fn from(value: $ty) -> Self {
                    Component::$kind(value)
                }
            }
        )*

        /// Fat Entity: a single struct with at most one component of each kind.
        /// Designed for simplicity over ECS purity; a system's eligibility is
        /// the presence of the components it reads.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct Entity {
            /// Unique identifier.
            pub id: EntityId,
            /// Marked for removal; skipped by systems until the world compacts.
            #[serde(skip)]
            pub expired: bool,
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl Entity {
            /// Create an entity with no components.
            pub fn new(id: EntityId) -> Self {
                Self {
                    id,
                    expired: false,
                    $($field: None,)*
                }
            }

            /// Attach a component, replacing any existing one of the same kind.
            pub fn add(&mut self, component: impl Into<Component>) {
                match component.into() {
                    $(Component::$kind(value) => self.$field = Some(value),)*
                }
            }

            /// Detach and return the component of `kind`. No-op when absent.
            pub fn remove(&mut self, kind: ComponentKind) -> Option<Component> {
                match kind {
                    $(ComponentKind::$kind => self.$field.take().map(Component::$kind),)*
                }
            }

            /// Copy of the component of `kind`, if attached.
            pub fn component(&self, kind: ComponentKind) -> Option<Component> {
                match kind {
                    $(ComponentKind::$kind => self.$field.clone().map(Component::$kind),)*
                }
            }

            pub fn has(&self, kind: ComponentKind) -> bool {
                match kind {
                    $(ComponentKind::$kind => self.$field.is_some(),)*
                }
            }

            /// Kinds currently attached, in declaration order.
            pub fn kinds(&self) -> Vec<ComponentKind> {
                ComponentKind::ALL.iter().copied().filter(|k| self.has(*k)).collect()
            }

            // -- Builder pattern --

            $(
                pub fn $with(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*
        }
    };
}

components! {
    transform: Transform => Transform, with_transform;
    motion: Motion => Motion, with_motion;
    navigation: Navigation => Navigation, with_navigation;
    navigation_recipient: NavigationRecipient => NavigationRecipient, with_navigation_recipient;
    collision_detection: CollisionDetection => CollisionDetection, with_collision_detection;
    collision_handling: CollisionHandling => CollisionHandling, with_collision_handling;
    shape: Shape => Shape, with_shape;
    trace: Trace => Trace, with_trace;
    selectable: Selectable => Selectable, with_selectable;
    expiration: Expiration => Expiration, with_expiration;
    emitter: ParticleEmitter => ParticleEmitter, with_emitter;
    force_field: ForceField => ForceField, with_force_field;
    field_subject: ForceFieldSubject => ForceFieldSubject, with_field_subject;
    animation: Animation => Animation, with_animation;
}

impl Entity {
    /// True iff every listed kind is present.
    pub fn has_all(&self, kinds: &[ComponentKind]) -> bool {
        kinds.iter().all(|k| self.has(*k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Color;
    use glam::Vec2;

    #[test]
    fn add_replaces_same_kind() {
        let mut e = Entity::new(EntityId(1));
        e.add(Transform::at(Vec2::new(1.0, 2.0)));
        e.add(Transform::at(Vec2::new(3.0, 4.0)));
        assert_eq!(e.transform.unwrap().position, Vec2::new(3.0, 4.0));
        assert_eq!(e.kinds(), vec![ComponentKind::Transform]);
    }

    #[test]
    fn has_all_requires_every_kind() {
        let e = Entity::new(EntityId(1))
            .with_transform(Transform::default())
            .with_motion(Motion::default());
        assert!(e.has_all(&[ComponentKind::Transform, ComponentKind::Motion]));
        assert!(!e.has_all(&[ComponentKind::Transform, ComponentKind::Shape]));
        assert!(e.has_all(&[]));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut e = Entity::new(EntityId(1)).with_shape(Shape::new(Color::WHITE));
        assert!(e.remove(ComponentKind::Trace).is_none());
        let removed = e.remove(ComponentKind::Shape);
        assert_eq!(removed.map(|c| c.kind()), Some(ComponentKind::Shape));
        assert!(!e.has(ComponentKind::Shape));
    }

    #[test]
    fn serialized_entity_omits_absent_components() {
        let e = Entity::new(EntityId(9)).with_navigation_recipient(NavigationRecipient::default());
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"id":9,"navigation_recipient":{}}"#);
        let back: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
