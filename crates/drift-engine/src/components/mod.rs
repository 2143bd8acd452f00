pub mod animation;
pub mod collision;
pub mod emitter;
pub mod entity;
pub mod expiration;
pub mod force_field;
pub mod layer;
pub mod motion;
pub mod navigation;
pub mod selectable;
pub mod shape;
pub mod trace;
pub mod transform;

pub use animation::{AnimProperty, AnimValue, Animation, AnimationSequence, InterpolationKind, PropertyAccessor};
pub use collision::{CollisionDetection, CollisionHandling};
pub use emitter::ParticleEmitter;
pub use entity::{Component, ComponentKind, Entity};
pub use expiration::Expiration;
pub use force_field::{ForceField, ForceFieldSubject};
pub use layer::RenderLayer;
pub use motion::Motion;
pub use navigation::{Navigation, NavigationRecipient};
pub use selectable::Selectable;
pub use shape::{Shape, ShapeKind};
pub use trace::Trace;
pub use transform::Transform;
