//! Keyframe animation of entity properties.
//!
//! A sequence targets one [`AnimProperty`]; each property resolves to a
//! getter/setter pair over [`Entity`], so writes need no runtime name lookup.
//! A missing target component makes the write a silent no-op.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::entity::Entity;
use crate::extensions::easing::{ease, ease_color, ease_vec2, Easing};
use crate::math::Color;

/// How two keyframe values are blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpolationKind {
    Number,
    Vector,
    Color,
}

/// A keyframe value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimValue {
    Number(f32),
    Vector(Vec2),
    Color(Color),
}

impl AnimValue {
    pub fn kind(&self) -> InterpolationKind {
        match self {
            AnimValue::Number(_) => InterpolationKind::Number,
            AnimValue::Vector(_) => InterpolationKind::Vector,
            AnimValue::Color(_) => InterpolationKind::Color,
        }
    }

    /// Eased blend of `a` and `b`. `None` if the two values differ in kind.
    pub fn interpolate(a: AnimValue, b: AnimValue, t: f32, easing: Easing) -> Option<AnimValue> {
        match (a, b) {
            (AnimValue::Number(a), AnimValue::Number(b)) => Some(AnimValue::Number(ease(a, b, t, easing))),
            (AnimValue::Vector(a), AnimValue::Vector(b)) => Some(AnimValue::Vector(ease_vec2(a, b, t, easing))),
            (AnimValue::Color(a), AnimValue::Color(b)) => Some(AnimValue::Color(ease_color(a, b, t, easing))),
            _ => None,
        }
    }

    pub fn as_number(self) -> Option<f32> {
        match self {
            AnimValue::Number(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vector(self) -> Option<Vec2> {
        match self {
            AnimValue::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(self) -> Option<Color> {
        match self {
            AnimValue::Color(v) => Some(v),
            _ => None,
        }
    }
}

/// Every property an animation sequence can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimProperty {
    TransformPosition,
    TransformScale,
    TransformAngle,
    MotionVelocity,
    MotionAngularVelocity,
    ShapeColor,
    ShapeOutlineColor,
    ShapeOutlineWidth,
    TraceColor,
    TraceWidth,
    ForceFieldMass,
    ForceFieldRadius,
    EmitterRate,
}

/// Getter/setter pair for one animatable property.
#[derive(Clone, Copy)]
pub struct PropertyAccessor {
    pub kind: InterpolationKind,
    /// `None` when the owning component is absent.
    pub get: fn(&Entity) -> Option<AnimValue>,
    /// Returns `false` when the component is absent or the value kind is wrong.
    pub set: fn(&mut Entity, AnimValue) -> bool,
}

macro_rules! accessor {
    ($kind:ident, $field:ident, $as:ident, |$c:ident| $path:expr) => {
        PropertyAccessor {
            kind: InterpolationKind::$kind,
            get: |e| e.$field.as_ref().map(|$c| AnimValue::$kind($path)),
            set: |e, v| match (e.$field.as_mut(), v.$as()) {
                (Some($c), Some(v)) => {
                    $path = v;
                    true
                }
                _ => false,
            },
        }
    };
}

impl AnimProperty {
    pub fn accessor(self) -> PropertyAccessor {
        match self {
            AnimProperty::TransformPosition => accessor!(Vector, transform, as_vector, |c| c.position),
            AnimProperty::TransformScale => accessor!(Vector, transform, as_vector, |c| c.scale),
            AnimProperty::TransformAngle => accessor!(Number, transform, as_number, |c| c.angle),
            AnimProperty::MotionVelocity => accessor!(Vector, motion, as_vector, |c| c.velocity),
            AnimProperty::MotionAngularVelocity => accessor!(Number, motion, as_number, |c| c.angular_velocity),
            AnimProperty::ShapeColor => accessor!(Color, shape, as_color, |c| c.color),
            AnimProperty::ShapeOutlineColor => PropertyAccessor {
                kind: InterpolationKind::Color,
                get: |e| e.shape.as_ref().and_then(|s| s.outline_color).map(AnimValue::Color),
                set: |e, v| match (e.shape.as_mut(), v.as_color()) {
                    (Some(s), Some(v)) => {
                        s.outline_color = Some(v);
                        true
                    }
                    _ => false,
                },
            },
            AnimProperty::ShapeOutlineWidth => PropertyAccessor {
                kind: InterpolationKind::Number,
                get: |e| e.shape.as_ref().and_then(|s| s.outline_width).map(AnimValue::Number),
                set: |e, v| match (e.shape.as_mut(), v.as_number()) {
                    (Some(s), Some(v)) => {
                        s.outline_width = Some(v);
                        true
                    }
                    _ => false,
                },
            },
            AnimProperty::TraceColor => accessor!(Color, trace, as_color, |c| c.color),
            AnimProperty::TraceWidth => accessor!(Number, trace, as_number, |c| c.width),
            AnimProperty::ForceFieldMass => accessor!(Number, force_field, as_number, |c| c.mass),
            AnimProperty::ForceFieldRadius => accessor!(Number, force_field, as_number, |c| c.radius),
            AnimProperty::EmitterRate => accessor!(Number, emitter, as_number, |c| c.emission_rate),
        }
    }

    pub fn get(self, entity: &Entity) -> Option<AnimValue> {
        (self.accessor().get)(entity)
    }

    pub fn set(self, entity: &mut Entity, value: AnimValue) -> bool {
        (self.accessor().set)(entity, value)
    }
}

fn default_easing() -> Easing {
    Easing::QuadInOut
}

fn default_true() -> bool {
    true
}

/// Keyframed values for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSequence {
    pub property: AnimProperty,
    /// Keyframe times in milliseconds, ascending.
    pub keyframes: Vec<f32>,
    pub values: Vec<AnimValue>,
    #[serde(default)]
    pub keyframe: usize,
    #[serde(default)]
    pub elapsed: f32,
    #[serde(default = "default_easing")]
    pub easing: Easing,
    #[serde(default = "default_true")]
    pub looping: bool,
    #[serde(default = "default_true")]
    pub playing: bool,
}

impl AnimationSequence {
    pub fn new(property: AnimProperty, keyframes: Vec<f32>, values: Vec<AnimValue>) -> Self {
        Self {
            property,
            keyframes,
            values,
            keyframe: 0,
            elapsed: 0.0,
            easing: default_easing(),
            looping: true,
            playing: true,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Value kind the animated property takes.
    pub fn interpolation(&self) -> InterpolationKind {
        self.property.accessor().kind
    }

    fn is_well_formed(&self) -> bool {
        let kind = self.interpolation();
        self.keyframes.len() >= 2
            && self.values.len() == self.keyframes.len()
            && self.keyframe < self.keyframes.len()
            && self.values.iter().all(|v| v.kind() == kind)
    }

    /// Advance by `dt` ms and return the value to write, if any.
    ///
    /// Between keyframes this is the eased blend of the surrounding values.
    /// Passing a keyframe yields that keyframe's value; passing the last one
    /// rewinds to the start and, unless looping, stops playback.
    pub fn tick(&mut self, dt: f32) -> Option<AnimValue> {
        if !self.playing || !self.is_well_formed() {
            return None;
        }

        self.elapsed += dt;
        let last = self.keyframes.len() - 1;
        let current = self.keyframe;
        let next = if current >= last { 0 } else { current + 1 };

        if self.elapsed < self.keyframes[next] {
            let span = self.keyframes[next] - self.keyframes[current];
            let progress = if span > 0.0 {
                (self.elapsed - self.keyframes[current]) / span
            } else {
                1.0
            };
            return AnimValue::interpolate(self.values[current], self.values[next], progress, self.easing);
        }

        self.keyframe = next;
        let reached = self.values[next];
        if self.keyframe == last {
            self.keyframe = 0;
            self.elapsed = 0.0;
            if !self.looping {
                self.playing = false;
            }
        }
        Some(reached)
    }
}

/// Set of sequences played on one entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Animation {
    pub sequences: Vec<AnimationSequence>,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequence(mut self, sequence: AnimationSequence) -> Self {
        self.sequences.push(sequence);
        self
    }

    /// True while any sequence is still playing.
    pub fn is_playing(&self) -> bool {
        self.sequences.iter().any(|s| s.playing)
    }
}
