// math/vector.rs
//
// 2D vector helpers on top of glam::Vec2.
// Addition, scaling, dot product and magnitude come straight from glam's
// operators. Everything here returns a new value.

use std::f32::consts::FRAC_PI_2;
use glam::Vec2;

/// Rotate `v` counter-clockwise by `angle` radians.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.y * cos + v.x * sin)
}

/// Direction of `v` in radians, `atan2(y, x)`. Zero for the zero vector.
#[inline]
pub fn angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Build a vector pointing at `angle` with length `magnitude`.
#[inline]
pub fn from_angle_and_magnitude(angle: f32, magnitude: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(magnitude * cos, magnitude * sin)
}

/// Unit vector in the direction of `v`. The zero vector is returned unchanged.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let m = v.length();
    if m > 0.0 {
        v / m
    } else {
        v
    }
}

/// Unit normal of the segment `start -> end` (the direction rotated a quarter turn).
pub fn segment_normal(start: Vec2, end: Vec2) -> Vec2 {
    normalize(rotate(end - start, FRAC_PI_2))
}

/// Reflect `v` across the normal of the segment `start -> end`.
pub fn reflect(v: Vec2, start: Vec2, end: Vec2) -> Vec2 {
    let n = segment_normal(start, end);
    v - n * (2.0 * v.dot(n))
}

/// Shorten `v` to at most `max` length, keeping its direction.
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    let m = v.length();
    if m > max && m > 0.0 {
        v * (max / m)
    } else {
        v
    }
}
