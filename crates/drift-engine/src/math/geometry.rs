// math/geometry.rs
//
// Collision helpers: circles, segments and axis-aligned boxes.
// Degenerate input (zero-length or parallel segments) reports no intersection.

use glam::Vec2;

/// Tolerance used when deciding whether a point lies on a segment.
pub const ON_SEGMENT_BUFFER: f32 = 0.1;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box spanning `center ± half_extents`.
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Strict overlap test: boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    (point - center).length() <= radius
}

/// Intersection point of segments `a0-a1` and `b0-b1`, if they cross.
pub fn segment_intersection(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Option<Vec2> {
    let s1 = a1 - a0;
    let s2 = b1 - b0;
    let denom = -s2.x * s1.y + s1.x * s2.y;
    if denom.abs() <= f32::EPSILON {
        return None;
    }
    let s = (-s1.y * (a0.x - b0.x) + s1.x * (a0.y - b0.y)) / denom;
    let t = (s2.x * (a0.y - b0.y) - s2.y * (a0.x - b0.x)) / denom;
    if (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t) {
        Some(a0 + s1 * t)
    } else {
        None
    }
}

pub fn segments_intersect(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> bool {
    segment_intersection(a0, a1, b0, b1).is_some()
}

/// Whether `point` lies on the segment, within `ON_SEGMENT_BUFFER`.
pub fn point_on_segment(start: Vec2, end: Vec2, point: Vec2) -> bool {
    let via_point = (point - start).length() + (point - end).length();
    let length = (end - start).length();
    via_point >= length - ON_SEGMENT_BUFFER && via_point <= length + ON_SEGMENT_BUFFER
}

/// Whether the segment `start-end` touches the circle.
pub fn segment_circle(start: Vec2, end: Vec2, center: Vec2, radius: f32) -> bool {
    if point_in_circle(start, center, radius) || point_in_circle(end, center, radius) {
        return true;
    }
    let span = end - start;
    let length_sq = span.length_squared();
    if length_sq <= f32::EPSILON {
        return false;
    }
    let t = (center - start).dot(span) / length_sq;
    let closest = start + span * t;
    if !point_on_segment(start, end, closest) {
        return false;
    }
    (closest - center).length() <= radius
}
