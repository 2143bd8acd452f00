use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

use crate::api::types::EntityId;
use crate::core::world::World;
use crate::extensions::easing::{lerp, lerp_vec2};
use crate::input::keys::{Key, MouseButton};
use crate::input::state::InputState;

/// 2D camera with panning, zooming and entity following.
///
/// `position` and `zoom` ease toward their targets every update, so every
/// input only ever moves the targets.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera center in world space.
    pub position: Vec2,
    pub target_position: Vec2,
    pub zoom: f32,
    pub target_zoom: f32,
    /// Viewport size in screen pixels.
    pub viewport: Vec2,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Pan distance per update at zoom 1, in world units.
    pub pan_speed: f32,
    /// Fraction of the remaining distance covered per update (0..1).
    pub follow_factor: f32,
    /// Entity whose position keeps overriding the target.
    pub following: Option<EntityId>,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub projection: [[f32; 4]; 4],
}

impl Camera {
    pub const KEY_ZOOM_STEP: f32 = 1.05;
    pub const WHEEL_ZOOM_STEP: f32 = 1.1;

    pub fn new(viewport: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            target_position: Vec2::ZERO,
            zoom: 1.0,
            target_zoom: 1.0,
            viewport,
            min_zoom: 0.01,
            max_zoom: 1000.0,
            pan_speed: 10.0,
            follow_factor: 0.1,
            following: None,
        }
    }

    pub fn with_zoom_limits(mut self, min_zoom: f32, max_zoom: f32) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom.max(min_zoom);
        self
    }

    pub fn with_pan_speed(mut self, pan_speed: f32) -> Self {
        self.pan_speed = pan_speed;
        self
    }

    pub fn with_follow_factor(mut self, factor: f32) -> Self {
        self.follow_factor = factor.clamp(0.0, 1.0);
        self
    }

    /// Resize the viewport (e.g. on window resize).
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Aim at a fixed world point, dropping any followed entity.
    pub fn look_at(&mut self, target: Vec2) {
        self.following = None;
        self.target_position = target;
    }

    /// Keep aiming at an entity until it disappears or the user pans.
    pub fn follow(&mut self, id: EntityId) {
        self.following = Some(id);
    }

    /// Back to the origin at zoom 1.
    pub fn reset(&mut self) {
        self.look_at(Vec2::ZERO);
        self.target_zoom = 1.0;
    }

    /// Apply held keys and wheel to the targets, then ease toward them.
    pub fn update(&mut self, input: &InputState, world: &World) {
        let pan = self.pan_speed / self.zoom;
        let mut offset = Vec2::ZERO;
        if input.is_key_down(Key::ArrowLeft) || input.is_key_down(Key::KeyA) {
            offset.x -= pan;
        }
        if input.is_key_down(Key::ArrowRight) || input.is_key_down(Key::KeyD) {
            offset.x += pan;
        }
        if input.is_key_down(Key::ArrowUp) || input.is_key_down(Key::KeyW) {
            offset.y -= pan;
        }
        if input.is_key_down(Key::ArrowDown) || input.is_key_down(Key::KeyS) {
            offset.y += pan;
        }
        if offset != Vec2::ZERO {
            self.look_at(self.target_position + offset);
        }

        if input.is_key_down(Key::NumpadAdd) {
            self.target_zoom *= Self::KEY_ZOOM_STEP;
        } else if input.is_key_down(Key::NumpadSubtract) {
            self.target_zoom /= Self::KEY_ZOOM_STEP;
        }
        let wheel = input.wheel();
        if wheel < 0.0 {
            self.target_zoom *= Self::WHEEL_ZOOM_STEP;
        } else if wheel > 0.0 {
            self.target_zoom /= Self::WHEEL_ZOOM_STEP;
        }
        self.target_zoom = self.target_zoom.clamp(self.min_zoom, self.max_zoom);

        if input.is_key_down(Key::NumpadMultiply) || input.is_button_down(MouseButton::Middle) {
            self.reset();
        }

        if let Some(id) = self.following {
            match world.get(id).filter(|e| !e.expired).and_then(|e| e.transform) {
                Some(t) => self.target_position = t.position,
                None => self.following = None,
            }
        }

        self.position = lerp_vec2(self.position, self.target_position, self.follow_factor);
        self.zoom = lerp(self.zoom, self.target_zoom, self.follow_factor);
    }

    /// World position under a screen pixel.
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        self.position + (point - self.viewport / 2.0) / self.zoom
    }

    /// Screen pixel of a world position.
    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        (point - self.position) * self.zoom + self.viewport / 2.0
    }

    /// Visible world size.
    pub fn visible_size(&self) -> Vec2 {
        self.viewport / self.zoom
    }

    /// Orthographic projection for the visible area, Y down like screen space.
    pub fn projection_matrix(&self) -> Mat4 {
        let half = self.visible_size() / 2.0;
        Mat4::orthographic_rh(
            self.position.x - half.x,
            self.position.x + half.x,
            self.position.y + half.y,
            self.position.y - half.y,
            0.0,
            1.0,
        )
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            projection: self.projection_matrix().to_cols_array_2d(),
        }
    }

    /// Check if a world-space rectangle overlaps the viewport.
    pub fn is_rect_visible(&self, rect_center: Vec2, rect_half_size: Vec2) -> bool {
        let half = self.visible_size() / 2.0;
        let delta = (rect_center - self.position).abs();
        delta.x <= half.x + rect_half_size.x && delta.y <= half.y + rect_half_size.y
    }
}
