use bytemuck::{Pod, Zeroable};

use crate::renderer::draw::ShapeDraw;

/// Per-shape render data for GPU hosts.
/// 16 floats = 64 bytes stride; colours are straight RGBA in [0, 1].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// World-space width.
    pub scale_x: f32,
    /// World-space height.
    pub scale_y: f32,
    /// Rotation in radians.
    pub angle: f32,
    /// `ShapeKind` discriminant.
    pub kind: f32,
    pub fill: [f32; 4],
    pub outline: [f32; 4],
    /// Zero when the shape has no outline.
    pub outline_width: f32,
    pub _pad: f32,
}

impl ShapeInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&ShapeDraw> for ShapeInstance {
    fn from(shape: &ShapeDraw) -> Self {
        let (outline, outline_width) = match shape.outline {
            Some(o) => (o.color.to_rgba(), o.width),
            None => ([0.0; 4], 0.0),
        };
        Self {
            x: shape.position.x,
            y: shape.position.y,
            scale_x: shape.scale.x,
            scale_y: shape.scale.y,
            angle: shape.angle,
            kind: shape.kind as u8 as f32,
            fill: shape.color.to_rgba(),
            outline,
            outline_width,
            _pad: 0.0,
        }
    }
}

/// Instance buffer the host reads straight out of linear memory.
#[derive(Debug, Clone)]
pub struct InstanceBuffer {
    pub instances: Vec<ShapeInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: ShapeInstance) {
        self.instances.push(instance);
    }

    /// Replace the contents with one instance per shape, preserving order.
    pub fn fill<'a>(&mut self, shapes: impl IntoIterator<Item = &'a ShapeDraw>) {
        self.clear();
        self.instances.extend(shapes.into_iter().map(ShapeInstance::from));
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy reads from the host.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}
