//! Renderer trait for native hosts.
//!
//! The WASM host draws from the JSON draw list or the instance buffer in
//! JavaScript. Native backends implement this trait instead and receive
//! the same data.

use super::camera::CameraUniform;
use super::draw::DrawList;
use super::instance::ShapeInstance;

/// Timing information from a draw call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawTiming {
    /// Time spent submitting draw calls (microseconds)
    pub draw_us: u32,
}

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// Full draw list in back-to-front order.
    pub draw_list: &'a DrawList,
    /// Shapes from `draw_list`, packed for GPU upload.
    pub instances: &'a [ShapeInstance],
    /// Projection for the current camera.
    pub camera: CameraUniform,
}

/// Renderer trait for drawing backends.
pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d", "wgpu", "headless").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData) -> DrawTiming;

    /// Handle viewport resize, in pixels.
    fn resize(&mut self, width: u32, height: u32);
}
