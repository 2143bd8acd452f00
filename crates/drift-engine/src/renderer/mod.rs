pub mod camera;
pub mod draw;
pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{Camera, CameraUniform};
pub use draw::{DrawList, HighlightDraw, Outline, ShapeDraw, TraceDraw, ViewDraw};
pub use instance::{InstanceBuffer, ShapeInstance};
pub use traits::{DrawTiming, FrameData, Renderer};
