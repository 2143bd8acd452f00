pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod math;
pub mod scenarios;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::SandboxConfig;
pub use api::sandbox::Sandbox;
pub use api::scenario::Scenario;
pub use api::types::{EntityId, SandboxEvent};
pub use components::entity::{Component, ComponentKind, Entity};
pub use components::layer::RenderLayer;
pub use core::persist::LoadError;
pub use core::time::{FrameSteps, MainLoop};
pub use core::world::World;
pub use input::{InputEvent, InputQueue, InputState, Key, MouseButton};
pub use math::{Aabb, Color, Rng};
pub use renderer::{Camera, DrawList, InstanceBuffer, Renderer, ShapeInstance};
pub use scenarios::{NavigationScenario, SwarmScenario};

// Extensions: pure helpers with no world access
pub use extensions::{Easing, lerp, lerp_vec2, ease, ease_vec2, ease_color};
