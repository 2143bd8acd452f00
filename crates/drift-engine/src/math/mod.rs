// math/mod.rs
//
// Value types and pure helpers shared by every system.

pub mod vector;
pub mod color;
pub mod geometry;
pub mod rng;

pub use color::Color;
pub use geometry::Aabb;
pub use rng::Rng;
