// extensions/mod.rs
//
// Pure helpers decoupled from the entity store.

pub mod easing;

pub use easing::{Easing, lerp, lerp_vec2, ease, ease_vec2, ease_color};
