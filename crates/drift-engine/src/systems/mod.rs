pub mod animation;
pub mod collision;
pub mod emission;
pub mod expiration;
pub mod force_field;
pub mod movement;
pub mod navigation;
pub mod render;
pub mod selection;
pub mod trace;

pub use animation::tick_animations;
pub use collision::{detect_collisions, handle_collisions};
pub use emission::{emit_particles, spawn_particle};
pub use expiration::tick_expiration;
pub use force_field::apply_force_fields;
pub use movement::tick_movement;
pub use navigation::{command_navigation, steer_navigation};
pub use render::build_draw_list;
pub use selection::select_at;
pub use trace::record_traces;
