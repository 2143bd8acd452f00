pub mod persist;
pub mod time;
pub mod world;
