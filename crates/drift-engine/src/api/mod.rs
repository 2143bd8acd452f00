pub mod config;
pub mod sandbox;
pub mod scenario;
pub mod types;
