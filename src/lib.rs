pub mod core;
pub mod event_system;
pub mod geometry;
pub mod management;
pub mod spawning;
pub mod systems;
