pub mod funfair;
pub mod helpers;
pub mod light_spawning;
pub mod mesh_spawning;
pub mod rig;
pub mod scenery;
