pub mod animation;
pub mod frame_clock;
pub mod presentation;
pub mod regeneration;
pub mod viewport;
