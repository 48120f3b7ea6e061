pub mod coaster_plugin;
pub mod components;
pub mod path_curve;
pub mod ride_config;
pub mod ride_error;
pub mod tmaterial;
pub mod vehicle;
