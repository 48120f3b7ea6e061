use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::core::ride_error::RideError;
use crate::core::vehicle::RideParams;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Reflect)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance between the two eye cameras in stereo mode.
    pub eye_separation: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            fov_degrees: 50.0,
            near: 0.1,
            far: 500.0,
            eye_separation: 0.064,
        }
    }
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct RideConfig {
    pub seed: u64,
    pub physics: RideParams,
    /// Funfair spin in radians per millisecond.
    pub prop_spin_rate: f64,
    pub track_divisions: usize,
    pub lifter_divisions: usize,
    pub shadow_divisions: usize,
    pub tree_attempts: usize,
    pub cloud_count: usize,
    pub camera: CameraConfig,
    pub start_in_stereo: bool,
}

impl Default for RideConfig {
    fn default() -> Self {
        RideConfig {
            seed: 132,
            physics: RideParams::default(),
            prop_spin_rate: 0.0004,
            track_divisions: 1500,
            lifter_divisions: 100,
            shadow_divisions: 500,
            tree_attempts: 2000,
            cloud_count: 100,
            camera: CameraConfig::default(),
            start_in_stereo: false,
        }
    }
}

impl RideConfig {
    pub fn validate(&self) -> Result<(), RideError> {
        let p = &self.physics;
        let finite = [p.gravity, p.min_velocity, p.max_velocity, p.rail_offset, self.prop_spin_rate];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err("physics values must be finite".into());
        }
        if p.gravity < 0.0 {
            return Err(RideError::Invalid(format!("gravity must not be negative, got {}", p.gravity)));
        }
        if p.min_velocity < 0.0 || p.min_velocity > p.max_velocity {
            return Err(RideError::Invalid(format!(
                "velocity range [{}, {}] is empty or negative",
                p.min_velocity, p.max_velocity
            )));
        }
        if p.max_velocity >= 1.0 {
            return Err(RideError::Invalid(format!(
                "max velocity {} would skip whole loops in one frame",
                p.max_velocity
            )));
        }
        if self.track_divisions == 0 || self.lifter_divisions == 0 || self.shadow_divisions == 0 {
            return Err("track, lifter and shadow divisions must be positive".into());
        }
        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(RideError::Invalid(format!("field of view {} is out of range", cam.fov_degrees)));
        }
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return Err(RideError::Invalid(format!("clip planes {}..{} are out of order", cam.near, cam.far)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RideConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_velocity_range_is_rejected() {
        let mut config = RideConfig::default();
        config.physics.min_velocity = 1e-3;
        assert!(matches!(config.validate(), Err(RideError::Invalid(_))));
    }

    #[test]
    fn velocity_of_a_full_loop_per_frame_is_rejected() {
        let mut config = RideConfig::default();
        config.physics.max_velocity = 1.0;
        assert!(matches!(config.validate(), Err(RideError::Invalid(_))));

        config.physics.max_velocity = 0.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_divisions_are_rejected() {
        let config = RideConfig { shadow_divisions: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_ron_falls_back_to_defaults() {
        let config: RideConfig = ron::from_str("(seed: 7, camera: (fov_degrees: 70.0))").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.camera.fov_degrees, 70.0);
        assert_eq!(config.camera.far, 500.0);
        assert_eq!(config.track_divisions, 1500);
        assert_eq!(config.physics, RideParams::default());
    }
}
