use bevy::prelude::*;
use bevy_math::DVec3;
use serde::{Deserialize, Serialize};
use crate::core::path_curve::PathCurve;

/// Tunables for the ride's velocity integrator.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Reflect)]
#[serde(default)]
pub struct RideParams {
    /// Velocity lost per millisecond per unit of upward slope.
    pub gravity: f64,
    pub min_velocity: f64,
    pub max_velocity: f64,
    /// Height of the vehicle above the rail centreline.
    pub rail_offset: f64,
}

impl Default for RideParams {
    fn default() -> Self {
        RideParams {
            gravity: 1e-7,
            min_velocity: 4e-5,
            max_velocity: 2e-4,
            rail_offset: 0.3,
        }
    }
}

/// Where the vehicle is this frame, and which way the track runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehiclePose {
    pub position: DVec3,
    pub tangent: DVec3,
    /// Set when `progress` wrapped past the end of the loop this step.
    pub wrapped: bool,
}

impl VehiclePose {
    /// Scene-node orientation facing `position - tangent`.
    ///
    /// Scene nodes point their +Z axis at a look-at target, so a camera carried by
    /// the node (looking down its own -Z) sees along `tangent`.
    pub fn transform(&self) -> Transform {
        let position = self.position.as_vec3();
        let target = (self.position - self.tangent).as_vec3();
        node_looking_at(position, target)
    }
}

/// Progress along the loop and current speed, in loops per frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct VehicleState {
    pub progress: f64,
    pub velocity: f64,
}

impl VehicleState {
    /// Moves along the loop by the current velocity. Returns true on wraparound.
    pub fn advance(&mut self) -> bool {
        let next = self.progress + self.velocity;
        self.progress = next.rem_euclid(1.0);
        next >= 1.0
    }

    /// Gravity-like integration: uphill slopes slow the vehicle, downhill ones speed it up.
    pub fn apply_slope(&mut self, slope: f64, delta_ms: f64, params: &RideParams) {
        self.velocity -= slope * params.gravity * delta_ms;
        self.velocity = params.min_velocity.max(params.max_velocity.min(self.velocity));
    }

    pub fn step(&mut self, curve: &dyn PathCurve, delta_ms: f64, params: &RideParams) -> VehiclePose {
        let wrapped = self.advance();

        let position = curve.position(self.progress) + DVec3::Y * params.rail_offset;
        let tangent = curve.tangent(self.progress);

        self.apply_slope(tangent.y, delta_ms, params);

        VehiclePose { position, tangent, wrapped }
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct RideStats {
    pub laps: u64,
    pub frames: u64,
}

/// Orients a node at `position` so its +Z axis points at `target`, with +Y kept up.
pub fn node_looking_at(position: Vec3, target: Vec3) -> Transform {
    let direction = position - target;
    if direction.length_squared() <= f32::EPSILON {
        return Transform::from_translation(position);
    }
    Transform::from_translation(position).looking_to(direction, Vec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::path_curve::CoasterCurve;
    use approx::assert_relative_eq;

    struct Level;

    impl PathCurve for Level {
        fn position(&self, t: f64) -> DVec3 {
            let theta = t * std::f64::consts::TAU;
            DVec3::new(theta.cos(), 0.0, theta.sin()) * 10.0
        }
    }

    #[test]
    fn steep_climb_engages_floor_clamp() {
        let params = RideParams::default();
        let mut state = VehicleState::default();
        state.advance();
        state.apply_slope(2.0, 16.0, &params);
        assert_eq!(state.velocity, 4e-5);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn steep_descent_engages_ceiling_clamp() {
        let params = RideParams::default();
        let mut state = VehicleState { progress: 0.5, velocity: 1.9e-4 };
        state.apply_slope(-1.0, 1000.0, &params);
        assert_eq!(state.velocity, 2e-4);
    }

    #[test]
    fn gentle_slope_integrates_linearly() {
        let params = RideParams::default();
        let mut state = VehicleState { progress: 0.0, velocity: 1e-4 };
        state.apply_slope(-0.5, 16.0, &params);
        assert_relative_eq!(state.velocity, 1e-4 + 0.5 * 1e-7 * 16.0, epsilon = 1e-15);
    }

    #[test]
    fn progress_stays_in_unit_interval() {
        let params = RideParams::default();
        let mut state = VehicleState::default();
        for _ in 0..100_000 {
            state.step(&CoasterCurve, 16.67, &params);
            assert!((0.0..1.0).contains(&state.progress), "progress {}", state.progress);
            assert!(state.velocity >= params.min_velocity && state.velocity <= params.max_velocity);
        }
    }

    #[test]
    fn floor_speed_closes_the_loop() {
        let params = RideParams::default();
        let mut state = VehicleState::default();
        state.step(&Level, 16.0, &params);
        assert_eq!(state.velocity, params.min_velocity);

        let start = state.progress;
        let mut laps = 0;
        for _ in 0..25_000 {
            if state.step(&Level, 16.0, &params).wrapped {
                laps += 1;
            }
        }
        let drift = (state.progress - start).abs();
        assert!(drift.min(1.0 - drift) < 1e-9, "start {start} end {}", state.progress);
        assert!(laps <= 1);
    }

    #[test]
    fn pose_sits_above_the_rail() {
        let params = RideParams::default();
        let mut state = VehicleState::default();
        let pose = state.step(&CoasterCurve, 16.0, &params);
        let rail = CoasterCurve.position(state.progress);
        assert_relative_eq!(pose.position.y - rail.y, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn carried_camera_looks_along_the_tangent() {
        let pose = VehiclePose {
            position: DVec3::new(1.0, 2.0, 3.0),
            tangent: DVec3::X,
            wrapped: false,
        };
        let transform = pose.transform();
        // +Z faces the look-at target, so -Z (a camera's forward) faces the tangent
        assert!(transform.back().dot(Vec3::NEG_X) > 0.999);
        assert!(transform.forward().dot(Vec3::X) > 0.999);
        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
    }
}
