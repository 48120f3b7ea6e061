use std::f64::consts::TAU;
use bevy::prelude::*;
use crate::core::components::{Funfair, Train};
use crate::core::path_curve::TrackCurve;
use crate::core::ride_config::RideConfig;
use crate::core::vehicle::{RideStats, VehicleState};
use crate::systems::frame_clock::FrameClock;

pub fn animate_vehicle(
    clock: Res<FrameClock>,
    curve: Res<TrackCurve>,
    config: Res<RideConfig>,
    mut state: ResMut<VehicleState>,
    mut stats: ResMut<RideStats>,
    mut trains: Query<&mut Transform, With<Train>>,
) {
    let pose = state.step(curve.0.as_ref(), clock.delta_ms, &config.physics);

    stats.frames += 1;
    if pose.wrapped {
        stats.laps += 1;
        info!("[Ride] Lap {} completed after {} frames", stats.laps, stats.frames);
    }

    let transform = pose.transform();
    for mut train in trains.iter_mut() {
        *train = transform;
    }
}

/// Spin about Y after the prop's fixed tilt, wrapped to one turn.
pub fn funfair_rotation(tilt: f32, elapsed_ms: f64, spin_rate: f64) -> Quat {
    let spin = (elapsed_ms * spin_rate).rem_euclid(TAU) as f32;
    Quat::from_euler(EulerRot::XYZ, tilt, spin, 0.0)
}

pub fn spin_funfairs(
    clock: Res<FrameClock>,
    config: Res<RideConfig>,
    mut funfairs: Query<(&mut Transform, &Funfair)>,
) {
    for (mut transform, funfair) in funfairs.iter_mut() {
        transform.rotation = funfair_rotation(funfair.tilt, clock.now_ms, config.prop_spin_rate);
    }
}
