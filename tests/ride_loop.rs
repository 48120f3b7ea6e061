use std::f64::consts::TAU;
use std::time::Duration;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::window::{PrimaryWindow, WindowResized, WindowResolution};
use coaster_vr::core::coaster_plugin::RidePlugin;
use coaster_vr::core::components::{Eye, EyeCamera, Funfair, MainCamera, Train};
use coaster_vr::core::path_curve::{CoasterCurve, PathCurve};
use coaster_vr::core::ride_config::RideConfig;
use coaster_vr::core::vehicle::{RideStats, VehicleState};
use coaster_vr::systems::frame_clock::FrameClock;
use coaster_vr::systems::presentation::PresentationMode;
use coaster_vr::systems::viewport::fit_viewports;

fn ride_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)))
        .add_plugins(RidePlugin);
    app
}

fn spawn_train(app: &mut App) -> Entity {
    app.world_mut().spawn((Transform::default(), Train)).id()
}

#[test]
fn train_rides_the_curve() {
    let mut app = ride_app();
    let train = spawn_train(&mut app);

    for _ in 0..500 {
        app.update();

        let state = *app.world().resource::<VehicleState>();
        assert!((0.0..1.0).contains(&state.progress));
        assert!(state.velocity >= 4e-5 && state.velocity <= 2e-4);

        let transform = app.world().get::<Transform>(train).unwrap();
        let expected = CoasterCurve.position(state.progress).as_vec3() + Vec3::new(0.0, 0.3, 0.0);
        assert!(transform.translation.distance(expected) < 1e-3);

        let tangent = CoasterCurve.tangent(state.progress).as_vec3();
        assert!(transform.forward().dot(tangent) > 0.999);
    }

    assert_eq!(app.world().resource::<RideStats>().frames, 500);
}

#[test]
fn clock_follows_real_time() {
    let mut app = ride_app();
    app.update();
    app.update();
    app.update();

    let clock = *app.world().resource::<FrameClock>();
    let elapsed = app.world().resource::<Time<Real>>().elapsed().as_secs_f64() * 1000.0;
    assert!((clock.now_ms - elapsed).abs() < 1e-9);
    assert!((clock.delta_ms - 16.0).abs() < 1e-6);
}

#[test]
fn wrapping_counts_a_lap() {
    let mut app = ride_app();
    spawn_train(&mut app);
    app.world_mut().insert_resource(VehicleState { progress: 0.99999, velocity: 2e-4 });

    app.update();

    let state = *app.world().resource::<VehicleState>();
    assert!(state.progress < 0.001);
    assert_eq!(app.world().resource::<RideStats>().laps, 1);
}

#[test]
fn props_spin_with_elapsed_time() {
    let mut app = ride_app();
    let prop = app.world_mut()
        .spawn((Transform::default(), Funfair { tilt: 0.0 }))
        .id();

    for _ in 0..40 {
        app.update();
    }

    let elapsed_ms = app.world().resource::<Time<Real>>().elapsed().as_secs_f64() * 1000.0;
    let rate = app.world().resource::<RideConfig>().prop_spin_rate;
    let expected = Quat::from_rotation_y((elapsed_ms * rate).rem_euclid(TAU) as f32);

    let rotation = app.world().get::<Transform>(prop).unwrap().rotation;
    assert!(rotation.angle_between(expected) < 1e-4);
}

#[test]
fn stereo_splits_the_window() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_event::<WindowResized>()
        .insert_state(PresentationMode::Mono)
        .add_systems(Update, fit_viewports);

    app.world_mut().spawn((
        Window { resolution: WindowResolution::new(1000.0, 500.0), ..default() },
        PrimaryWindow,
    ));
    let mono = app.world_mut()
        .spawn((Camera::default(), Projection::Perspective(PerspectiveProjection::default()), MainCamera))
        .id();
    let left = app.world_mut()
        .spawn((Camera { is_active: false, ..default() }, Projection::Perspective(PerspectiveProjection::default()), EyeCamera(Eye::Left)))
        .id();
    let right = app.world_mut()
        .spawn((Camera { is_active: false, ..default() }, Projection::Perspective(PerspectiveProjection::default()), EyeCamera(Eye::Right)))
        .id();

    app.update();
    assert!(app.world().get::<Camera>(mono).unwrap().is_active);
    assert!(!app.world().get::<Camera>(left).unwrap().is_active);

    app.world_mut().resource_mut::<NextState<PresentationMode>>().set(PresentationMode::Stereo);
    app.update();
    app.update();

    let world = app.world();
    assert!(!world.get::<Camera>(mono).unwrap().is_active);
    let left_cam = world.get::<Camera>(left).unwrap();
    let right_cam = world.get::<Camera>(right).unwrap();
    assert!(left_cam.is_active && right_cam.is_active);

    let left_view = left_cam.viewport.as_ref().unwrap();
    let right_view = right_cam.viewport.as_ref().unwrap();
    assert_eq!(left_view.physical_size, UVec2::new(500, 500));
    assert_eq!(right_view.physical_position, UVec2::new(500, 0));

    match world.get::<Projection>(left).unwrap() {
        Projection::Perspective(p) => assert!((p.aspect_ratio - 1.0).abs() < 1e-6),
        other => panic!("unexpected projection {other:?}"),
    }
}
