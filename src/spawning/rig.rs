use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use crate::core::components::{Eye, EyeCamera, MainCamera, Train};
use crate::core::ride_config::{CameraConfig, RideConfig};

pub(crate) fn perspective(camera: &CameraConfig) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: camera.fov_degrees.to_radians(),
        near: camera.near,
        far: camera.far,
        ..default()
    })
}

/// Spawns the train with a mono camera and a pair of eye cameras riding on it.
///
/// Only the mono camera starts active; presentation switches which ones render.
pub fn spawn_train_rig(commands: &mut Commands, camera: &CameraConfig) -> Entity {
    let train = commands.spawn_empty()
        .insert(Name::new("Train"))
        .insert(Transform::default())
        .insert(Visibility::default())
        .insert(Train)
        .id();

    commands.spawn_empty()
        .insert(Camera3d::default())
        .insert(Camera { order: 0, ..default() })
        .insert(perspective(camera))
        .insert(Transform::default())
        .insert(Name::new("MainCamera"))
        .insert(MainCamera)
        .set_parent(train);

    for (order, eye) in [(1, Eye::Left), (2, Eye::Right)] {
        commands.spawn_empty()
            .insert(Camera3d::default())
            .insert(Camera {
                order,
                is_active: false,
                // The left eye already cleared the window
                clear_color: if eye == Eye::Left { ClearColorConfig::Default } else { ClearColorConfig::None },
                ..default()
            })
            .insert(perspective(camera))
            .insert(Transform::from_xyz(eye.sign() * camera.eye_separation / 2.0, 0.0, 0.0))
            .insert(Name::new(format!("{:?}EyeCamera", eye)))
            .insert(EyeCamera(eye))
            .set_parent(train);
    }

    // UI gets its own camera so the button survives every presentation mode
    commands.spawn_empty()
        .insert(Camera2d)
        .insert(Camera { order: 10, clear_color: ClearColorConfig::None, ..default() })
        .insert(IsDefaultUiCamera)
        .insert(Name::new("UiCamera"));

    train
}

pub(crate) fn spawn_ride_rig(mut commands: Commands, config: Res<RideConfig>) {
    spawn_train_rig(&mut commands, &config.camera);
}
