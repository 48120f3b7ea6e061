use bevy::prelude::*;
use bevy_pbr::CascadeShadowConfig;
use crate::core::components::MainDirectionalLight;

pub(crate) fn spawn_directional_light(
    commands: &mut Commands,
    directional_light: DirectionalLight,
    transform: Transform
) -> Entity {
    commands.spawn_empty()
        .insert(directional_light)
        .insert(transform)
        .insert(CascadeShadowConfig {
            bounds: vec![0.0, 30.0, 90.0, 270.0],
            overlap_proportion: 0.2,
            minimum_distance: 0.0,
        })
        .insert(Name::new("MainDirectionalLight".to_string()))
        .insert(InheritedVisibility::default())
        .insert(MainDirectionalLight)
        .id()
}
