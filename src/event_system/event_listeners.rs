use bevy::prelude::*;
use crate::core::components::MainDirectionalLight;
use crate::event_system::spawn_events::*;
use crate::spawning::funfair::spawn_funfair;
use crate::spawning::helpers::attach;
use crate::spawning::light_spawning::spawn_directional_light;
use crate::spawning::mesh_spawning::spawn_mesh;

pub fn mesh_spawn_listener(
    mut commands: Commands,
    mut reader: EventReader<MeshSpawnEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in reader.read() {
        let entity = spawn_mesh(
            &mut commands,
            &mut meshes,
            &mut materials,
            event.mesh.clone(),
            event.transform,
            &event.material,
            &event.name,
        );
        attach(&mut commands, entity, event.parent);
        debug!("[Scenery] Spawned {} ({} vertices)", event.name, event.mesh.count_vertices());
    }
}

pub fn directional_light_spawn_listener(
    mut commands: Commands,
    mut reader: EventReader<DirectionalLightSpawnEvent>,
    existing: Query<Entity, With<MainDirectionalLight>>,
) {
    for event in reader.read() {
        // Only one main light at a time; a new one replaces the old
        for old in existing.iter() {
            commands.entity(old).despawn_recursive();
        }
        let entity = spawn_directional_light(&mut commands, event.light.clone(), event.transform);
        attach(&mut commands, entity, event.parent);
    }
}

pub fn ambient_light_spawn_listener(
    mut reader: EventReader<AmbientLightSpawnEvent>,
    mut ambient: ResMut<AmbientLight>,
) {
    for event in reader.read() {
        *ambient = event.light.clone();
    }
}

pub fn funfair_spawn_listener(
    mut commands: Commands,
    mut reader: EventReader<FunfairSpawnEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in reader.read() {
        let entity = spawn_funfair(&mut commands, &mut meshes, &mut materials, &event.funfair);
        attach(&mut commands, entity, event.parent);
    }
}
