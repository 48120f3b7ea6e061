use bevy::prelude::*;
use crate::core::tmaterial::TMaterial;

pub fn spawn_mesh(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    mesh: Mesh,
    transform: Transform,
    material: &TMaterial,
    name: &str,
) -> Entity {
    let mesh_handle = meshes.add(mesh);
    let material_handle = materials.add(material.to_standard_material());

    commands.spawn_empty()
        .insert(Mesh3d(mesh_handle))
        .insert(MeshMaterial3d(material_handle))
        .insert(transform)
        .insert(Name::new(name.to_string()))
        .insert(Visibility::default())
        .id()
}
