use std::f32::consts::FRAC_PI_2;
use bevy::prelude::*;
use bevy::render::mesh::{MeshBuilder, Meshable};
use crate::core::components::Funfair;
use crate::core::tmaterial::TMaterial;
use crate::spawning::mesh_spawning::spawn_mesh;

/// A drum-shaped fairground prop.
#[derive(Debug, Clone, PartialEq)]
pub struct FunfairSpec {
    pub name: String,
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub sides: u32,
    pub color: Srgba,
    pub translation: Vec3,
    pub tilt: f32,
}

impl FunfairSpec {
    pub fn mesh(&self) -> Mesh {
        ConicalFrustum {
            radius_top: self.radius_top,
            radius_bottom: self.radius_bottom,
            height: self.height,
        }
        .mesh()
        .resolution(self.sides)
        .build()
    }

    pub fn material(&self) -> TMaterial {
        TMaterial::Matte { color: self.color }
    }
}

// The wheel standing on its rim and the carousel
pub fn default_funfairs() -> Vec<FunfairSpec> {
    vec![
        FunfairSpec {
            name: "Wheel".to_string(),
            radius_top: 10.0,
            radius_bottom: 10.0,
            height: 5.0,
            sides: 15,
            color: Srgba::hex("ff8080").unwrap_or(Srgba::WHITE),
            translation: Vec3::new(-80.0, 10.0, -70.0),
            tilt: FRAC_PI_2,
        },
        FunfairSpec {
            name: "Carousel".to_string(),
            radius_top: 5.0,
            radius_bottom: 6.0,
            height: 4.0,
            sides: 10,
            color: Srgba::hex("8080ff").unwrap_or(Srgba::WHITE),
            translation: Vec3::new(50.0, 2.0, 30.0),
            tilt: 0.0,
        },
    ]
}

pub(crate) fn spawn_funfair(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    spec: &FunfairSpec,
) -> Entity {
    let transform = Transform::from_translation(spec.translation)
        .with_rotation(Quat::from_rotation_x(spec.tilt));

    let entity = spawn_mesh(commands, meshes, materials, spec.mesh(), transform, &spec.material(), &spec.name);
    commands.entity(entity).insert(Funfair { tilt: spec.tilt });
    entity
}
