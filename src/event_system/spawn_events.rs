use bevy::prelude::*;
use crate::core::tmaterial::TMaterial;
use crate::spawning::funfair::FunfairSpec;

#[derive(Debug, Clone, Event)]
pub struct MeshSpawnEvent {
    pub mesh: Mesh,
    pub transform: Transform,
    pub material: TMaterial,
    pub name: String,
    pub parent: Option<Entity>,
}

#[derive(Debug, Clone, Event)]
pub struct DirectionalLightSpawnEvent {
    pub light: DirectionalLight,
    pub transform: Transform,
    pub parent: Option<Entity>,
}

#[derive(Debug, Clone, Event)]
pub struct AmbientLightSpawnEvent {
    pub light: AmbientLight,
}

#[derive(Debug, Clone, Event)]
pub struct FunfairSpawnEvent {
    pub funfair: FunfairSpec,
    pub parent: Option<Entity>,
}
