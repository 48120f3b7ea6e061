use bevy::prelude::*;
use crate::core::components::GeneratedRoot;
use crate::core::path_curve::TrackCurve;
use crate::core::ride_config::RideConfig;
use crate::core::tmaterial::TMaterial;
use crate::event_system::spawn_events::*;
use crate::geometry::scatter::{clouds, trees};
use crate::geometry::terrain::Terrain;
use crate::geometry::track::{lifters, rails, shadow};
use crate::spawn;
use crate::spawning::funfair::default_funfairs;
use crate::spawning::helpers::GenRng;

pub const BACKGROUND: Color = Color::srgb(240.0 / 255.0, 240.0 / 255.0, 1.0);

pub(crate) fn spawn_generated_root(c: &mut Commands) -> Entity {
    c.spawn_empty()
        .insert(Name::new("GeneratedRoot"))
        .insert(Transform::default())
        .insert(Visibility::default())
        .insert(GeneratedRoot)
        .id()
}

// Lights, ground, trees and clouds: everything drawn from the seeded generator.
pub(crate) fn send_scenery_events(
    c: &mut Commands,
    gen_rng: &mut GenRng,
    config: &RideConfig,
    parent: Option<Entity>,
) {
    let rng = gen_rng.rng_mut();

    let terrain = Terrain::generate(rng);
    let tree_soup = trees(&terrain, config.tree_attempts, rng);
    let cloud_soup = clouds(config.cloud_count, rng);
    debug!(
        "[Scenery] Generated ground, {} trees and {} clouds",
        tree_soup.vertex_count() / 6,
        cloud_soup.triangle_count() / 2
    );

    let (ground_mesh, tree_mesh, sky_mesh) = (terrain.to_mesh(), tree_soup.into_mesh(), cloud_soup.into_mesh());

    spawn!(c,
        AmbientLightSpawnEvent {
            light: AmbientLight {
                color: Color::srgb(1.0, 240.0 / 255.0, 240.0 / 255.0),
                brightness: 400.0,
            },
        },
        DirectionalLightSpawnEvent {
            light: DirectionalLight {
                color: Color::srgb(1.0, 240.0 / 255.0, 240.0 / 255.0),
                illuminance: 3000.0,
                shadows_enabled: true,
                ..default()
            },
            transform: Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
            parent,
        },
        MeshSpawnEvent {
            mesh: ground_mesh,
            transform: Transform::default(),
            material: TMaterial::Matte { color: Srgba::hex("407000").unwrap_or(Srgba::WHITE) },
            name: "Ground".to_string(),
            parent,
        },
        MeshSpawnEvent {
            mesh: tree_mesh,
            transform: Transform::default(),
            material: TMaterial::Unlit { color: Srgba::WHITE, double_sided: true },
            name: "Trees".to_string(),
            parent,
        },
        MeshSpawnEvent {
            mesh: sky_mesh,
            transform: Transform::default(),
            material: TMaterial::Unlit { color: Srgba::WHITE, double_sided: true },
            name: "Sky".to_string(),
            parent,
        },
    );
}

pub fn build_scenery(
    mut c: Commands,
    mut gen_rng: ResMut<GenRng>,
    config: Res<RideConfig>,
) {
    let root = spawn_generated_root(&mut c);
    send_scenery_events(&mut c, &mut gen_rng, &config, Some(root));
}

// Track pieces follow the curve only, so they survive regeneration.
pub fn build_track(
    mut c: Commands,
    curve: Res<TrackCurve>,
    config: Res<RideConfig>,
) {
    let curve = curve.0.as_ref();
    let lifted = Transform::from_xyz(0.0, 0.1, 0.0);

    let track_mesh = rails(curve, config.track_divisions).into_mesh();
    let lifter_mesh = lifters(curve, config.lifter_divisions).into_mesh();
    let shadow_mesh = shadow(curve, config.shadow_divisions).into_mesh();
    info!("[Scenery] Track built from {} divisions", config.track_divisions);

    spawn!(c,
        MeshSpawnEvent {
            mesh: track_mesh,
            transform: Transform::default(),
            material: TMaterial::Glossy { color: Srgba::WHITE },
            name: "Track".to_string(),
            parent: None,
        },
        MeshSpawnEvent {
            mesh: lifter_mesh,
            transform: lifted,
            material: TMaterial::Glossy { color: Srgba::WHITE },
            name: "Lifters".to_string(),
            parent: None,
        },
        MeshSpawnEvent {
            mesh: shadow_mesh,
            transform: lifted,
            material: TMaterial::Decal { color: Srgba::hex("305000").unwrap_or(Srgba::BLACK) },
            name: "TrackShadow".to_string(),
            parent: None,
        },
    );

    for funfair in default_funfairs() {
        spawn!(c, FunfairSpawnEvent { funfair, parent: None });
    }
}
