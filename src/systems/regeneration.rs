use std::time::{SystemTime, UNIX_EPOCH};
use bevy::prelude::*;
use crate::core::components::GeneratedRoot;
use crate::core::ride_config::RideConfig;
use crate::spawning::helpers::GenRng;
use crate::spawning::scenery::{send_scenery_events, spawn_generated_root};

pub fn regenerate_on_space(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut gen_rng: ResMut<GenRng>,
    config: Res<RideConfig>,
    roots: Query<Entity, With<GeneratedRoot>>,
) {
    if !keys.just_pressed(KeyCode::Space) { return; }

    // Fresh, non-deterministic seed from system time
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    let seed = now.as_nanos() as u64;
    *gen_rng = GenRng::new(seed);
    info!("[Scenery] Regenerating with seed {}", seed);

    for root in roots.iter() {
        commands.entity(root).despawn_recursive();
    }

    let new_root = spawn_generated_root(&mut commands);
    send_scenery_events(&mut commands, &mut gen_rng, &config, Some(new_root));
}
