use bevy::prelude::*;
use bevy_prng::WyRand;
use rand::SeedableRng;

#[derive(Resource)]
pub struct GenRng(WyRand);

impl GenRng {

    pub fn new(seed: u64) -> Self {
        GenRng(WyRand::seed_from_u64(seed))
    }

    pub fn rng_mut(&mut self) -> &mut WyRand {
        &mut self.0
    }
}

// Parents `entity` under `parent` when one is given
pub(crate) fn attach(commands: &mut Commands, entity: Entity, parent: Option<Entity>) {
    if let Some(parent) = parent {
        commands.entity(entity).set_parent(parent);
    }
}
