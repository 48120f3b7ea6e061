use bevy::prelude::*;
use crate::event_system::spawn_events::*;
use crate::event_system::event_listeners::*;

pub struct EventSystemPlugin;

impl Plugin for EventSystemPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AmbientLight>();
        // Registering all events
        app.add_event::<MeshSpawnEvent>()
            .add_event::<DirectionalLightSpawnEvent>()
            .add_event::<AmbientLightSpawnEvent>()
            .add_event::<FunfairSpawnEvent>();

        app.add_systems(Update, (
            mesh_spawn_listener,
            directional_light_spawn_listener,
            ambient_light_spawn_listener,
            funfair_spawn_listener,
        ));
    }
}
