use bevy::app::{App, Plugin};
use bevy::prelude::*;

use crate::core::components::Funfair;
use crate::core::path_curve::TrackCurve;
use crate::core::ride_config::RideConfig;
use crate::core::vehicle::{RideStats, VehicleState};
use crate::event_system::event_system_plugin::EventSystemPlugin;
use crate::spawning::helpers::GenRng;
use crate::spawning::rig::spawn_ride_rig;
use crate::spawning::scenery::{build_scenery, build_track, BACKGROUND};
use crate::systems::animation::{animate_vehicle, spin_funfairs};
use crate::systems::frame_clock::{tick_frame_clock, FrameClock};
use crate::systems::presentation::{PresentationMode, PresentationPlugin};
use crate::systems::regeneration::regenerate_on_space;
use crate::systems::viewport::fit_viewports;

/// Per-frame ordering: measure time, move the train, then spin the props.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RideSet {
    Clock,
    Animate,
    Props,
}

/// The ride itself, without any scenery, windowing or UI.
pub struct RidePlugin;

impl Plugin for RidePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<RideConfig>()
            .init_resource::<TrackCurve>()
            .init_resource::<VehicleState>()
            .init_resource::<RideStats>()
            .init_resource::<FrameClock>()
            .register_type::<VehicleState>()
            .register_type::<RideStats>()
            .register_type::<RideConfig>()
            .register_type::<Funfair>()
            .configure_sets(Update, (RideSet::Clock, RideSet::Animate, RideSet::Props).chain())
            .add_systems(Update, (
                tick_frame_clock.in_set(RideSet::Clock),
                animate_vehicle.in_set(RideSet::Animate),
                spin_funfairs.in_set(RideSet::Props),
            ));
    }
}

/// Full scene: scenery, track, train rig, presentation and the ride.
#[derive(Default)]
pub struct CoasterPlugin {
    config: RideConfig,
}

impl CoasterPlugin {
    pub fn new(config: RideConfig) -> Self {
        CoasterPlugin { config }
    }
}

impl Plugin for CoasterPlugin {
    fn build(&self, app: &mut App) {
        let initial = if self.config.start_in_stereo { PresentationMode::Stereo } else { PresentationMode::Mono };

        app
            .insert_resource(self.config.clone())
            .insert_resource(GenRng::new(self.config.seed))
            .insert_resource(ClearColor(BACKGROUND))
            .add_plugins(RidePlugin)
            .add_plugins(EventSystemPlugin)
            .add_plugins(PresentationPlugin { initial })
            .add_systems(Startup, (build_scenery, build_track, spawn_ride_rig))
            .add_systems(Update, (
                regenerate_on_space,
                fit_viewports.after(RideSet::Animate),
            ));
    }
}
