use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use coaster_vr::core::coaster_plugin::CoasterPlugin;
use coaster_vr::management::config_loader::{load_or_default, DEFAULT_CONFIG_PATH};

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "warn,coaster_vr=info".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Coaster VR".into(),
                    resolution: (1280.0, 720.0).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    // Config is read after the log plugin so load problems are reported
    let config = load_or_default(DEFAULT_CONFIG_PATH);

    // Setup inspector plugins
    app.add_plugins(
        WorldInspectorPlugin::default().run_if(bevy::input::common_conditions::input_toggle_active(false, KeyCode::Escape)),
    );

    // Setup scene, ride and presentation
    app.add_plugins(CoasterPlugin::new(config));

    app.run();
}
