use bevy::prelude::*;

#[derive(States, Clone, Copy, Eq, PartialEq, Debug, Hash, Default)]
pub enum PresentationMode {
    #[default]
    Mono,
    Stereo,
}

impl PresentationMode {
    pub fn toggled(self) -> Self {
        match self {
            PresentationMode::Mono => PresentationMode::Stereo,
            PresentationMode::Stereo => PresentationMode::Mono,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            PresentationMode::Mono => "ENTER VR",
            PresentationMode::Stereo => "EXIT VR",
        }
    }
}

#[derive(Component)]
pub struct VrButton;

#[derive(Component)]
pub struct VrButtonLabel;

const IDLE: Color = Color::srgba(0.0, 0.0, 0.0, 0.1);
const HOVERED: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);

pub fn spawn_vr_button(mut commands: Commands, mode: Res<State<PresentationMode>>) {
    let button = commands
        .spawn_empty()
        .insert(Button)
        .insert(Interaction::default())
        .insert(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            left: Val::Percent(50.0),
            margin: UiRect::left(Val::Px(-50.0)),
            width: Val::Px(100.0),
            padding: UiRect::axes(Val::Px(6.0), Val::Px(12.0)),
            border: UiRect::all(Val::Px(1.0)),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .insert(BorderColor(Color::WHITE))
        .insert(BorderRadius::all(Val::Px(4.0)))
        .insert(BackgroundColor(IDLE))
        .insert(Name::new("VrButton"))
        .insert(VrButton)
        .id();

    commands.entity(button).with_children(|parent| {
        parent
            .spawn_empty()
            .insert(Text::new(mode.get().button_label()))
            .insert(TextFont { font_size: 13.0, ..default() })
            .insert(TextColor(Color::WHITE))
            .insert(VrButtonLabel);
    });
}

pub fn vr_button_system(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<VrButton>)>,
    mode: Res<State<PresentationMode>>,
    mut next: ResMut<NextState<PresentationMode>>,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                let target = mode.get().toggled();
                info!("[View] Switching presentation to {:?}", target);
                next.set(target);
            }
            Interaction::Hovered => background.0 = HOVERED,
            Interaction::None => background.0 = IDLE,
        }
    }
}

pub fn sync_vr_button_label(
    mode: Res<State<PresentationMode>>,
    mut labels: Query<&mut Text, With<VrButtonLabel>>,
) {
    for mut text in labels.iter_mut() {
        text.0 = mode.get().button_label().to_string();
    }
}

pub struct PresentationPlugin {
    pub initial: PresentationMode,
}

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_state(self.initial)
            .add_systems(Startup, spawn_vr_button)
            .add_systems(Update, (
                vr_button_system,
                sync_vr_button_label.run_if(state_changed::<PresentationMode>),
            ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(PresentationMode::Mono.toggled(), PresentationMode::Stereo);
        assert_eq!(PresentationMode::Stereo.toggled().toggled(), PresentationMode::Stereo);
    }

    #[test]
    fn label_names_the_next_action() {
        assert_eq!(PresentationMode::Mono.button_label(), "ENTER VR");
        assert_eq!(PresentationMode::Stereo.button_label(), "EXIT VR");
    }
}
