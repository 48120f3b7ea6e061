use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::{PrimaryWindow, WindowResized};
use crate::core::components::{Eye, EyeCamera, MainCamera};
use crate::systems::presentation::PresentationMode;

/// Physical-pixel rectangle a camera draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRect {
    pub position: UVec2,
    pub size: UVec2,
}

impl ViewRect {
    pub fn aspect_ratio(&self) -> f32 {
        self.size.x.max(1) as f32 / self.size.y.max(1) as f32
    }

    fn to_viewport(self) -> Viewport {
        Viewport {
            physical_position: self.position,
            physical_size: self.size,
            ..default()
        }
    }
}

// Left eye gets the left half; an odd pixel goes to the right eye.
pub fn stereo_rect(window: UVec2, eye: Eye) -> ViewRect {
    let left_width = window.x / 2;
    match eye {
        Eye::Left => ViewRect { position: UVec2::ZERO, size: UVec2::new(left_width, window.y) },
        Eye::Right => ViewRect {
            position: UVec2::new(left_width, 0),
            size: UVec2::new(window.x - left_width, window.y),
        },
    }
}

/// Whether every camera of `mode` gets a non-empty viewport in a window of `size`.
pub fn can_lay_out(size: UVec2, mode: PresentationMode) -> bool {
    let min_width = match mode {
        PresentationMode::Mono => 1,
        PresentationMode::Stereo => 2,
    };
    size.x >= min_width && size.y > 0
}

fn set_aspect(projection: &mut Projection, aspect_ratio: f32) {
    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = aspect_ratio;
    }
}

/// Re-lays out the ride cameras after a resize or a presentation switch.
pub fn fit_viewports(
    mut resized: EventReader<WindowResized>,
    mode: Res<State<PresentationMode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut mono: Query<(&mut Camera, &mut Projection), (With<MainCamera>, Without<EyeCamera>)>,
    mut eyes: Query<(&mut Camera, &mut Projection, &EyeCamera), Without<MainCamera>>,
) {
    let was_resized = resized.read().count() > 0;
    if !was_resized && !mode.is_changed() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = UVec2::new(window.resolution.physical_width(), window.resolution.physical_height());
    if !can_lay_out(size, *mode.get()) {
        debug!("[View] Window {}x{} too small for {:?} view", size.x, size.y, mode.get());
        return;
    }

    let stereo = *mode.get() == PresentationMode::Stereo;

    for (mut camera, mut projection) in mono.iter_mut() {
        camera.is_active = !stereo;
        camera.viewport = None;
        set_aspect(&mut projection, size.x as f32 / size.y as f32);
    }

    for (mut camera, mut projection, eye) in eyes.iter_mut() {
        let rect = stereo_rect(size, eye.0);
        camera.is_active = stereo;
        camera.viewport = Some(rect.to_viewport());
        set_aspect(&mut projection, rect.aspect_ratio());
    }

    debug!("[View] Laid out {:?} view at {}x{}", mode.get(), size.x, size.y);
}
