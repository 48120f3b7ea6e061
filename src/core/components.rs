use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

#[derive(Component)]
pub struct MainDirectionalLight;

/// The camera-carrying node driven along the track.
#[derive(Component, Default)]
pub struct Train;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    // Sign of the eye's offset along the rig's local X axis
    pub fn sign(self) -> f32 {
        match self {
            Eye::Left => -1.0,
            Eye::Right => 1.0,
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct EyeCamera(pub Eye);

// Spinning fairground prop; `tilt` is a fixed rotation about X applied before the spin
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Funfair {
    pub tilt: f32,
}

// Root for everything that regeneration throws away
#[derive(Component)]
pub struct GeneratedRoot;
