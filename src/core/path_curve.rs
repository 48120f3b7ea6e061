use std::f64::consts::TAU;
use std::sync::Arc;
use bevy::prelude::*;
use bevy_math::DVec3;

/// Half-width of the finite difference window used for tangents.
pub const TANGENT_EPSILON: f64 = 0.0001;

/// A closed parametric curve over the normalized parameter `t`.
///
/// `position` must be periodic with period 1. The provided `tangent` samples the
/// curve on both sides of `t` (clamped to `[0, 1]`) and normalizes the difference.
pub trait PathCurve: Send + Sync {
    fn position(&self, t: f64) -> DVec3;

    fn tangent(&self, t: f64) -> DVec3 {
        let t1 = (t - TANGENT_EPSILON).max(0.0);
        let t2 = (t + TANGENT_EPSILON).min(1.0);

        (self.position(t2) - self.position(t1)).normalize_or_zero()
    }
}

/// The ride's track: a trigonometric knot around the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoasterCurve;

impl CoasterCurve {
    pub const SCALE: f64 = 2.0;
}

impl PathCurve for CoasterCurve {
    fn position(&self, t: f64) -> DVec3 {
        let theta = t * TAU;

        let x = (theta * 3.0).sin() * (theta * 4.0).cos() * 50.0;
        let y = (theta * 10.0).sin() * 2.0 + (theta * 17.0).cos() * 2.0 + 5.0;
        let z = theta.sin() * (theta * 4.0).sin() * 50.0;

        DVec3::new(x, y, z) * Self::SCALE
    }
}

// Shared handle to the curve the ride follows
#[derive(Resource, Clone)]
pub struct TrackCurve(pub Arc<dyn PathCurve>);

impl TrackCurve {
    pub fn new(curve: impl PathCurve + 'static) -> Self {
        TrackCurve(Arc::new(curve))
    }
}

impl Default for TrackCurve {
    fn default() -> Self {
        TrackCurve::new(CoasterCurve)
    }
}
