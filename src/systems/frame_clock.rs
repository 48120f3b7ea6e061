use bevy::prelude::*;

/// Wall-clock bookkeeping for the ride, in milliseconds since startup.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    pub now_ms: f64,
    pub previous_ms: f64,
    pub delta_ms: f64,
}

impl FrameClock {
    pub fn tick(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        self.delta_ms = now_ms - self.previous_ms;
        self.previous_ms = now_ms;
    }
}

pub fn tick_frame_clock(time: Res<Time<Real>>, mut clock: ResMut<FrameClock>) {
    clock.tick(time.elapsed().as_secs_f64() * 1000.0);
}
