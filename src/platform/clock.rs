//! Fixed-rate tick clock
//!
//! Accumulates real frame time and releases whole 60 Hz ticks, at most
//! `MAX_SUBSTEPS` per update.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::Tick;

/// Longest frame delta accepted before clamping (seconds)
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct TickClock {
    accumulator: f32,
    next_tick: u64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed `dt` seconds of wall time and return the ticks now due
    pub fn update(&mut self, dt: f32) -> Vec<Tick> {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut due = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            due.push(Tick(self.next_tick));
            self.next_tick += 1;
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        due
    }

    /// Drop any banked time and number ticks from 0 again
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
