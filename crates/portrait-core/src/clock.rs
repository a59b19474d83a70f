use crate::constants::{BREATHE_TICK_SEC, BURST_PROBABILITY};
use rand::Rng;

/// Global animation timing shared by every dot.
///
/// The breathing time advances only on the fixed-rate interval
/// (`tick_breathing`); frames read it. Bursts are rolled on their own slower
/// interval and ended by a timeout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationClock {
    pub breathing_time: f32,
    pub organic_active: bool,
    /// Number of bursts started so far; drives the organic phase.
    pub burst_count: u32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_breathing(&mut self) {
        self.breathing_time += BREATHE_TICK_SEC;
    }

    /// Start a burst with [`BURST_PROBABILITY`]. Returns true when a burst began,
    /// in which case the caller schedules [`end_burst`](Self::end_burst).
    pub fn roll_burst<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if rng.gen::<f32>() < BURST_PROBABILITY {
            self.begin_burst();
            true
        } else {
            false
        }
    }

    pub fn begin_burst(&mut self) {
        self.organic_active = true;
        self.burst_count = self.burst_count.wrapping_add(1);
        log::debug!("[clock] organic burst #{}", self.burst_count);
    }

    pub fn end_burst(&mut self) {
        self.organic_active = false;
    }
}
