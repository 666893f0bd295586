use std::time::Instant;

/// Wall-clock bookkeeping for the host loop.
///
/// Only used for reporting; the simulation itself always advances by the fixed
/// logical step.
pub struct FrameClock {
    start_time: Instant,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            frame_count: 0,
        }
    }

    /// Mark the end of a frame
    pub fn tick(&mut self) {
        self.frame_count += 1;
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f64 {
        let elapsed = self.elapsed_seconds();
        if elapsed > 0.0 {
            self.frame_count as f64 / elapsed
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
