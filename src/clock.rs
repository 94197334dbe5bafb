use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a target frame rate and reports the real elapsed time
/// between ticks.  Δt is variable; there is no fixed-step accumulator.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last: Instant::now(),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame
    }

    /// Sleep out whatever is left of the current frame budget, then return the
    /// seconds elapsed since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f32()
    }
}
