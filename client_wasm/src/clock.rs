//! Frame timing from `requestAnimationFrame` timestamps

use race_core::{Clock, Params};

/// Turns millisecond timestamps into per-frame seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    now_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the timestamp of the frame about to run
    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) -> f32 {
        let dt = match self.last_ms {
            // First frame has no previous timestamp
            None => 1.0 / Params::TARGET_FPS,
            Some(last) => {
                let elapsed = ((self.now_ms - last) / 1000.0) as f32;
                if elapsed.is_finite() {
                    elapsed.max(0.0)
                } else {
                    0.0
                }
            }
        };
        self.last_ms = Some(self.now_ms);
        dt
    }
}
