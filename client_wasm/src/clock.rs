//! Fixed-rate tick scheduling for the animation-frame loop

use game_core::Params;

const TICK_MS: f64 = 1000.0 / Params::TICK_RATE_HZ;
const EPSILON_MS: f64 = 1e-6;

/// Turns `requestAnimationFrame` timestamps into a number of simulation ticks,
/// so game speed does not depend on the display refresh rate.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    accumulator_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks to simulate for the frame stamped `now_ms`
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last_ms) = self.last_ms.replace(now_ms) else {
            return 1;
        };

        // Clamp to prevent a burst of catch-up ticks after the tab was hidden
        let elapsed = (now_ms - last_ms).clamp(0.0, Params::MAX_FRAME_MS);
        self.accumulator_ms += elapsed;

        let ticks = ((self.accumulator_ms + EPSILON_MS) / TICK_MS).floor();
        self.accumulator_ms = (self.accumulator_ms - ticks * TICK_MS).max(0.0);
        ticks as u32
    }
}
